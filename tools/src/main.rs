use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::{
    ChatLink, CoinLink, ItemLink, Limits, MapLink, OutfitLink, RecipeLink, SkillLink, SkinLink,
    TextLink, TraitLink,
};
use glob::Pattern;
use gw2link_tools::{describe_link, format_inspect_pretty, inspect_token, scan_text};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GW2LINK_LOG";

#[derive(Parser)]
#[command(
    name = "gw2link",
    version,
    about = "Guild Wars 2 chat link encoding and inspection tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode chat tokens into links.
    Decode {
        /// Tokens such as `[&AgGqtgAA]`.
        #[arg(required = true)]
        tokens: Vec<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
    },
    /// Encode a link into a chat token.
    Encode {
        #[command(subcommand)]
        link: EncodeLink,
    },
    /// Show the raw structure of a token.
    Inspect {
        token: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Pretty)]
        format: DecodeFormat,
    },
    /// Find chat links in a log file or a directory of log files.
    Scan {
        path: PathBuf,
        /// Optional glob filter when scanning a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Pretty)]
        format: DecodeFormat,
    },
}

#[derive(Subcommand)]
enum EncodeLink {
    /// Currency amount in copper.
    Coin { quantity: u32 },
    /// Item stack with optional upgrades and skin.
    Item {
        id: u32,
        #[arg(long, default_value_t = 1)]
        count: u8,
        /// Upgrade component id.
        #[arg(long)]
        suffix: Option<u32>,
        /// Second upgrade component id.
        #[arg(long)]
        secondary_suffix: Option<u32>,
        /// Skin id.
        #[arg(long)]
        skin: Option<u32>,
    },
    Text { id: u32 },
    /// Point of interest, waypoint, or vista.
    Map { id: u32 },
    Skill { id: u32 },
    Trait { id: u32 },
    Recipe { id: u32 },
    Skin { id: u32 },
    Outfit { id: u32 },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    install_tracing();
    let cli = Cli::parse();
    let limits = Limits::default();
    match cli.command {
        Command::Decode { tokens, format } => decode_tokens(&tokens, format, &limits)?,
        Command::Encode { link } => {
            let link = build_link(link);
            let token = link.to_token().context("encode link")?;
            println!("{token}");
        }
        Command::Inspect { token, format } => {
            let report = inspect_token(&token, &limits)?;
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => println!("{}", format_inspect_pretty(&report)),
            }
        }
        Command::Scan { path, glob, format } => {
            let files = if path.is_dir() {
                collect_log_files(&path, glob.as_deref())?
            } else {
                vec![path]
            };
            for file in files {
                scan_file(&file, format, &limits)?;
            }
        }
    }
    Ok(())
}

fn install_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn decode_tokens(tokens: &[String], format: DecodeFormat, limits: &Limits) -> Result<()> {
    let mut failed = 0usize;
    let mut links = Vec::with_capacity(tokens.len());
    for token in tokens {
        match codec::decode_token(token, limits) {
            Ok(link) => links.push(link),
            Err(err) => {
                warn!(%token, %err, "failed to decode token");
                failed += 1;
            }
        }
    }

    match format {
        DecodeFormat::Json => {
            let json = serde_json::to_string_pretty(&links).context("serialize json")?;
            println!("{json}");
        }
        DecodeFormat::Pretty => {
            for link in &links {
                println!("{}", describe_link(link));
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} tokens failed to decode", tokens.len());
    }
    Ok(())
}

fn build_link(link: EncodeLink) -> ChatLink {
    match link {
        EncodeLink::Coin { quantity } => CoinLink::new(quantity).into(),
        EncodeLink::Item {
            id,
            count,
            suffix,
            secondary_suffix,
            skin,
        } => {
            let mut item = ItemLink::new(id).with_count(count);
            if let Some(suffix) = suffix {
                item = item.with_suffix_item(suffix);
            }
            if let Some(secondary) = secondary_suffix {
                item = item.with_secondary_suffix_item(secondary);
            }
            if let Some(skin) = skin {
                item = item.with_skin(skin);
            }
            item.into()
        }
        EncodeLink::Text { id } => TextLink::new(id).into(),
        EncodeLink::Map { id } => MapLink::new(id).into(),
        EncodeLink::Skill { id } => SkillLink::new(id).into(),
        EncodeLink::Trait { id } => TraitLink::new(id).into(),
        EncodeLink::Recipe { id } => RecipeLink::new(id).into(),
        EncodeLink::Skin { id } => SkinLink::new(id).into(),
        EncodeLink::Outfit { id } => OutfitLink::new(id).into(),
    }
}

fn scan_file(path: &Path, format: DecodeFormat, limits: &Limits) -> Result<()> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read log {}", path.display()))?;
    let hits = scan_text(&contents, limits);
    debug!(path = %path.display(), hits = hits.len(), "scanned log");

    match format {
        DecodeFormat::Json => {
            let json = serde_json::to_string_pretty(&hits).context("serialize json")?;
            println!("{json}");
        }
        DecodeFormat::Pretty => {
            for hit in &hits {
                let detail = match (&hit.link, &hit.error) {
                    (Some(link), _) => describe_link(link),
                    (None, Some(error)) => format!("error: {error}"),
                    (None, None) => String::new(),
                };
                println!(
                    "{}:{}:{}: {} {detail}",
                    path.display(),
                    hit.line,
                    hit.column,
                    hit.token
                );
            }
        }
    }
    Ok(())
}

fn collect_log_files(dir: &Path, glob: Option<&str>) -> Result<Vec<PathBuf>> {
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}
