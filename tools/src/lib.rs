//! Introspection and debugging tools for Guild Wars 2 chat links.
//!
//! This crate provides utilities for looking inside chat tokens:
//!
//! - Break a token down into its raw bytes, header tag, and decoded link
//! - Describe decoded links in a human-readable form
//! - Find every link in chat logs, including the ones that fail to decode
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use codec::{ChatLink, Header, Limits};
use serde::Serialize;

/// Structural breakdown of a single chat token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub token: String,
    /// Decoded payload as lowercase hex, space separated.
    pub bytes_hex: String,
    pub tag: u8,
    /// `None` when the tag is not an assigned header value.
    pub header: Option<Header>,
    pub body_len: usize,
    pub link: Option<ChatLink>,
    pub error: Option<String>,
}

/// A chat link candidate found while scanning text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanHit {
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column of the opening `[&`.
    pub column: usize,
    pub token: String,
    pub link: Option<ChatLink>,
    pub error: Option<String>,
}

/// Inspects a chat token.
///
/// Fails only when the text cannot be transcoded into bytes at all; record
/// level problems (unknown tags, truncation) are reported in the result.
pub fn inspect_token(token: &str, limits: &Limits) -> Result<InspectReport> {
    let bytes = wire::decode_token(token, limits)
        .with_context(|| format!("transcode token {token}"))?;
    let (&tag, body) = bytes
        .split_first()
        .context("token decodes to an empty buffer")?;

    let (link, error) = match codec::decode_link(&bytes) {
        Ok(link) => (Some(link), None),
        Err(err) => (None, Some(err.to_string())),
    };

    Ok(InspectReport {
        token: token.to_string(),
        bytes_hex: hex(&bytes),
        tag,
        header: Header::from_raw(tag),
        body_len: body.len(),
        link,
        error,
    })
}

/// Renders an inspect report for terminal output.
#[must_use]
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "token: {}", report.token);
    let _ = writeln!(out, "bytes: {}", report.bytes_hex);
    let header = report
        .header
        .map_or_else(|| "unassigned".to_string(), |header| header.to_string());
    let _ = writeln!(out, "tag: {} ({header})", report.tag);
    let _ = writeln!(out, "body: {} bytes", report.body_len);
    match (&report.link, &report.error) {
        (Some(link), _) => {
            let _ = write!(out, "link: {}", describe_link(link));
        }
        (None, Some(error)) => {
            let _ = write!(out, "error: {error}");
        }
        (None, None) => {}
    }
    out
}

/// One-line description of a decoded link.
#[must_use]
pub fn describe_link(link: &ChatLink) -> String {
    match link {
        ChatLink::Coin(coin) => {
            let (gold, silver, copper) = coin.gold_silver_copper();
            format!("coin {} ({gold}g {silver}s {copper}c)", coin.quantity)
        }
        ChatLink::Item(item) => {
            let mut out = format!("item {} x{}", item.item_id, item.count);
            let modifiers: Vec<String> = item
                .flags
                .modifiers()
                .filter_map(|modifier| {
                    item.modifier(modifier)
                        .map(|id| format!("{modifier} {id}"))
                })
                .collect();
            if !modifiers.is_empty() {
                let _ = write!(out, " ({})", modifiers.join(", "));
            }
            out
        }
        ChatLink::Text(text) => format!("text {}", text.text_id),
        ChatLink::Map(map) => format!("map {}", map.point_id),
        ChatLink::Skill(skill) => format!("skill {}", skill.skill_id),
        ChatLink::Trait(tr) => format!("trait {}", tr.trait_id),
        ChatLink::Recipe(recipe) => format!("recipe {}", recipe.recipe_id),
        ChatLink::Skin(skin) => format!("skin {}", skin.skin_id),
        ChatLink::Outfit(outfit) => format!("outfit {}", outfit.outfit_id),
    }
}

/// Finds every chat link candidate in `text`, line by line.
#[must_use]
pub fn scan_text(text: &str, limits: &Limits) -> Vec<ScanHit> {
    let mut hits = Vec::new();
    for (index, line) in text.lines().enumerate() {
        for found in codec::find_links_with_limits(line, limits) {
            let (link, error) = match found.result {
                Ok(link) => (Some(link), None),
                Err(err) => (None, Some(err.to_string())),
            };
            hits.push(ScanHit {
                line: index + 1,
                column: found.range.start + 1,
                token: found.token.to_string(),
                link,
                error,
            });
        }
    }
    hits
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02x}");
    }
    out
}
