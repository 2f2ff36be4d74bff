//! Locating chat links inside free-form chat text.

use std::ops::Range;

use tracing::debug;
use wire::{Limits, TOKEN_PREFIX, TOKEN_SUFFIX};

use crate::decode::decode_token;
use crate::error::CodecResult;
use crate::link::ChatLink;

/// A `[&...]` candidate found in chat text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundLink<'a> {
    /// Byte range of the token within the scanned text.
    pub range: Range<usize>,
    pub token: &'a str,
    pub result: CodecResult<ChatLink>,
}

/// Iterator over every chat-link candidate in a piece of text.
///
/// Candidates that fail to decode are still yielded, with their error, so
/// callers can render them as plain text.
#[derive(Debug, Clone)]
pub struct LinkScanner<'a> {
    text: &'a str,
    offset: usize,
    limits: Limits,
}

/// Scans chat text for links using default limits.
#[must_use]
pub fn find_links(text: &str) -> LinkScanner<'_> {
    find_links_with_limits(text, &Limits::default())
}

/// Scans chat text for links using the given limits.
#[must_use]
pub fn find_links_with_limits<'a>(text: &'a str, limits: &Limits) -> LinkScanner<'a> {
    LinkScanner {
        text,
        offset: 0,
        limits: limits.clone(),
    }
}

impl<'a> Iterator for LinkScanner<'a> {
    type Item = FoundLink<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.offset..];
        let open = rest.find(TOKEN_PREFIX)?;
        let close = rest[open..].find(TOKEN_SUFFIX)? + open;

        // "[&[&AQ==]" starts at the innermost opener.
        let open = rest[..close].rfind(TOKEN_PREFIX).unwrap_or(open);
        let end = close + TOKEN_SUFFIX.len();

        let start = self.offset + open;
        let range = start..self.offset + end;
        self.offset = range.end;

        let token = &self.text[range.clone()];
        let result = decode_token(token, &self.limits);
        if let Err(err) = &result {
            debug!(offset = start, token, %err, "skipping undecodable chat link");
        }
        Some(FoundLink {
            range,
            token,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::link::{CoinLink, ItemLink, SkillLink};

    #[test]
    fn finds_nothing_in_plain_text() {
        assert_eq!(find_links("lf2m fractals, no links here").count(), 0);
        assert_eq!(find_links("").count(), 0);
    }

    #[test]
    fn finds_single_link_with_range() {
        let text = "selling [&AgGqtgAA] cheap";
        let found: Vec<_> = find_links(text).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].range, 8..19);
        assert_eq!(&text[found[0].range.clone()], "[&AgGqtgAA]");
        assert_eq!(found[0].token, "[&AgGqtgAA]");
        assert_eq!(
            found[0].result,
            Ok(ChatLink::Item(ItemLink::new(46_762)))
        );
    }

    #[test]
    fn finds_multiple_links_in_order() {
        let text = "[&ATkwAAA=] for [&B3MVAAA=]";
        let links: Vec<_> = find_links(text)
            .map(|found| found.result.unwrap())
            .collect();
        assert_eq!(
            links,
            vec![
                ChatLink::Coin(CoinLink::new(12_345)),
                ChatLink::Skill(SkillLink::new(5_491)),
            ]
        );
    }

    #[test]
    fn yields_errors_for_bad_candidates() {
        let text = "[&yAEAAAA=] then [&ATkwAAA=]";
        let found: Vec<_> = find_links(text).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].result, Err(CodecError::UnknownTag { tag: 200 }));
        assert!(found[1].result.is_ok());
    }

    #[test]
    fn starts_at_innermost_opener() {
        let text = "[&[&ATkwAAA=]";
        let found: Vec<_> = find_links(text).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].range, 2..13);
        assert!(found[0].result.is_ok());
    }

    #[test]
    fn unterminated_candidate_ends_scan() {
        let text = "[&ATkwAAA= and nothing after";
        assert_eq!(find_links(text).count(), 0);
    }

    #[test]
    fn respects_limits() {
        let limits = Limits {
            max_token_len: 4,
            max_payload_bytes: 32,
        };
        let found: Vec<_> = find_links_with_limits("[&ATkwAAA=]", &limits).collect();
        assert_eq!(found.len(), 1);
        assert!(found[0].result.is_err());
    }

    #[test]
    fn handles_multibyte_text_around_links() {
        let text = "größe [&ATkwAAA=] ✓";
        let found: Vec<_> = find_links(text).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].range.clone()], "[&ATkwAAA=]");
    }
}
