//! Typed encoding and decoding of Guild Wars 2 chat links.
//!
//! This is the main codec crate. It ties together the byte stream and wire
//! crates to turn `[&...]` chat tokens into typed [`ChatLink`] values and back.
//!
//! # Features
//!
//! - Coin, item, text, map, skill, trait, recipe, skin, and outfit links
//! - Item links with upgrade, secondary upgrade, and skin modifiers
//! - Scanning free-form chat text for embedded links
//! - Optional `serde` support behind the `serde` feature
//!
//! # Design Principles
//!
//! - **Correctness first** - Encoding is validated before any byte is written.
//! - **Tag first** - The header tag alone selects the record layout.
//! - **Deterministic** - A link has exactly one byte form and one token.
//!
//! # Example
//!
//! ```
//! use codec::{ChatLink, ItemLink};
//!
//! let link: ChatLink = "[&AgGqtgAA]".parse().unwrap();
//! assert_eq!(link, ChatLink::Item(ItemLink::new(46_762)));
//! assert_eq!(link.to_token().unwrap(), "[&AgGqtgAA]");
//! ```

mod decode;
mod encode;
mod error;
mod link;
mod scan;

pub use decode::{decode_link, decode_token};
pub use encode::{encode_link, encode_token};
pub use error::{CodecError, CodecResult, MalformedReason, StateReason};
pub use link::{
    ChatLink, CoinLink, ItemLink, MapLink, OutfitLink, RecipeLink, SkillLink, SkinLink, TextLink,
    TraitLink,
};
pub use scan::{find_links, find_links_with_limits, FoundLink, LinkScanner};
pub use wire::{Header, ItemFlags, Limits, Modifier};
