//! Header tags, item flags, and token transcoding for the gw2link codec.
//!
//! This crate handles the chat-link wire format: the header tag byte, the item
//! modifier flag byte, the record size constants, and the `[&...]` text form.
//! It does not know about typed links, only the structure around them.
//!
//! # Design Principles
//!
//! - **Exact wire values** - Tag numbers and flag bits are part of the format.
//! - **Tag first** - The header is resolved before any body byte is looked at.
//! - **Bounded decoding** - Token length is validated against limits before transcoding.
//! - **Canonical text** - Each byte buffer maps to exactly one token.

mod error;
mod flags;
mod frame;
mod header;
mod limits;
mod token;

pub use error::{DecodeError, LimitKind, TokenError, WireResult};
pub use flags::{ItemFlags, Modifier};
pub use frame::{decode_frame, WireFrame};
pub use header::{
    Header, ID_SIZE, ITEM_ID_MAX, ITEM_MAX_BODY_LEN, ITEM_MIN_BODY_LEN, TAG_SIZE,
};
pub use limits::Limits;
pub use token::{decode_token, encode_token, token_payload, TOKEN_PREFIX, TOKEN_SUFFIX};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = TAG_SIZE;
        let _ = ID_SIZE;
        let _ = ITEM_ID_MAX;
        let _ = Header::from_raw(1);
        let _ = ItemFlags::empty();
        let _ = Modifier::CANONICAL;
        let _ = Limits::default();
        let _ = TOKEN_PREFIX;

        // Error types
        let _: WireResult<()> = Ok(());
    }

    #[test]
    fn frame_and_token_integration() {
        let bytes = decode_token("[&AgGqtgAA]", &Limits::default()).unwrap();
        let frame = decode_frame(&bytes).unwrap();
        assert_eq!(frame.header, Header::Item);
        assert_eq!(frame.body.len(), ITEM_MIN_BODY_LEN);

        let flags = ItemFlags::from_raw(frame.body[4]);
        assert!(flags.is_empty());
        assert_eq!(encode_token(&bytes), "[&AgGqtgAA]");
    }

    #[test]
    fn item_body_len_matches_flag_count() {
        for raw in [0x00, 0x40, 0x20, 0x80, 0x60, 0xC0, 0xA0, 0xE0] {
            let flags = ItemFlags::from_raw(raw);
            let len = ITEM_MIN_BODY_LEN + flags.modifier_count() * ID_SIZE;
            assert!(len <= ITEM_MAX_BODY_LEN);
        }
    }
}
