//! Splitting a record buffer into header tag and body.

use crate::error::{DecodeError, WireResult};
use crate::header::{Header, TAG_SIZE};

/// A record buffer split at the header tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireFrame<'a> {
    pub header: Header,
    /// Bytes following the tag, not yet interpreted.
    pub body: &'a [u8],
}

impl WireFrame<'_> {
    /// Total frame length including the tag byte.
    #[must_use]
    pub const fn len(&self) -> usize {
        TAG_SIZE + self.body.len()
    }

    /// Always `false`; a frame holds at least its tag.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Resolves the header tag of a record buffer.
///
/// No body byte is read; interpreting the body is left to the caller once the
/// tag is known.
pub fn decode_frame(buf: &[u8]) -> WireResult<WireFrame<'_>> {
    let (&tag, body) = buf.split_first().ok_or(DecodeError::EmptyBuffer)?;
    let header = Header::from_raw(tag).ok_or(DecodeError::UnknownTag { tag })?;
    Ok(WireFrame { header, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_frame_splits_tag() {
        let buf = [0x01, 0x39, 0x30, 0x00, 0x00];
        let frame = decode_frame(&buf).unwrap();
        assert_eq!(frame.header, Header::Coin);
        assert_eq!(frame.body, &[0x39, 0x30, 0x00, 0x00]);
        assert_eq!(frame.len(), 5);
    }

    #[test]
    fn decode_frame_tag_only() {
        let frame = decode_frame(&[0x07]).unwrap();
        assert_eq!(frame.header, Header::Skill);
        assert!(frame.body.is_empty());
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn decode_frame_rejects_empty() {
        assert_eq!(decode_frame(&[]).unwrap_err(), DecodeError::EmptyBuffer);
    }

    #[test]
    fn decode_frame_rejects_reserved_tag() {
        let err = decode_frame(&[6, 1, 0, 0, 0]).unwrap_err();
        assert_eq!(err, DecodeError::UnknownTag { tag: 6 });
    }

    #[test]
    fn decode_frame_rejects_out_of_range_tag() {
        let err = decode_frame(&[200, 1, 0, 0, 0]).unwrap_err();
        assert_eq!(err, DecodeError::UnknownTag { tag: 200 });
    }

    #[test]
    fn decode_frame_resolves_layoutless_tags() {
        // The frame layer only resolves tags; layout support is a codec concern.
        let frame = decode_frame(&[9, 0xAB]).unwrap();
        assert_eq!(frame.header, Header::Player);
        assert!(!frame.header.has_record_layout());
    }
}
