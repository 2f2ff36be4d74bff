//! Error types for codec operations.

use std::fmt;

use wire::{Header, LimitKind, Modifier, TokenError};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding a chat link.
///
/// Every error is reported at the boundary of the encode/decode call; no
/// partial link or buffer is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Token text or record buffer is not well formed.
    Malformed(MalformedReason),

    /// Tag byte is unassigned, or names a record kind with no fixed layout.
    UnknownTag { tag: u8 },

    /// Fewer body bytes than the record requires.
    Truncated {
        header: Header,
        /// Body bytes required, tag excluded.
        needed: usize,
        /// Body bytes present, tag excluded.
        available: usize,
    },

    /// A field value exceeds the width of its wire slot.
    OutOfRange {
        field: &'static str,
        value: u64,
        bits: u8,
    },

    /// A link's fields contradict each other.
    InvalidState(StateReason),
}

/// Details for malformed input errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Token text failed to transcode.
    Token(TokenError),
    /// Decoded buffer has no header tag.
    EmptyBuffer,
    /// Bytes remain after a complete record.
    TrailingBytes {
        header: Header,
        expected: usize,
        actual: usize,
    },
    /// Item flags carry bits outside the known modifiers.
    ReservedItemFlags { flags: u8 },
    /// Token or payload is larger than the configured limits allow.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Details for invalid state errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateReason {
    /// A modifier flag is set but its id is missing.
    MissingModifierId(Modifier),
    /// A modifier id is present but its flag is not set.
    UnflaggedModifierId(Modifier),
    /// Item flags carry bits outside the known modifiers.
    ReservedItemFlags { flags: u8 },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(reason) => write!(f, "malformed chat link: {reason}"),
            Self::UnknownTag { tag } => {
                write!(f, "unknown or unsupported chat link tag: {tag}")
            }
            Self::Truncated {
                header,
                needed,
                available,
            } => {
                write!(
                    f,
                    "truncated {header} link: need {needed} body bytes, have {available}"
                )
            }
            Self::OutOfRange { field, value, bits } => {
                write!(f, "{field} value {value} does not fit in {bits} bits")
            }
            Self::InvalidState(reason) => write!(f, "invalid link state: {reason}"),
        }
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(err) => write!(f, "{err}"),
            Self::EmptyBuffer => write!(f, "empty buffer"),
            Self::TrailingBytes {
                header,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{header} record has {actual} body bytes, expected {expected}"
                )
            }
            Self::ReservedItemFlags { flags } => {
                write!(f, "reserved item flag bits set: 0x{flags:02X}")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for StateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingModifierId(modifier) => {
                write!(f, "{modifier} flag is set but no {modifier} id is present")
            }
            Self::UnflaggedModifierId(modifier) => {
                write!(f, "{modifier} id is present but its flag is not set")
            }
            Self::ReservedItemFlags { flags } => {
                write!(f, "reserved item flag bits set: 0x{flags:02X}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(MalformedReason::Token(err)) => Some(err),
            _ => None,
        }
    }
}

impl From<wire::DecodeError> for CodecError {
    fn from(err: wire::DecodeError) -> Self {
        match err {
            wire::DecodeError::EmptyBuffer => Self::Malformed(MalformedReason::EmptyBuffer),
            wire::DecodeError::UnknownTag { tag } => Self::UnknownTag { tag },
            wire::DecodeError::Token(err) => Self::Malformed(MalformedReason::Token(err)),
            wire::DecodeError::LimitsExceeded {
                kind,
                limit,
                actual,
            } => Self::Malformed(MalformedReason::LimitsExceeded {
                kind,
                limit,
                actual,
            }),
        }
    }
}

impl From<StateReason> for CodecError {
    fn from(reason: StateReason) -> Self {
        Self::InvalidState(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_truncated() {
        let err = CodecError::Truncated {
            header: Header::Item,
            needed: 5,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("item"), "should mention record kind");
        assert!(msg.contains('5'), "should mention needed bytes");
        assert!(msg.contains('3'), "should mention available bytes");
    }

    #[test]
    fn error_display_out_of_range() {
        let err = CodecError::OutOfRange {
            field: "item_id",
            value: 16_777_216,
            bits: 24,
        };
        let msg = err.to_string();
        assert!(msg.contains("item_id"));
        assert!(msg.contains("16777216"));
        assert!(msg.contains("24 bits"));
    }

    #[test]
    fn error_display_invalid_state() {
        let err = CodecError::from(StateReason::MissingModifierId(Modifier::Skin));
        let msg = err.to_string();
        assert!(msg.contains("skin"));
        assert!(msg.contains("no skin id"));
    }

    #[test]
    fn error_display_unknown_tag() {
        let msg = CodecError::UnknownTag { tag: 6 }.to_string();
        assert!(msg.contains('6'));
    }

    #[test]
    fn error_from_wire_unknown_tag() {
        let err: CodecError = wire::DecodeError::UnknownTag { tag: 200 }.into();
        assert_eq!(err, CodecError::UnknownTag { tag: 200 });
    }

    #[test]
    fn error_from_wire_token() {
        let err: CodecError = wire::DecodeError::Token(TokenError::InvalidPadding).into();
        assert_eq!(
            err,
            CodecError::Malformed(MalformedReason::Token(TokenError::InvalidPadding))
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_from_wire_empty_buffer() {
        let err: CodecError = wire::DecodeError::EmptyBuffer.into();
        assert_eq!(err, CodecError::Malformed(MalformedReason::EmptyBuffer));
    }

    #[test]
    fn error_source_none_for_others() {
        let err = CodecError::UnknownTag { tag: 1 };
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<CodecError>();
    }
}
