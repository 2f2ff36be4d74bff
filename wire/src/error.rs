//! Error types for wire format operations.

use std::fmt;

/// Result type for wire format operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// High-level decode errors for chat-link framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer is too small to contain the header tag.
    EmptyBuffer,

    /// Tag byte is not an assigned header value.
    UnknownTag { tag: u8 },

    /// Token text could not be transcoded into bytes.
    Token(TokenError),

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific wire limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    TokenLength,
    PayloadBytes,
}

/// Errors that can occur while transcoding token text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Token is not wrapped in `[&` and `]`.
    MissingDelimiters,
    /// Nothing between the delimiters.
    EmptyPayload,
    /// A character outside the base64 alphabet.
    InvalidSymbol { offset: usize, byte: u8 },
    /// Payload length is not a valid base64 length.
    InvalidLength,
    /// The final symbol carries non-zero trailing bits.
    InvalidLastSymbol { offset: usize, byte: u8 },
    /// Missing, excess, or misplaced `=` padding.
    InvalidPadding,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBuffer => write!(f, "buffer is empty, need at least a header tag"),
            Self::UnknownTag { tag } => write!(f, "unknown header tag: {tag}"),
            Self::Token(err) => write!(f, "malformed token: {err}"),
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

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TokenLength => "token length",
            Self::PayloadBytes => "payload bytes",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDelimiters => write!(f, "expected text wrapped in `[&` and `]`"),
            Self::EmptyPayload => write!(f, "empty payload"),
            Self::InvalidSymbol { offset, byte } => {
                write!(f, "invalid symbol 0x{byte:02X} at offset {offset}")
            }
            Self::InvalidLength => write!(f, "invalid base64 length"),
            Self::InvalidLastSymbol { offset, byte } => {
                write!(
                    f,
                    "invalid last symbol 0x{byte:02X} at offset {offset}: non-zero trailing bits"
                )
            }
            Self::InvalidPadding => write!(f, "invalid padding"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Token(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for TokenError {}

impl From<TokenError> for DecodeError {
    fn from(err: TokenError) -> Self {
        Self::Token(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display_unknown_tag() {
        let err = DecodeError::UnknownTag { tag: 200 };
        let msg = err.to_string();
        assert!(msg.contains("200"));
    }

    #[test]
    fn decode_error_display_limits_exceeded() {
        let err = DecodeError::LimitsExceeded {
            kind: LimitKind::TokenLength,
            limit: 64,
            actual: 100,
        };
        let msg = err.to_string();
        assert!(msg.contains("token length"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn token_error_display_invalid_symbol() {
        let err = TokenError::InvalidSymbol {
            offset: 3,
            byte: b'*',
        };
        let msg = err.to_string();
        assert!(msg.contains("0x2A"));
        assert!(msg.contains("offset 3"));
    }

    #[test]
    fn token_error_wraps_with_source() {
        let err = DecodeError::from(TokenError::InvalidPadding);
        assert!(err.to_string().contains("padding"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<DecodeError>();
        assert_error::<TokenError>();
    }
}
