//! Configurable limits for bounded decoding.

/// Wire-level limits for token decoding.
///
/// Tokens usually arrive from chat text controlled by other players, so the
/// token length is checked before any transcoding work is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum token length in bytes, delimiters included.
    pub max_token_len: usize,

    /// Maximum decoded payload size in bytes.
    pub max_payload_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Far above the largest item record, leaves room for newer link kinds.
            max_token_len: 1024,
            max_payload_bytes: 512,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_token_len: 64,
            max_payload_bytes: 32,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_token_len: usize::MAX,
            max_payload_bytes: usize::MAX,
        }
    }
}
