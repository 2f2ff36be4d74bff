//! Error types for byte-level operations.

use std::fmt;

/// Result type for byte-level operations.
pub type ByteResult<T> = Result<T, ByteError>;

/// Errors that can occur during byte-level encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// Value exceeds the range representable by the field width.
    ValueOutOfRange {
        /// The value that was out of range.
        value: u64,
        /// Width of the field in bits.
        bits: usize,
    },
}

impl fmt::Display for ByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::ValueOutOfRange { value, bits } => {
                write!(f, "value {value} cannot be represented in {bits} bits")
            }
        }
    }
}

impl std::error::Error for ByteError {}
