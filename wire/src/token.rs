//! Chat token text transcoding.
//!
//! A token is the raw record buffer in standard padded base64, wrapped in
//! `[&` and `]`. Decoding is canonical: every buffer has exactly one token.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{DecodeError, LimitKind, TokenError, WireResult};
use crate::limits::Limits;

/// Opening delimiter of a chat token.
pub const TOKEN_PREFIX: &str = "[&";

/// Closing delimiter of a chat token.
pub const TOKEN_SUFFIX: &str = "]";

/// Encodes a raw record buffer into token text.
#[must_use]
pub fn encode_token(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(
        TOKEN_PREFIX.len() + bytes.len().div_ceil(3) * 4 + TOKEN_SUFFIX.len(),
    );
    out.push_str(TOKEN_PREFIX);
    STANDARD.encode_string(bytes, &mut out);
    out.push_str(TOKEN_SUFFIX);
    out
}

/// Decodes token text into the raw record buffer.
///
/// Error offsets are relative to the start of `text`.
pub fn decode_token(text: &str, limits: &Limits) -> WireResult<Vec<u8>> {
    if text.len() > limits.max_token_len {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::TokenLength,
            limit: limits.max_token_len,
            actual: text.len(),
        });
    }

    let payload = token_payload(text).ok_or(TokenError::MissingDelimiters)?;
    if payload.is_empty() {
        return Err(TokenError::EmptyPayload.into());
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|err| map_base64_error(&err))?;

    if bytes.len() > limits.max_payload_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::PayloadBytes,
            limit: limits.max_payload_bytes,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Returns the text between the token delimiters, if both are present.
#[must_use]
pub fn token_payload(text: &str) -> Option<&str> {
    text.strip_prefix(TOKEN_PREFIX)?.strip_suffix(TOKEN_SUFFIX)
}

fn map_base64_error(err: &base64::DecodeError) -> TokenError {
    let shift = TOKEN_PREFIX.len();
    match *err {
        base64::DecodeError::InvalidByte(offset, byte) => TokenError::InvalidSymbol {
            offset: offset + shift,
            byte,
        },
        base64::DecodeError::InvalidLength => TokenError::InvalidLength,
        base64::DecodeError::InvalidLastSymbol(offset, byte) => TokenError::InvalidLastSymbol {
            offset: offset + shift,
            byte,
        },
        base64::DecodeError::InvalidPadding => TokenError::InvalidPadding,
    }
}
