//! Chat link decoding.

use std::str::FromStr;

use bytestream::{ByteError, ByteReader};
use tracing::trace;
use wire::{decode_frame, Header, ItemFlags, Limits, ID_SIZE, ITEM_MIN_BODY_LEN};

use crate::error::{CodecError, CodecResult, MalformedReason};
use crate::link::{
    ChatLink, CoinLink, ItemLink, MapLink, OutfitLink, RecipeLink, SkillLink, SkinLink, TextLink,
    TraitLink,
};

impl ChatLink {
    /// Decodes a link from its raw record buffer.
    pub fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
        decode_link(bytes)
    }

    /// Decodes a link from chat token text using default limits.
    pub fn from_token(text: &str) -> CodecResult<Self> {
        decode_token(text, &Limits::default())
    }
}

impl FromStr for ChatLink {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

/// Decodes a chat link from `[&...]` token text.
pub fn decode_token(text: &str, limits: &Limits) -> CodecResult<ChatLink> {
    let bytes = wire::decode_token(text, limits)?;
    decode_link(&bytes)
}

/// Decodes a chat link from a raw record buffer.
///
/// The header tag is resolved first and alone selects the record layout. The
/// buffer must hold exactly one complete record.
pub fn decode_link(bytes: &[u8]) -> CodecResult<ChatLink> {
    let frame = decode_frame(bytes)?;
    let header = frame.header;
    let Some(min_body_len) = header.min_body_len() else {
        return Err(CodecError::UnknownTag { tag: header.raw() });
    };
    if frame.body.len() < min_body_len {
        return Err(CodecError::Truncated {
            header,
            needed: min_body_len,
            available: frame.body.len(),
        });
    }
    trace!(%header, body_len = frame.body.len(), "decoding chat link record");

    let mut body = BodyReader::new(header, frame.body);
    let link: ChatLink = match header {
        Header::Coin => CoinLink::new(body.read_u32()?).into(),
        Header::Item => read_item(&mut body)?.into(),
        Header::Text => TextLink::new(body.read_u32()?).into(),
        Header::Map => MapLink::new(body.read_u32()?).into(),
        Header::Skill => SkillLink::new(body.read_u32()?).into(),
        Header::Trait => TraitLink::new(body.read_u32()?).into(),
        Header::Recipe => RecipeLink::new(body.read_u32()?).into(),
        Header::Skin => SkinLink::new(body.read_u32()?).into(),
        Header::Outfit => OutfitLink::new(body.read_u32()?).into(),
        Header::Unknown | Header::PvP | Header::Player => {
            return Err(CodecError::UnknownTag { tag: header.raw() });
        }
    };
    body.finish()?;
    Ok(link)
}

fn read_item(body: &mut BodyReader<'_>) -> CodecResult<ItemLink> {
    let count = body.read_u8()?;
    let item_id = body.read_u24()?;
    let flags = ItemFlags::from_raw(body.read_u8()?);
    if !flags.is_valid() {
        return Err(CodecError::Malformed(MalformedReason::ReservedItemFlags {
            flags: flags.raw(),
        }));
    }

    let needed = ITEM_MIN_BODY_LEN + flags.modifier_count() * ID_SIZE;
    if body.len() < needed {
        return Err(CodecError::Truncated {
            header: Header::Item,
            needed,
            available: body.len(),
        });
    }

    let mut item = ItemLink {
        count,
        item_id,
        flags,
        suffix_item_id: None,
        secondary_suffix_item_id: None,
        skin_id: None,
    };
    for modifier in flags.modifiers() {
        *item.modifier_mut(modifier) = Some(body.read_u32()?);
    }
    Ok(item)
}

/// Reads a record body, reporting short reads against the record's header.
struct BodyReader<'a> {
    header: Header,
    len: usize,
    inner: ByteReader<'a>,
}

impl<'a> BodyReader<'a> {
    const fn new(header: Header, body: &'a [u8]) -> Self {
        Self {
            header,
            len: body.len(),
            inner: ByteReader::new(body),
        }
    }

    const fn len(&self) -> usize {
        self.len
    }

    fn read_u8(&mut self) -> CodecResult<u8> {
        self.inner.read_u8().map_err(|err| self.truncated(&err))
    }

    fn read_u24(&mut self) -> CodecResult<u32> {
        self.inner.read_u24_le().map_err(|err| self.truncated(&err))
    }

    fn read_u32(&mut self) -> CodecResult<u32> {
        self.inner.read_u32_le().map_err(|err| self.truncated(&err))
    }

    fn finish(self) -> CodecResult<()> {
        if self.inner.is_empty() {
            return Ok(());
        }
        Err(CodecError::Malformed(MalformedReason::TrailingBytes {
            header: self.header,
            expected: self.inner.position(),
            actual: self.len,
        }))
    }

    fn truncated(&self, err: &ByteError) -> CodecError {
        let requested = match *err {
            ByteError::UnexpectedEof { requested, .. } => requested,
            ByteError::ValueOutOfRange { .. } => 0,
        };
        CodecError::Truncated {
            header: self.header,
            needed: self.inner.position() + requested,
            available: self.len,
        }
    }
}
