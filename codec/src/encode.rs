//! Chat link encoding.

use bytestream::ByteWriter;
use wire::{Modifier, ITEM_ID_MAX};

use crate::error::{CodecError, CodecResult, StateReason};
use crate::link::{ChatLink, ItemLink};

impl ChatLink {
    /// Checks that every field fits its wire slot and that item modifier
    /// flags agree with the ids present.
    pub fn validate(&self) -> CodecResult<()> {
        match self {
            Self::Item(item) => validate_item(item),
            _ => Ok(()),
        }
    }

    /// Encodes this link into its raw record buffer.
    pub fn to_bytes(&self) -> CodecResult<Vec<u8>> {
        encode_link(self)
    }

    /// Encodes this link into chat token text.
    pub fn to_token(&self) -> CodecResult<String> {
        encode_token(self)
    }
}

/// Encodes a chat link into a freshly allocated record buffer.
///
/// The link is validated before any byte is written.
pub fn encode_link(link: &ChatLink) -> CodecResult<Vec<u8>> {
    link.validate()?;

    let mut writer = ByteWriter::with_capacity(link.encoded_len());
    writer.write_u8(link.header().raw());
    match link {
        ChatLink::Coin(coin) => writer.write_u32_le(coin.quantity),
        ChatLink::Item(item) => write_item(item, &mut writer)?,
        ChatLink::Text(text) => writer.write_u32_le(text.text_id),
        ChatLink::Map(map) => writer.write_u32_le(map.point_id),
        ChatLink::Skill(skill) => writer.write_u32_le(skill.skill_id),
        ChatLink::Trait(tr) => writer.write_u32_le(tr.trait_id),
        ChatLink::Recipe(recipe) => writer.write_u32_le(recipe.recipe_id),
        ChatLink::Skin(skin) => writer.write_u32_le(skin.skin_id),
        ChatLink::Outfit(outfit) => writer.write_u32_le(outfit.outfit_id),
    }
    debug_assert_eq!(writer.len(), link.encoded_len());
    Ok(writer.finish())
}

/// Encodes a chat link into `[&...]` token text.
pub fn encode_token(link: &ChatLink) -> CodecResult<String> {
    let bytes = encode_link(link)?;
    Ok(wire::encode_token(&bytes))
}

fn validate_item(item: &ItemLink) -> CodecResult<()> {
    if item.item_id > ITEM_ID_MAX {
        return Err(item_id_out_of_range(item.item_id));
    }
    if !item.flags.is_valid() {
        return Err(StateReason::ReservedItemFlags {
            flags: item.flags.raw(),
        }
        .into());
    }
    for modifier in Modifier::CANONICAL {
        match (item.flags.contains(modifier), item.modifier(modifier)) {
            (true, None) => return Err(StateReason::MissingModifierId(modifier).into()),
            (false, Some(_)) => return Err(StateReason::UnflaggedModifierId(modifier).into()),
            _ => {}
        }
    }
    Ok(())
}

fn write_item(item: &ItemLink, writer: &mut ByteWriter) -> CodecResult<()> {
    writer.write_u8(item.count);
    writer
        .write_u24_le(item.item_id)
        .map_err(|_| item_id_out_of_range(item.item_id))?;
    writer.write_u8(item.flags.raw());
    for modifier in item.flags.modifiers() {
        let id = item
            .modifier(modifier)
            .ok_or(StateReason::MissingModifierId(modifier))?;
        writer.write_u32_le(id);
    }
    Ok(())
}

const fn item_id_out_of_range(item_id: u32) -> CodecError {
    CodecError::OutOfRange {
        field: "item_id",
        value: item_id as u64,
        bits: 24,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::{CoinLink, SkillLink};
    use wire::ItemFlags;

    #[test]
    fn encode_coin_layout() {
        let bytes = encode_link(&CoinLink::new(12_345).into()).unwrap();
        assert_eq!(bytes, vec![0x01, 0x39, 0x30, 0x00, 0x00]);
    }

    #[test]
    fn encode_skill_layout() {
        let bytes = encode_link(&SkillLink::new(5_491).into()).unwrap();
        assert_eq!(bytes, vec![0x07, 0x73, 0x15, 0x00, 0x00]);
    }

    #[test]
    fn encode_item_layout_with_suffix() {
        let link = ItemLink::new(1_234).with_count(5).with_suffix_item(999);
        let bytes = encode_link(&link.into()).unwrap();
        assert_eq!(
            bytes,
            vec![0x02, 0x05, 0xD2, 0x04, 0x00, 0x40, 0xE7, 0x03, 0x00, 0x00]
        );
    }

    #[test]
    fn encode_item_modifiers_in_canonical_order() {
        // Builder order does not matter, wire order is suffix, secondary, skin.
        let link = ItemLink::new(1)
            .with_skin(3)
            .with_secondary_suffix_item(2)
            .with_suffix_item(1);
        let bytes = encode_link(&link.into()).unwrap();
        assert_eq!(bytes.len(), 18);
        assert_eq!(bytes[5], 0xE0);
        assert_eq!(&bytes[6..10], &1u32.to_le_bytes());
        assert_eq!(&bytes[10..14], &2u32.to_le_bytes());
        assert_eq!(&bytes[14..18], &3u32.to_le_bytes());
    }

    #[test]
    fn encode_item_id_max_fits() {
        let bytes = encode_link(&ItemLink::new(ITEM_ID_MAX).into()).unwrap();
        assert_eq!(&bytes[2..5], &[0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn encode_rejects_wide_item_id() {
        let err = encode_link(&ItemLink::new(ITEM_ID_MAX + 1).into()).unwrap_err();
        assert_eq!(
            err,
            CodecError::OutOfRange {
                field: "item_id",
                value: 16_777_216,
                bits: 24,
            }
        );
    }

    #[test]
    fn encode_rejects_flag_without_id() {
        let mut link = ItemLink::new(1);
        link.flags = ItemFlags::from(Modifier::Skin);
        let err = encode_link(&link.into()).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidState(StateReason::MissingModifierId(Modifier::Skin))
        );
    }

    #[test]
    fn encode_rejects_id_without_flag() {
        let mut link = ItemLink::new(1);
        link.suffix_item_id = Some(42);
        let err = encode_link(&link.into()).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidState(StateReason::UnflaggedModifierId(Modifier::SuffixItem))
        );
    }

    #[test]
    fn encode_rejects_reserved_flags() {
        let mut link = ItemLink::new(1);
        link.flags = ItemFlags::from_raw(0x01);
        let err = encode_link(&link.into()).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidState(StateReason::ReservedItemFlags { flags: 0x01 })
        );
    }

    #[test]
    fn to_token_matches_encode_token() {
        let link: ChatLink = CoinLink::new(12_345).into();
        assert_eq!(link.to_token().unwrap(), "[&ATkwAAA=]");
        assert_eq!(encode_token(&link).unwrap(), "[&ATkwAAA=]");
    }
}
