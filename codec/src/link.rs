//! Typed chat-link records.

use wire::{Header, ItemFlags, Modifier, ID_SIZE, ITEM_MIN_BODY_LEN, TAG_SIZE};

/// A decoded chat link.
///
/// One case per header tag with a record layout; each case holds only its own
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum ChatLink {
    Coin(CoinLink),
    Item(ItemLink),
    Text(TextLink),
    Map(MapLink),
    Skill(SkillLink),
    Trait(TraitLink),
    Recipe(RecipeLink),
    Skin(SkinLink),
    Outfit(OutfitLink),
}

impl ChatLink {
    /// Returns the header tag this link is encoded with.
    #[must_use]
    pub const fn header(&self) -> Header {
        match self {
            Self::Coin(_) => Header::Coin,
            Self::Item(_) => Header::Item,
            Self::Text(_) => Header::Text,
            Self::Map(_) => Header::Map,
            Self::Skill(_) => Header::Skill,
            Self::Trait(_) => Header::Trait,
            Self::Recipe(_) => Header::Recipe,
            Self::Skin(_) => Header::Skin,
            Self::Outfit(_) => Header::Outfit,
        }
    }

    /// Encoded length in bytes, tag included.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        let body = match self {
            Self::Item(item) => item.body_len(),
            _ => ID_SIZE,
        };
        TAG_SIZE + body
    }
}

/// An amount of currency, in copper coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoinLink {
    pub quantity: u32,
}

impl CoinLink {
    #[must_use]
    pub const fn new(quantity: u32) -> Self {
        Self { quantity }
    }

    /// Splits the quantity into gold, silver, and copper.
    #[must_use]
    pub const fn gold_silver_copper(self) -> (u32, u32, u32) {
        (
            self.quantity / 10_000,
            self.quantity / 100 % 100,
            self.quantity % 100,
        )
    }
}

/// A stack of items, optionally with upgrades and a skin applied.
///
/// `flags` and the three optional ids must agree: a set flag requires its id,
/// and an id requires its flag. The `with_*` builders keep them in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLink {
    pub count: u8,
    /// Must fit in 24 bits.
    pub item_id: u32,
    pub flags: ItemFlags,
    pub suffix_item_id: Option<u32>,
    pub secondary_suffix_item_id: Option<u32>,
    pub skin_id: Option<u32>,
}

impl ItemLink {
    /// Creates a link to a single item with no modifiers.
    #[must_use]
    pub const fn new(item_id: u32) -> Self {
        Self {
            count: 1,
            item_id,
            flags: ItemFlags::empty(),
            suffix_item_id: None,
            secondary_suffix_item_id: None,
            skin_id: None,
        }
    }

    #[must_use]
    pub const fn with_count(mut self, count: u8) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_suffix_item(self, id: u32) -> Self {
        self.with_modifier(Modifier::SuffixItem, id)
    }

    #[must_use]
    pub fn with_secondary_suffix_item(self, id: u32) -> Self {
        self.with_modifier(Modifier::SecondarySuffixItem, id)
    }

    #[must_use]
    pub fn with_skin(self, id: u32) -> Self {
        self.with_modifier(Modifier::Skin, id)
    }

    /// Sets a modifier id together with its flag bit.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier, id: u32) -> Self {
        self.flags = self.flags.with(modifier);
        *self.modifier_mut(modifier) = Some(id);
        self
    }

    /// Returns the id stored for a modifier, regardless of the flags.
    #[must_use]
    pub const fn modifier(&self, modifier: Modifier) -> Option<u32> {
        match modifier {
            Modifier::SuffixItem => self.suffix_item_id,
            Modifier::SecondarySuffixItem => self.secondary_suffix_item_id,
            Modifier::Skin => self.skin_id,
        }
    }

    pub(crate) fn modifier_mut(&mut self, modifier: Modifier) -> &mut Option<u32> {
        match modifier {
            Modifier::SuffixItem => &mut self.suffix_item_id,
            Modifier::SecondarySuffixItem => &mut self.secondary_suffix_item_id,
            Modifier::Skin => &mut self.skin_id,
        }
    }

    /// Body length in bytes (tag excluded), as announced by the flags.
    #[must_use]
    pub const fn body_len(&self) -> usize {
        ITEM_MIN_BODY_LEN + self.flags.modifier_count() * ID_SIZE
    }
}

macro_rules! id_link {
    ($(#[$meta:meta])* $name:ident, $field:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub $field: u32,
        }

        impl $name {
            #[must_use]
            pub const fn new($field: u32) -> Self {
                Self { $field }
            }
        }
    };
}

id_link!(
    /// A reference to an NPC text entry.
    TextLink,
    text_id
);
id_link!(
    /// A map point of interest, waypoint, or vista.
    MapLink,
    point_id
);
id_link!(SkillLink, skill_id);
id_link!(TraitLink, trait_id);
id_link!(RecipeLink, recipe_id);
id_link!(
    /// A wardrobe skin.
    SkinLink,
    skin_id
);
id_link!(OutfitLink, outfit_id);

macro_rules! impl_from_link {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for ChatLink {
                fn from(link: $ty) -> Self {
                    Self::$variant(link)
                }
            }
        )*
    };
}

impl_from_link!(
    Coin(CoinLink),
    Item(ItemLink),
    Text(TextLink),
    Map(MapLink),
    Skill(SkillLink),
    Trait(TraitLink),
    Recipe(RecipeLink),
    Skin(SkinLink),
    Outfit(OutfitLink),
);
