//! Item modifier flags.

/// An optional 32-bit id that may follow an item record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    SuffixItem,
    SecondarySuffixItem,
    Skin,
}

impl Modifier {
    /// On-wire order of modifier ids.
    pub const CANONICAL: [Self; 3] = [Self::SuffixItem, Self::SecondarySuffixItem, Self::Skin];

    /// Returns the flag bit announcing this modifier.
    #[must_use]
    pub const fn flag(self) -> u8 {
        match self {
            Self::SuffixItem => ItemFlags::SUFFIX_ITEM,
            Self::SecondarySuffixItem => ItemFlags::SECONDARY_SUFFIX_ITEM,
            Self::Skin => ItemFlags::SKIN,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SuffixItem => "suffix item",
            Self::SecondarySuffixItem => "secondary suffix item",
            Self::Skin => "skin",
        }
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Item modifier flags (1 byte).
///
/// Each set bit announces one 32-bit id after the fixed item fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemFlags(u8);

impl ItemFlags {
    /// Flag indicating a suffix item (upgrade) id follows.
    pub const SUFFIX_ITEM: u8 = 0x40;

    /// Flag indicating a secondary suffix item id follows.
    pub const SECONDARY_SUFFIX_ITEM: u8 = 0x20;

    /// Flag indicating a skin id follows.
    pub const SKIN: u8 = 0x80;

    /// Reserved bits mask (must be zero).
    const RESERVED_MASK: u8 = !(Self::SUFFIX_ITEM | Self::SECONDARY_SUFFIX_ITEM | Self::SKIN);

    /// Creates flags from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw flag bits.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Creates flags with no modifiers.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns `true` if no bits are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the modifier's bit is set.
    #[must_use]
    pub const fn contains(self, modifier: Modifier) -> bool {
        self.0 & modifier.flag() != 0
    }

    /// Returns a copy with the modifier's bit set.
    #[must_use]
    pub const fn with(self, modifier: Modifier) -> Self {
        Self(self.0 | modifier.flag())
    }

    /// Returns a copy with the modifier's bit cleared.
    #[must_use]
    pub const fn without(self, modifier: Modifier) -> Self {
        Self(self.0 & !modifier.flag())
    }

    /// Returns the reserved bits that are set.
    #[must_use]
    pub const fn reserved_bits(self) -> u8 {
        self.0 & Self::RESERVED_MASK
    }

    /// Returns `true` if no reserved bits are set.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.reserved_bits() == 0
    }

    /// Number of modifier ids announced by these flags.
    #[must_use]
    pub const fn modifier_count(self) -> usize {
        (self.0 & !Self::RESERVED_MASK).count_ones() as usize
    }

    /// Iterates the set modifiers in canonical order.
    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        Modifier::CANONICAL
            .into_iter()
            .filter(move |modifier| self.contains(*modifier))
    }
}

impl From<Modifier> for ItemFlags {
    fn from(modifier: Modifier) -> Self {
        Self(modifier.flag())
    }
}
