//! Header tag values and record layout constants.

/// Size of the header tag byte.
pub const TAG_SIZE: usize = 1;

/// Size of a 32-bit identifier or quantity field.
pub const ID_SIZE: usize = 4;

/// Largest item identifier representable in the 24-bit item id slot.
pub const ITEM_ID_MAX: u32 = (1 << 24) - 1;

/// Item record body: count(1) + item id(3) + modifier flags(1).
pub const ITEM_MIN_BODY_LEN: usize = 1 + 3 + 1;

/// Item record body with all three modifier ids present.
pub const ITEM_MAX_BODY_LEN: usize = ITEM_MIN_BODY_LEN + 3 * ID_SIZE;

/// Header tag identifying the record kind that follows.
///
/// The numeric values are part of the wire format. Value 6 is reserved and
/// never assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Header {
    Unknown = 0,
    Coin = 1,
    Item = 2,
    Text = 3,
    Map = 4,
    PvP = 5,
    Skill = 7,
    Trait = 8,
    Player = 9,
    Recipe = 10,
    Skin = 11,
    Outfit = 12,
}

impl Header {
    /// Every assigned header, in ascending tag order.
    pub const ALL: [Self; 12] = [
        Self::Unknown,
        Self::Coin,
        Self::Item,
        Self::Text,
        Self::Map,
        Self::PvP,
        Self::Skill,
        Self::Trait,
        Self::Player,
        Self::Recipe,
        Self::Skin,
        Self::Outfit,
    ];

    /// Resolves a raw tag byte.
    ///
    /// Returns `None` for unassigned values (including the reserved 6) so that
    /// callers decide whether an unrecognized tag is fatal.
    #[must_use]
    pub const fn from_raw(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Unknown),
            1 => Some(Self::Coin),
            2 => Some(Self::Item),
            3 => Some(Self::Text),
            4 => Some(Self::Map),
            5 => Some(Self::PvP),
            7 => Some(Self::Skill),
            8 => Some(Self::Trait),
            9 => Some(Self::Player),
            10 => Some(Self::Recipe),
            11 => Some(Self::Skin),
            12 => Some(Self::Outfit),
            _ => None,
        }
    }

    /// Returns the raw tag byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Returns `true` if this tag has a fixed record layout the codec can read.
    #[must_use]
    pub const fn has_record_layout(self) -> bool {
        !matches!(self, Self::Unknown | Self::PvP | Self::Player)
    }

    /// Minimum number of body bytes following the tag byte.
    ///
    /// `None` for tags without a record layout. Item records may be longer,
    /// depending on their modifier flags.
    #[must_use]
    pub const fn min_body_len(self) -> Option<usize> {
        match self {
            Self::Unknown | Self::PvP | Self::Player => None,
            Self::Item => Some(ITEM_MIN_BODY_LEN),
            Self::Coin
            | Self::Text
            | Self::Map
            | Self::Skill
            | Self::Trait
            | Self::Recipe
            | Self::Skin
            | Self::Outfit => Some(ID_SIZE),
        }
    }

    /// Human-readable name of the record kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Coin => "coin",
            Self::Item => "item",
            Self::Text => "text",
            Self::Map => "map",
            Self::PvP => "pvp",
            Self::Skill => "skill",
            Self::Trait => "trait",
            Self::Player => "player",
            Self::Recipe => "recipe",
            Self::Skin => "skin",
            Self::Outfit => "outfit",
        }
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Header> for u8 {
    fn from(header: Header) -> Self {
        header.raw()
    }
}
