//! Elements and the tokens that occupy strip slots.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Element identity of a gem.
///
/// Every element is combat-capable. [`Element::Life`] is the default healing
/// element; which element heals is decided by
/// [`ElementTable::healing`](crate::config::ElementTable::healing).
///
/// Parses from its English name or its glyph (`"fire"` / `"火"`).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Element {
    #[strum(to_string = "fire", serialize = "火")]
    Fire,
    #[strum(to_string = "water", serialize = "水")]
    Water,
    #[strum(to_string = "wind", serialize = "風")]
    Wind,
    #[strum(to_string = "earth", serialize = "土")]
    Earth,
    #[strum(to_string = "life", serialize = "命")]
    Life,
}

impl Element {
    /// Single-character glyph used in strip notation.
    pub const fn glyph(self) -> char {
        match self {
            Self::Fire => '火',
            Self::Water => '水',
            Self::Wind => '風',
            Self::Earth => '土',
            Self::Life => '命',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '火' => Some(Self::Fire),
            '水' => Some(Self::Water),
            '風' => Some(Self::Wind),
            '土' => Some(Self::Earth),
            '命' => Some(Self::Life),
            _ => None,
        }
    }
}

/// Content of one strip slot.
///
/// `Void` is a real but non-scoring padding element: it can sit on a strip
/// and is never matched or produced by refill. `Empty` only exists between a
/// collapse and the following refill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Token {
    Gem(Element),
    Void,
    Empty,
}

impl Token {
    /// Glyph for `Void` in strip notation.
    pub const VOID_GLYPH: char = '無';
    /// Alternate void glyph accepted when parsing.
    pub const VOID_ALT_GLYPH: char = '・';
    /// Glyph for `Empty` in strip notation.
    pub const EMPTY_GLYPH: char = '_';

    /// Element of a gem token, `None` for `Void` and `Empty`.
    pub const fn element(self) -> Option<Element> {
        match self {
            Self::Gem(element) => Some(element),
            Self::Void | Self::Empty => None,
        }
    }

    /// Whether a run of this token can resolve.
    pub const fn is_combat(self) -> bool {
        matches!(self, Self::Gem(_))
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Gem(element) => element.glyph(),
            Self::Void => Self::VOID_GLYPH,
            Self::Empty => Self::EMPTY_GLYPH,
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            Self::VOID_GLYPH | Self::VOID_ALT_GLYPH => Some(Self::Void),
            Self::EMPTY_GLYPH => Some(Self::Empty),
            other => Element::from_glyph(other).map(Self::Gem),
        }
    }
}

impl From<Element> for Token {
    fn from(element: Element) -> Self {
        Self::Gem(element)
    }
}
