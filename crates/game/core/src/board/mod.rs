//! The strip of gems the player rearranges.
//!
//! A [`Strip`] is a fixed row of [`STRIP_LEN`] tokens. Outside of a cascade it
//! only changes through [`Strip::swap`] and [`Strip::drag`]; inside a cascade
//! the engine drives [`Strip::collapse`] and [`Strip::refill`].
mod collapse;
mod matcher;
mod token;

pub use matcher::{Run, find_run};
pub use token::{Element, Token};

use core::fmt;
use core::str::FromStr;

/// Number of slots in a strip.
pub const STRIP_LEN: usize = 14;

/// Swap indices outside the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapError {
    #[error("slot index {index} is outside the strip (length {len})")]
    InvalidSwapIndex { index: usize, len: usize },
}

/// Failure to read a strip from glyph notation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StripParseError {
    #[error("strip needs exactly {expected} slots, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("unknown glyph {glyph:?} at slot {index}")]
    UnknownGlyph { index: usize, glyph: char },
}

/// Ordered, fixed-size row of tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strip {
    tokens: [Token; STRIP_LEN],
}

impl Strip {
    pub const fn new(tokens: [Token; STRIP_LEN]) -> Self {
        Self { tokens }
    }

    pub const fn tokens(&self) -> &[Token; STRIP_LEN] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<Token> {
        self.tokens.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Token> + '_ {
        self.tokens.iter().copied()
    }

    /// Label of a slot (`A` for index 0 through `N` for index 13).
    pub fn slot_label(index: usize) -> Option<char> {
        (index < STRIP_LEN).then(|| char::from(b'A' + index as u8))
    }

    /// Inverse of [`slot_label`](Self::slot_label), case-insensitive.
    pub fn slot_index(label: char) -> Option<usize> {
        let upper = label.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        let index = (upper as u8 - b'A') as usize;
        (index < STRIP_LEN).then_some(index)
    }

    /// Exchanges two slots. Both indices are checked before anything moves.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), SwapError> {
        Self::check_index(a)?;
        Self::check_index(b)?;
        self.tokens.swap(a, b);
        Ok(())
    }

    /// Moves the token at `from` to `to`, shifting the tokens in between one
    /// slot towards `from`.
    ///
    /// Equivalent to swapping the held token with each neighbour along the
    /// way, which is what dragging a gem across the strip does.
    pub fn drag(&mut self, from: usize, to: usize) -> Result<(), SwapError> {
        Self::check_index(from)?;
        Self::check_index(to)?;
        if from < to {
            self.tokens[from..=to].rotate_left(1);
        } else if to < from {
            self.tokens[to..=from].rotate_right(1);
        }
        Ok(())
    }

    /// True when nothing is pending: no `Empty` slot and no resolvable run.
    pub fn is_stable(&self, min_run: usize) -> bool {
        !self.tokens.iter().any(|token| token.is_empty()) && self.find_run(min_run).is_none()
    }

    fn check_index(index: usize) -> Result<(), SwapError> {
        if index < STRIP_LEN {
            Ok(())
        } else {
            Err(SwapError::InvalidSwapIndex {
                index,
                len: STRIP_LEN,
            })
        }
    }
}

/// Swaps two slots of `strip`; the input layer's only way to mutate it.
pub fn apply_swap(strip: &mut Strip, i: usize, j: usize) -> Result<(), SwapError> {
    strip.swap(i, j)
}

impl FromStr for Strip {
    type Err = StripParseError;

    /// Reads glyph notation such as `"火火火水風土命水風土命水風土"`.
    /// Whitespace between glyphs is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if glyphs.len() != STRIP_LEN {
            return Err(StripParseError::WrongLength {
                expected: STRIP_LEN,
                found: glyphs.len(),
            });
        }

        let mut tokens = [Token::Empty; STRIP_LEN];
        for (index, (slot, glyph)) in tokens.iter_mut().zip(glyphs).enumerate() {
            *slot = Token::from_glyph(glyph).ok_or(StripParseError::UnknownGlyph { index, glyph })?;
        }
        Ok(Self { tokens })
    }
}

impl fmt::Display for Strip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token.glyph())?;
        }
        Ok(())
    }
}
