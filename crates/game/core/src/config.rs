//! Game configuration constants, tunable parameters, and element tables.
//!
//! Configuration is immutable data handed to the engine at construction;
//! nothing in the rules reads global state.

use strum::IntoEnumIterator;

use crate::board::{Element, STRIP_LEN, Token};

/// Rule parameters for one session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    /// Shortest run that resolves.
    pub min_run: usize,
    /// Multiplicative step per extra gem and per prior resolution in a cascade.
    pub combo_base: f64,
    /// Heal amount of a minimal first-in-cascade healing run, before variance.
    pub heal_base: f64,
    /// Relative spread of damage/heal variance (0.10 = ±10%).
    pub jitter_ratio: f64,
    /// Upper bound on resolutions within one cascade.
    pub max_cascade_steps: u32,
    /// Element relations and display table.
    pub elements: ElementTable,
}

impl GameConfig {
    // ===== compile-time constants =====
    pub const STRIP_LEN: usize = STRIP_LEN;
    /// Maximum allies in a party roster.
    pub const MAX_ALLIES: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MIN_RUN: usize = 3;
    pub const DEFAULT_COMBO_BASE: f64 = 1.5;
    pub const DEFAULT_HEAL_BASE: f64 = 20.0;
    pub const DEFAULT_JITTER_RATIO: f64 = 0.10;
    pub const DEFAULT_MAX_CASCADE_STEPS: u32 = 64;

    pub fn new() -> Self {
        Self {
            min_run: Self::DEFAULT_MIN_RUN,
            combo_base: Self::DEFAULT_COMBO_BASE,
            heal_base: Self::DEFAULT_HEAL_BASE,
            jitter_ratio: Self::DEFAULT_JITTER_RATIO,
            max_cascade_steps: Self::DEFAULT_MAX_CASCADE_STEPS,
            elements: ElementTable::default(),
        }
    }

    pub fn with_jitter_ratio(mut self, jitter_ratio: f64) -> Self {
        self.jitter_ratio = jitter_ratio;
        self
    }

    pub fn with_max_cascade_steps(mut self, max_cascade_steps: u32) -> Self {
        self.max_cascade_steps = max_cascade_steps;
        self
    }

    /// Checks that the parameters describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_run < 2 {
            return Err(ConfigError::MinRunTooShort(self.min_run));
        }
        if self.min_run > STRIP_LEN {
            return Err(ConfigError::MinRunTooLong {
                min_run: self.min_run,
                len: STRIP_LEN,
            });
        }
        if !(self.combo_base >= 1.0 && self.combo_base.is_finite()) {
            return Err(ConfigError::InvalidComboBase(self.combo_base));
        }
        if !(self.heal_base > 0.0 && self.heal_base.is_finite()) {
            return Err(ConfigError::InvalidHealBase(self.heal_base));
        }
        if !(0.0..1.0).contains(&self.jitter_ratio) {
            return Err(ConfigError::InvalidJitterRatio(self.jitter_ratio));
        }
        if self.max_cascade_steps == 0 {
            return Err(ConfigError::ZeroCascadeCap);
        }
        self.elements.validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Element relations: the advantage cycle, the healing element, what refill
/// draws from, and how each token is displayed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ElementTable {
    /// `(attacker, defender)` pairs where the attacker is strong.
    pub advantages: Vec<(Element, Element)>,
    /// Coefficient when the attacker is strong against the defender.
    pub strong: f64,
    /// Coefficient when the defender is strong against the attacker.
    pub weak: f64,
    /// Element whose runs heal the party instead of attacking.
    pub healing: Element,
    /// Elements drawn by refill and fresh strips.
    pub refill_pool: Vec<Element>,
    /// Glyph and colour for each token kind.
    pub display: Vec<TokenDisplay>,
}

impl ElementTable {
    /// Elemental damage coefficient of `attacker` hitting `defender`.
    pub fn coefficient(&self, attacker: Element, defender: Element) -> f64 {
        if self.advantages.contains(&(attacker, defender)) {
            self.strong
        } else if self.advantages.contains(&(defender, attacker)) {
            self.weak
        } else {
            1.0
        }
    }

    pub fn is_healing(&self, element: Element) -> bool {
        element == self.healing
    }

    pub fn display_for(&self, token: Token) -> Option<&TokenDisplay> {
        self.display.iter().find(|entry| entry.token == token)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.refill_pool.is_empty() {
            return Err(ConfigError::EmptyRefillPool);
        }
        if !(self.strong > 0.0 && self.weak > 0.0) {
            return Err(ConfigError::InvalidCoefficient {
                strong: self.strong,
                weak: self.weak,
            });
        }
        if let Some((attacker, _)) = self
            .advantages
            .iter()
            .find(|(attacker, defender)| attacker == defender)
        {
            return Err(ConfigError::SelfAdvantage(*attacker));
        }
        Ok(())
    }
}

impl Default for ElementTable {
    /// Fire > Wind > Earth > Water > Fire, ×2.0 / ×0.5, Life heals.
    fn default() -> Self {
        Self {
            advantages: vec![
                (Element::Fire, Element::Wind),
                (Element::Wind, Element::Earth),
                (Element::Earth, Element::Water),
                (Element::Water, Element::Fire),
            ],
            strong: 2.0,
            weak: 0.5,
            healing: Element::Life,
            refill_pool: Element::iter().collect(),
            display: TokenDisplay::defaults(),
        }
    }
}

/// How consumers should draw a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDisplay {
    pub token: Token,
    pub glyph: char,
    pub color: [u8; 3],
}

impl TokenDisplay {
    fn defaults() -> Vec<Self> {
        let gem = |element: Element, color| Self {
            token: Token::Gem(element),
            glyph: element.glyph(),
            color,
        };
        vec![
            gem(Element::Fire, [230, 70, 70]),
            gem(Element::Water, [70, 150, 230]),
            gem(Element::Wind, [90, 200, 120]),
            gem(Element::Earth, [200, 150, 80]),
            gem(Element::Life, [220, 90, 200]),
            Self {
                token: Token::Void,
                glyph: ' ',
                color: [160, 160, 160],
            },
        ]
    }
}

/// Rejected configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("minimum run length must be at least 2 (got {0})")]
    MinRunTooShort(usize),

    #[error("minimum run length {min_run} exceeds strip length {len}")]
    MinRunTooLong { min_run: usize, len: usize },

    #[error("combo base must be a finite value >= 1.0 (got {0})")]
    InvalidComboBase(f64),

    #[error("heal base must be a finite positive value (got {0})")]
    InvalidHealBase(f64),

    #[error("jitter ratio must lie in [0, 1) (got {0})")]
    InvalidJitterRatio(f64),

    #[error("cascade step cap must be positive")]
    ZeroCascadeCap,

    #[error("refill pool must contain at least one element")]
    EmptyRefillPool,

    #[error("elemental coefficients must be positive (strong {strong}, weak {weak})")]
    InvalidCoefficient { strong: f64, weak: f64 },

    #[error("element {0} cannot be strong against itself")]
    SelfAdvantage(Element),
}
