//! Outcome of resolving one run.

/// What a resolved run did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Effect {
    /// Damage dealt to the enemy.
    Damage,
    /// Hit points restored to the party.
    Heal,
    /// No ally answers the run's element; nothing happened.
    NoEffect,
}

/// Result of [`resolve_run`](super::resolve_run).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResolution {
    pub effect: Effect,
    /// Damage dealt or hp healed, 0 for [`Effect::NoEffect`].
    pub amount: u32,
    /// Combo multiplier applied to this run.
    pub multiplier: f64,
    /// Elemental coefficient applied (1.0 for heals and no-ops).
    pub coefficient: f64,
    /// Name of the ally who answered, if any.
    pub ally: Option<String>,
}

impl RunResolution {
    /// Damage value for reporting: healing and no-op runs report 0.
    pub const fn damage(&self) -> u32 {
        match self.effect {
            Effect::Damage => self.amount,
            Effect::Heal | Effect::NoEffect => 0,
        }
    }

    pub const fn healed(&self) -> u32 {
        match self.effect {
            Effect::Heal => self.amount,
            Effect::Damage | Effect::NoEffect => 0,
        }
    }
}
