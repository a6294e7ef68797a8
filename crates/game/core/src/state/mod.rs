//! Authoritative session state.
//!
//! This module owns the combatants, the strip, and the turn bookkeeping of a
//! session. Consumers read it freely; moves mutate it exclusively through
//! [`TurnEngine`](crate::engine::TurnEngine).
mod combatant;
mod turn;

pub use combatant::{
    Ally, EncounterSequence, Enemy, EnemyTemplate, Party, PartyTemplate, TemplateError,
};
pub use turn::TurnPhase;

use crate::board::Strip;
use crate::config::{ConfigError, GameConfig};
use crate::env::RngSource;

/// Failure to start a session.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid content: {0}")]
    Template(#[from] TemplateError),

    #[error("starting strip has {empty} empty slot(s)")]
    UnsettledStrip { empty: usize },
}

/// Canonical snapshot of one play session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub(crate) party: Party,
    pub(crate) encounters: EncounterSequence,
    /// Index of the active encounter. Equals `encounters.len()` after victory.
    pub(crate) encounter_index: usize,
    pub(crate) enemy: Enemy,
    pub(crate) strip: Strip,
    pub(crate) phase: TurnPhase,
    /// Completed moves since the session (re)started.
    pub(crate) turn: u64,
}

impl SessionState {
    /// Builds a session at encounter 0 with a full-hp party and a fresh strip.
    pub fn new<R: RngSource + ?Sized>(
        config: &GameConfig,
        party: &PartyTemplate,
        encounters: Vec<EnemyTemplate>,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let party = Party::from_template(party)?;
        let encounters = EncounterSequence::new(encounters)?;
        let enemy = Enemy::spawn(encounters.first());
        let strip = Strip::random(&config.elements.refill_pool, rng);

        Ok(Self {
            party,
            encounters,
            encounter_index: 0,
            enemy,
            strip,
            phase: TurnPhase::Idle,
            turn: 0,
        })
    }

    /// Same session with the strip replaced, for scripted scenarios and
    /// replays that start from a known layout.
    ///
    /// `Empty` only exists mid-cascade, so a strip carrying one is rejected.
    pub fn with_strip(mut self, strip: Strip) -> Result<Self, SetupError> {
        let empty = strip.empty_slots();
        if empty > 0 {
            return Err(SetupError::UnsettledStrip { empty });
        }
        self.strip = strip;
        Ok(self)
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn encounters(&self) -> &EncounterSequence {
        &self.encounters
    }

    pub const fn encounter_index(&self) -> usize {
        self.encounter_index
    }

    pub const fn strip(&self) -> &Strip {
        &self.strip
    }

    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub const fn turn(&self) -> u64 {
        self.turn
    }

    pub const fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// SHA-256 over the bincode encoding of the whole session.
    ///
    /// Two sessions with the same seed and the same moves have the same root.
    #[cfg(feature = "serde")]
    pub fn state_root(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        // bincode serialization is deterministic and consistent
        if let Ok(bytes) = bincode::serialize(self) {
            hasher.update(&bytes);
        }
        hasher.finalize().into()
    }
}

/// Starts a session; see [`SessionState::new`].
pub fn new_session<R: RngSource + ?Sized>(
    config: &GameConfig,
    party: &PartyTemplate,
    encounters: Vec<EnemyTemplate>,
    rng: &mut R,
) -> Result<SessionState, SetupError> {
    SessionState::new(config, party, encounters, rng)
}
