//! Deterministic rules for the gem strip puzzle-combat loop.
//!
//! `gem-core` defines the canonical rules (strip, matching, collapse/refill,
//! damage formula, encounter state machine) and exposes pure APIs with no I/O
//! and no logging. All session mutation flows through
//! [`engine::TurnEngine`], and randomness always comes from a caller-supplied
//! [`env::RngSource`].
pub mod board;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod root;
pub mod state;

pub use board::{
    Element, Run, STRIP_LEN, Strip, StripParseError, SwapError, Token, apply_swap, find_run,
};
pub use combat::{Effect, RunResolution, combo_multiplier, jitter, resolve_run};
pub use config::{ConfigError, ElementTable, GameConfig, TokenDisplay};
pub use engine::{
    Cascade, EncounterOutcome, EnemyAttackEvent, PartyOutcome, PlayerMove, ResolutionEvent,
    TurnEnd, TurnEngine, TurnError, TurnReport, encounter_outcome, enemy_turn, party_outcome,
    resolve_turn,
};
pub use env::{PcgRng, RngSource, compute_seed};
pub use error::{ErrorSeverity, GameError};
#[cfg(feature = "serde")]
pub use root::compute_moves_root;
pub use state::{
    Ally, EncounterSequence, Enemy, EnemyTemplate, Party, PartyTemplate, SessionState,
    SetupError, TemplateError, TurnPhase, new_session,
};
