//! Common error infrastructure for gem-core.
//!
//! Domain-specific errors (`SwapError`, `TemplateError`, `TurnError`, ...) are
//! defined next to the code that produces them. This module provides the
//! shared classification so callers can decide how to react without matching
//! on every variant.
//!
//! The rules never fail mid-cascade: every error here is raised either while
//! validating input (a move, a template, a config) or when a finished session
//! is asked to play on.

use crate::board::{StripParseError, SwapError};
use crate::config::ConfigError;
use crate::engine::TurnError;
use crate::state::{SetupError, TemplateError};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The session is fine; a different command (e.g. restart) will succeed.
    Recoverable,

    /// Invalid input that should be rejected without retry.
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,

    /// Unrecoverable: the session cannot be built or continued.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all gem-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

impl GameError for SwapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSwapIndex { .. } => "invalid_swap_index",
        }
    }
}

impl GameError for StripParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WrongLength { .. } => "strip_wrong_length",
            Self::UnknownGlyph { .. } => "strip_unknown_glyph",
        }
    }
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MinRunTooShort(_) => "min_run_too_short",
            Self::MinRunTooLong { .. } => "min_run_too_long",
            Self::InvalidComboBase(_) => "invalid_combo_base",
            Self::InvalidHealBase(_) => "invalid_heal_base",
            Self::InvalidJitterRatio(_) => "invalid_jitter_ratio",
            Self::ZeroCascadeCap => "zero_cascade_cap",
            Self::EmptyRefillPool => "empty_refill_pool",
            Self::InvalidCoefficient { .. } => "invalid_coefficient",
            Self::SelfAdvantage(_) => "self_advantage",
        }
    }
}

impl GameError for TemplateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroMaxHp { .. } => "zero_max_hp",
            Self::NegativeStat { .. } => "negative_stat",
            Self::EmptyRoster => "empty_roster",
            Self::RosterTooLarge { .. } => "roster_too_large",
            Self::EmptyEncounters => "empty_encounters",
        }
    }
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(error) => error.error_code(),
            Self::Template(error) => error.error_code(),
            Self::UnsettledStrip { .. } => "unsettled_strip",
        }
    }
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SessionOver { .. } => ErrorSeverity::Recoverable,
            Self::InvalidSwap(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SessionOver { .. } => "session_over",
            Self::InvalidSwap(error) => error.error_code(),
        }
    }
}
