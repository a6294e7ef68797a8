//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from session setup and turn execution so clients can bubble
//! them up with consistent context.
use thiserror::Error;

use gem_core::{ErrorSeverity, GameError, SetupError, TurnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to start session")]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Turn(#[from] TurnError),
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Setup(error) => error.severity(),
            Self::Turn(error) => error.severity(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Setup(error) => error.error_code(),
            Self::Turn(error) => error.error_code(),
        }
    }
}
