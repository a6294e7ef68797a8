//! Error types for the turn pipeline.

use crate::board::SwapError;
use crate::state::TurnPhase;

/// Reasons a move is refused. Refused moves never touch the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("session is over ({phase}); restart to play again")]
    SessionOver { phase: TurnPhase },

    #[error("invalid move: {0}")]
    InvalidSwap(#[from] SwapError),
}
