//! Replay digest over a sequence of player moves.

#[cfg(feature = "serde")]
use crate::engine::PlayerMove;

/// Computes a SHA-256 digest committing to `moves` in order.
///
/// Together with the session seed this identifies a replay: the same seed and
/// the same moves root always reproduce the same [`state_root`].
///
/// [`state_root`]: crate::state::SessionState::state_root
#[cfg(feature = "serde")]
pub fn compute_moves_root(moves: &[PlayerMove]) -> [u8; 32] {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();

    // Order matters for reproducibility
    for player_move in moves {
        if let Ok(bytes) = bincode::serialize(player_move) {
            hasher.update(&bytes);
        }
    }

    hasher.finalize().into()
}
