//! Explicit random source for refills, fresh strips, and damage variance.
//!
//! Every random draw in the rules goes through an [`RngSource`] passed in by
//! the caller. Nothing reads process-wide randomness, so a session replays
//! exactly given the same seed and the same sequence of player moves.
//!
//! # Determinism
//!
//! All implementations must be deterministic: given the same seed they must
//! produce the same sequence of values.

/// Stateful source of pseudo-random numbers.
///
/// Only [`next_u32`](RngSource::next_u32) is required; the derived helpers
/// are what the rules actually call.
pub trait RngSource {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform index in `[0, bound)`. Returns 0 when `bound` is 0.
    ///
    /// Uses the widening-multiply reduction, which avoids the modulo bias of
    /// `next_u32() % bound` for small bounds.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Uniform float in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.unit()
    }
}

impl<R: RngSource + ?Sized> RngSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same stream
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits, cheap to snapshot
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator seeded with `seed`.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Current internal state, usable as a seed to resume the stream.
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RngSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Compute a deterministic seed from session components.
///
/// # Arguments
///
/// * `game_seed` - Base seed chosen when the session was created
/// * `nonce` - Sequence number (e.g. how many times the session restarted)
/// * `context` - Distinguishes independent streams derived from the same nonce
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
