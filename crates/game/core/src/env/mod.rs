//! Environment inputs the rules consume but do not own.
//!
//! Currently this is the explicit random source threaded through refill,
//! fresh-strip generation and damage variance.
mod rng;

pub use rng::{PcgRng, RngSource, compute_seed};
