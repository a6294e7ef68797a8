//! Combat resolution system.
//!
//! Pure functions turning a resolved run or an enemy counter-attack into hp
//! changes. Randomness only enters through the caller's
//! [`RngSource`](crate::env::RngSource).
//!
//! # Core Functions
//!
//! - `combo_multiplier`: ×base per extra gem and per prior resolution
//! - `jitter`: ±ratio variance, never below 1
//! - `resolve_run`: damage or healing for one run
//! - `counter_attack`: the enemy's reply at the end of a turn
//! - `apply_damage` / `apply_heal`: clamped hp arithmetic

pub mod damage;
pub mod formula;
pub mod result;

pub use damage::{apply_damage, apply_heal, counter_attack};
pub use formula::{combo_multiplier, jitter, resolve_run};
pub use result::{Effect, RunResolution};
