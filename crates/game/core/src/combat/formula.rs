//! Damage and healing formula for resolved runs.
//!
//! # Formula
//!
//! ```text
//! multiplier = combo_base ^ ((length - min_run) + (combo - 1))
//!
//! healing element:
//!     heal   = jitter(heal_base × multiplier)
//! otherwise (ally with the run's element exists):
//!     base   = max(1, ally.attack - enemy.defense)
//!     damage = jitter(base × coefficient(element, enemy.element) × multiplier)
//! ```
//!
//! `jitter(v)` scales `v` by a uniform factor in `[1 - r, 1 + r)`, rounds to
//! the nearest integer and never returns less than 1.

use crate::board::Run;
use crate::config::GameConfig;
use crate::env::RngSource;
use crate::state::{Enemy, Party};

use super::result::{Effect, RunResolution};

/// Multiplier for a run of `length` resolved as the `combo`-th run of its
/// cascade (`combo` starts at 1).
pub fn combo_multiplier(base: f64, length: usize, min_run: usize, combo: u32) -> f64 {
    let extra_gems = length.saturating_sub(min_run);
    let prior_runs = combo.saturating_sub(1) as usize;
    let steps = i32::try_from(extra_gems + prior_runs).unwrap_or(i32::MAX);
    base.powi(steps)
}

/// Applies ±`ratio` variance to `value` and rounds. Always at least 1.
pub fn jitter<R: RngSource + ?Sized>(value: f64, ratio: f64, rng: &mut R) -> u32 {
    let factor = rng.uniform(1.0 - ratio, 1.0 + ratio);
    let scaled = (value * factor).round();
    if scaled >= 1.0 {
        scaled.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}

/// Resolves one run against the party and enemy, mutating their hp.
///
/// A run whose element no ally answers is a no-op, not an error.
pub fn resolve_run<R: RngSource + ?Sized>(
    config: &GameConfig,
    run: &Run,
    combo: u32,
    party: &mut Party,
    enemy: &mut Enemy,
    rng: &mut R,
) -> RunResolution {
    let multiplier = combo_multiplier(config.combo_base, run.length, config.min_run, combo);

    if config.elements.is_healing(run.element) {
        let amount = jitter(config.heal_base * multiplier, config.jitter_ratio, rng);
        party.heal(amount);
        return RunResolution {
            effect: Effect::Heal,
            amount,
            multiplier,
            coefficient: 1.0,
            ally: None,
        };
    }

    let Some(ally) = party.ally_for(run.element) else {
        return RunResolution {
            effect: Effect::NoEffect,
            amount: 0,
            multiplier,
            coefficient: 1.0,
            ally: None,
        };
    };

    let base = (ally.attack - enemy.defense()).max(1);
    let coefficient = config.elements.coefficient(run.element, enemy.element());
    let amount = jitter(f64::from(base) * coefficient * multiplier, config.jitter_ratio, rng);
    let ally = Some(ally.name.clone());
    enemy.take_damage(amount);

    RunResolution {
        effect: Effect::Damage,
        amount,
        multiplier,
        coefficient,
        ally,
    }
}
