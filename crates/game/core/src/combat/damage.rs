//! Damage application and the enemy counter-attack.

use crate::config::GameConfig;
use crate::env::RngSource;
use crate::state::{Enemy, Party};

use super::formula::jitter;

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Apply healing to current HP.
///
/// # Returns
///
/// New HP value (clamped to `max_hp`)
pub fn apply_heal(current_hp: u32, amount: u32, max_hp: u32) -> u32 {
    current_hp.saturating_add(amount).min(max_hp)
}

/// The enemy's end-of-turn attack on the party.
///
/// # Formula
///
/// ```text
/// base   = max(1, enemy.attack - party.defense)
/// damage = jitter(base)
/// ```
///
/// No elemental coefficient and no combo multiplier.
///
/// # Returns
///
/// Damage dealt. Party hp is reduced and clamped at 0.
pub fn counter_attack<R: RngSource + ?Sized>(
    config: &GameConfig,
    party: &mut Party,
    enemy: &Enemy,
    rng: &mut R,
) -> u32 {
    let base = (f64::from(enemy.attack()) - party.defense()).max(1.0);
    let damage = jitter(base, config.jitter_ratio, rng);
    party.take_damage(damage);
    damage
}
