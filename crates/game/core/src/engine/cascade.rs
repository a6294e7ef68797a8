//! The cascade: detect → resolve → collapse → refill until the strip settles.

use crate::board::{Element, Strip};
use crate::combat::{Effect, resolve_run};
use crate::config::GameConfig;
use crate::env::RngSource;
use crate::state::{Enemy, Party};

/// One resolved run within a cascade.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolutionEvent {
    pub element: Element,
    pub start: usize,
    pub length: usize,
    /// 1 for the first run of the cascade.
    pub combo: u32,
    pub multiplier: f64,
    pub effect: Effect,
    /// Damage dealt or hp healed.
    pub amount: u32,
    /// Ally who answered the run, if any.
    pub ally: Option<String>,
    pub party_hp: u32,
    pub enemy_hp: u32,
    /// Strip right after the run was removed (tail holds `Empty`).
    pub after_collapse: Strip,
    /// Strip after the vacated slots were refilled.
    pub after_refill: Strip,
}

impl ResolutionEvent {
    /// Damage value for reporting: healing and no-op runs report 0.
    pub const fn damage(&self) -> u32 {
        match self.effect {
            Effect::Damage => self.amount,
            Effect::Heal | Effect::NoEffect => 0,
        }
    }
}

/// Everything one cascade produced.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cascade {
    pub events: Vec<ResolutionEvent>,
    /// The step cap stopped the loop while a run was still pending.
    pub truncated: bool,
}

/// Runs the cascade for one player move.
///
/// Resolves the leftmost run, collapses and refills, and repeats until no run
/// remains. Stops right after the resolution that brings the enemy to 0 hp,
/// even if runs are still pending; the strip is reset when the next
/// encounter starts. At most `config.max_cascade_steps` runs resolve.
pub fn resolve_turn<R: RngSource + ?Sized>(
    config: &GameConfig,
    strip: &mut Strip,
    party: &mut Party,
    enemy: &mut Enemy,
    rng: &mut R,
) -> Cascade {
    let mut cascade = Cascade::default();
    let mut combo: u32 = 0;

    while let Some(run) = strip.find_run(config.min_run) {
        if combo >= config.max_cascade_steps {
            cascade.truncated = true;
            break;
        }

        combo += 1;
        let resolution = resolve_run(config, &run, combo, party, enemy, rng);

        strip.collapse(run);
        let after_collapse = *strip;
        strip.refill(&config.elements.refill_pool, rng);

        cascade.events.push(ResolutionEvent {
            element: run.element,
            start: run.start,
            length: run.length,
            combo,
            multiplier: resolution.multiplier,
            effect: resolution.effect,
            amount: resolution.amount,
            ally: resolution.ally,
            party_hp: party.hp(),
            enemy_hp: enemy.hp(),
            after_collapse,
            after_refill: *strip,
        });

        if enemy.is_defeated() {
            break;
        }
    }

    cascade
}
