//! Session events handed to front-ends.
//!
//! One turn becomes a flat, ordered list of events. Consumers pace and
//! animate them however they like; the session has already moved on.

use serde::Serialize;

use gem_core::{EnemyAttackEvent, PlayerMove, ResolutionEvent, Strip};

/// High-level occurrences of a session, in the order they happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A move was accepted. `strip` is the layout right after the move.
    TurnStarted {
        turn: u64,
        player_move: PlayerMove,
        strip: Strip,
    },

    /// One run of the cascade resolved.
    Resolution {
        resolution: ResolutionEvent,
        party_band: HealthBand,
        enemy_band: HealthBand,
    },

    /// The cascade stopped at the step cap with runs still on the strip.
    CascadeTruncated { steps: usize },

    /// The surviving enemy struck back.
    EnemyAttack {
        attack: EnemyAttackEvent,
        party_band: HealthBand,
    },

    /// The enemy fell and the next one stepped in on a fresh strip.
    EncounterAdvanced {
        index: usize,
        enemy: String,
        enemy_hp: u32,
        strip: Strip,
    },

    /// The last enemy fell.
    Victory { turns: u64 },

    /// The party fell.
    Defeat { encounter: usize, enemy: String },

    /// The session went back to the first encounter.
    Restarted { seed: u64, strip: Strip },
}

impl SessionEvent {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Victory { .. } | Self::Defeat { .. })
    }
}

/// Health levels for hp bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    /// 60-100% HP
    Healthy,
    /// 30-59% HP
    Wounded,
    /// 1-29% HP
    Critical,
    /// 0 HP
    Down,
}

impl HealthBand {
    /// Calculate health band from current and max HP.
    pub fn from_hp(current: u32, max: u32) -> Self {
        if current == 0 {
            Self::Down
        } else if max == 0 {
            Self::Healthy
        } else {
            let percent = u64::from(current) * 100 / u64::from(max);
            match percent {
                60.. => Self::Healthy,
                30..=59 => Self::Wounded,
                _ => Self::Critical,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_by_percentage() {
        assert_eq!(HealthBand::from_hp(600, 600), HealthBand::Healthy);
        assert_eq!(HealthBand::from_hp(360, 600), HealthBand::Healthy);
        assert_eq!(HealthBand::from_hp(359, 600), HealthBand::Wounded);
        assert_eq!(HealthBand::from_hp(180, 600), HealthBand::Wounded);
        assert_eq!(HealthBand::from_hp(179, 600), HealthBand::Critical);
        assert_eq!(HealthBand::from_hp(1, 600), HealthBand::Critical);
        assert_eq!(HealthBand::from_hp(0, 600), HealthBand::Down);
        assert_eq!(HealthBand::from_hp(u32::MAX, u32::MAX), HealthBand::Healthy);
    }

    #[test]
    fn terminal_events() {
        assert!(SessionEvent::Victory { turns: 3 }.is_terminal());
        assert!(!SessionEvent::CascadeTruncated { steps: 64 }.is_terminal());
    }
}
