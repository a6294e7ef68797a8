//! End-of-cascade checks and the enemy's turn.

use crate::combat::counter_attack;
use crate::config::GameConfig;
use crate::env::RngSource;
use crate::state::{Enemy, Party};

/// What the active encounter does after a cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterOutcome {
    /// Enemy still standing.
    Continue,
    /// Enemy down, another encounter follows.
    Advance,
    /// Enemy down and it was the last encounter.
    Victory,
}

/// Whether the party can keep playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartyOutcome {
    Alive,
    Defeated,
}

/// The enemy's counter-attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyAttackEvent {
    pub enemy: String,
    pub damage: u32,
    pub party_hp: u32,
}

/// Classifies the encounter at `index` of a sequence of `total` encounters.
pub fn encounter_outcome(enemy: &Enemy, index: usize, total: usize) -> EncounterOutcome {
    if !enemy.is_defeated() {
        EncounterOutcome::Continue
    } else if index + 1 >= total {
        EncounterOutcome::Victory
    } else {
        EncounterOutcome::Advance
    }
}

pub fn party_outcome(party: &Party) -> PartyOutcome {
    if party.is_defeated() {
        PartyOutcome::Defeated
    } else {
        PartyOutcome::Alive
    }
}

/// Applies one enemy counter-attack to the party.
pub fn enemy_turn<R: RngSource + ?Sized>(
    config: &GameConfig,
    party: &mut Party,
    enemy: &Enemy,
    rng: &mut R,
) -> EnemyAttackEvent {
    let damage = counter_attack(config, party, enemy, rng);
    EnemyAttackEvent {
        enemy: enemy.name().to_owned(),
        damage,
        party_hp: party.hp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Element;
    use crate::env::PcgRng;
    use crate::state::{Ally, EnemyTemplate, PartyTemplate};

    fn enemy(hp: u32) -> Enemy {
        Enemy::from_template(&EnemyTemplate::new("ドラゴン", Element::Fire, 600, 50, 20))
            .unwrap()
            .with_hp(hp)
    }

    fn party(hp: u32) -> Party {
        Party::from_template(&PartyTemplate {
            name: "Player".into(),
            max_hp: 600,
            allies: vec![Ally::new("玄武", Element::Water, 20, 15)],
        })
        .unwrap()
        .with_hp(hp)
    }

    #[test]
    fn encounter_outcomes() {
        assert_eq!(encounter_outcome(&enemy(1), 0, 5), EncounterOutcome::Continue);
        assert_eq!(encounter_outcome(&enemy(0), 0, 5), EncounterOutcome::Advance);
        assert_eq!(encounter_outcome(&enemy(0), 3, 5), EncounterOutcome::Advance);
        assert_eq!(encounter_outcome(&enemy(0), 4, 5), EncounterOutcome::Victory);
        assert_eq!(encounter_outcome(&enemy(10), 4, 5), EncounterOutcome::Continue);
    }

    #[test]
    fn party_outcomes() {
        assert_eq!(party_outcome(&party(1)), PartyOutcome::Alive);
        assert_eq!(party_outcome(&party(0)), PartyOutcome::Defeated);
    }

    #[test]
    fn enemy_turn_reports_damage_and_hp() {
        let config = GameConfig::default();
        let mut party = party(600);
        let event = enemy_turn(&config, &mut party, &enemy(600), &mut PcgRng::new(12));
        assert_eq!(event.enemy, "ドラゴン");
        // base = 50 - 15
        assert!((32..=39).contains(&event.damage));
        assert_eq!(event.party_hp, 600 - event.damage);
        assert_eq!(party.hp(), event.party_hp);
    }

    #[test]
    fn enemy_turn_can_defeat_the_party() {
        let config = GameConfig::default();
        let mut party = party(5);
        let event = enemy_turn(&config, &mut party, &enemy(600), &mut PcgRng::new(12));
        assert_eq!(event.party_hp, 0);
        assert_eq!(party_outcome(&party), PartyOutcome::Defeated);
    }
}
