//! Flattens an engine [`TurnReport`] into [`SessionEvent`]s.

use gem_core::{PlayerMove, TurnEnd, TurnReport};

use super::session_event::{HealthBand, SessionEvent};

/// What the session knew before the turn ran. Captured up front since the
/// engine may have swapped in the next enemy by the time the report exists.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TurnContext {
    pub player_move: PlayerMove,
    pub party_max_hp: u32,
    pub enemy_max_hp: u32,
    pub encounter: usize,
}

/// `next_enemy_hp` is the hp of whichever enemy is active after the turn.
pub(crate) fn extract_events(
    context: &TurnContext,
    report: TurnReport,
    next_enemy_hp: u32,
) -> Vec<SessionEvent> {
    let mut events = Vec::with_capacity(report.resolutions.len() + 3);
    events.push(SessionEvent::TurnStarted {
        turn: report.turn,
        player_move: context.player_move,
        strip: report.arranged,
    });

    let steps = report.resolutions.len();
    for resolution in report.resolutions {
        let party_band = HealthBand::from_hp(resolution.party_hp, context.party_max_hp);
        let enemy_band = HealthBand::from_hp(resolution.enemy_hp, context.enemy_max_hp);
        events.push(SessionEvent::Resolution {
            resolution,
            party_band,
            enemy_band,
        });
    }
    if report.cascade_truncated {
        events.push(SessionEvent::CascadeTruncated { steps });
    }

    match report.end {
        TurnEnd::EnemyAttacked(attack) => {
            let party_band = HealthBand::from_hp(attack.party_hp, context.party_max_hp);
            events.push(SessionEvent::EnemyAttack { attack, party_band });
        }
        TurnEnd::PartyDefeated(attack) => {
            let enemy = attack.enemy.clone();
            events.push(SessionEvent::EnemyAttack {
                attack,
                party_band: HealthBand::Down,
            });
            events.push(SessionEvent::Defeat {
                encounter: context.encounter,
                enemy,
            });
        }
        TurnEnd::EncounterAdvanced {
            index,
            enemy,
            strip,
        } => events.push(SessionEvent::EncounterAdvanced {
            index,
            enemy,
            enemy_hp: next_enemy_hp,
            strip,
        }),
        TurnEnd::Victory => events.push(SessionEvent::Victory { turns: report.turn }),
    }

    events
}
