//! Turn sequencing and the encounter state machine.
//!
//! The [`TurnEngine`] is the authoritative reducer for [`SessionState`]. One
//! call to [`TurnEngine::play`] runs a whole turn synchronously:
//! move → cascade → enemy turn or encounter advance, and returns every
//! event in order. Pacing and animation belong to the consumer.

mod cascade;
mod errors;
mod outcome;

pub use cascade::{Cascade, ResolutionEvent, resolve_turn};
pub use errors::TurnError;
pub use outcome::{
    EncounterOutcome, EnemyAttackEvent, PartyOutcome, encounter_outcome, enemy_turn,
    party_outcome,
};

use crate::board::{Strip, SwapError};
use crate::config::GameConfig;
use crate::env::RngSource;
use crate::state::{Enemy, SessionState, TurnPhase};

/// A completed player gesture on the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerMove {
    /// Exchange two slots.
    Swap { a: usize, b: usize },
    /// Carry the gem at `from` to `to`, shifting the gems in between.
    Drag { from: usize, to: usize },
}

impl PlayerMove {
    /// Applies the move to `strip`, or leaves it untouched on bad indices.
    pub fn apply(self, strip: &mut Strip) -> Result<(), SwapError> {
        match self {
            Self::Swap { a, b } => strip.swap(a, b),
            Self::Drag { from, to } => strip.drag(from, to),
        }
    }
}

/// How a turn ended.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEnd {
    /// Enemy survived and struck back; the party is still standing.
    EnemyAttacked(EnemyAttackEvent),
    /// Enemy survived and its counter-attack finished the party.
    PartyDefeated(EnemyAttackEvent),
    /// Enemy fell; the next encounter starts on a fresh strip.
    EncounterAdvanced {
        index: usize,
        enemy: String,
        strip: Strip,
    },
    /// The last enemy fell.
    Victory,
}

/// Ordered record of one turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Turn number, starting at 1 after each (re)start.
    pub turn: u64,
    /// Strip right after the move, before the cascade.
    pub arranged: Strip,
    pub resolutions: Vec<ResolutionEvent>,
    /// The cascade hit `max_cascade_steps` with a run still pending.
    pub cascade_truncated: bool,
    pub end: TurnEnd,
}

/// Game engine that applies player moves to a session.
///
/// All state mutation goes through [`play`](Self::play) and
/// [`restart`](Self::restart). Randomness comes from the caller's
/// [`RngSource`] so a session replays exactly.
pub struct TurnEngine<'a> {
    state: &'a mut SessionState,
    config: &'a GameConfig,
}

impl<'a> TurnEngine<'a> {
    /// Creates an engine over `state`. The config must be the one the session
    /// was created with.
    pub fn new(state: &'a mut SessionState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &SessionState {
        self.state
    }

    /// Plays one move to completion.
    ///
    /// Rejected moves (finished session, bad indices) leave the state
    /// untouched. Every accepted move costs the player one enemy attack
    /// unless the enemy falls, including moves that form no run.
    pub fn play<R: RngSource + ?Sized>(
        &mut self,
        player_move: PlayerMove,
        rng: &mut R,
    ) -> Result<TurnReport, TurnError> {
        if self.state.phase.is_terminal() {
            return Err(TurnError::SessionOver {
                phase: self.state.phase,
            });
        }
        player_move.apply(&mut self.state.strip)?;
        let arranged = self.state.strip;

        self.state.turn += 1;
        self.state.phase = TurnPhase::Cascading;
        let cascade = resolve_turn(
            self.config,
            &mut self.state.strip,
            &mut self.state.party,
            &mut self.state.enemy,
            rng,
        );

        let outcome = encounter_outcome(
            &self.state.enemy,
            self.state.encounter_index,
            self.state.encounters.len(),
        );
        let end = match outcome {
            EncounterOutcome::Continue => self.enemy_phase(rng),
            EncounterOutcome::Advance | EncounterOutcome::Victory => self.advance_encounter(rng),
        };

        Ok(TurnReport {
            turn: self.state.turn,
            arranged,
            resolutions: cascade.events,
            cascade_truncated: cascade.truncated,
            end,
        })
    }

    /// Returns to encounter 0 with a full-hp party and a fresh strip, from any
    /// phase including `Victory` and `Defeat`.
    pub fn restart<R: RngSource + ?Sized>(&mut self, rng: &mut R) {
        let state = &mut *self.state;
        state.party.restore();
        state.encounter_index = 0;
        state.enemy = Enemy::spawn(state.encounters.first());
        state.strip = Strip::random(&self.config.elements.refill_pool, rng);
        state.phase = TurnPhase::Idle;
        state.turn = 0;
    }

    fn enemy_phase<R: RngSource + ?Sized>(&mut self, rng: &mut R) -> TurnEnd {
        self.state.phase = TurnPhase::EnemyTurn;
        let attack = enemy_turn(self.config, &mut self.state.party, &self.state.enemy, rng);

        match party_outcome(&self.state.party) {
            PartyOutcome::Defeated => {
                self.state.phase = TurnPhase::Defeat;
                TurnEnd::PartyDefeated(attack)
            }
            PartyOutcome::Alive => {
                self.state.phase = TurnPhase::Idle;
                TurnEnd::EnemyAttacked(attack)
            }
        }
    }

    fn advance_encounter<R: RngSource + ?Sized>(&mut self, rng: &mut R) -> TurnEnd {
        self.state.phase = TurnPhase::EncounterAdvance;
        self.state.encounter_index += 1;

        let Some(template) = self.state.encounters.get(self.state.encounter_index) else {
            self.state.phase = TurnPhase::Victory;
            return TurnEnd::Victory;
        };

        self.state.enemy = Enemy::spawn(template);
        self.state.strip = Strip::random(&self.config.elements.refill_pool, rng);
        self.state.phase = TurnPhase::Idle;

        TurnEnd::EncounterAdvanced {
            index: self.state.encounter_index,
            enemy: self.state.enemy.name().to_owned(),
            strip: self.state.strip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Element;
    use crate::combat::Effect;
    use crate::env::PcgRng;
    use crate::state::{Ally, EnemyTemplate, PartyTemplate};

    fn party() -> PartyTemplate {
        PartyTemplate {
            name: "Player".into(),
            max_hp: 600,
            allies: vec![
                Ally::new("青龍", Element::Wind, 15, 10),
                Ally::new("朱雀", Element::Fire, 25, 10),
                Ally::new("白虎", Element::Earth, 20, 5),
                Ally::new("玄武", Element::Water, 20, 15),
            ],
        }
    }

    fn encounters() -> Vec<EnemyTemplate> {
        vec![
            EnemyTemplate::new("スライム", Element::Water, 100, 10, 1),
            EnemyTemplate::new("ゴブリン", Element::Earth, 200, 20, 5),
        ]
    }

    fn session(strip: &str) -> SessionState {
        SessionState::new(
            &GameConfig::default(),
            &party(),
            encounters(),
            &mut PcgRng::new(1),
        )
        .unwrap()
        .with_strip(strip.parse().unwrap())
        .unwrap()
    }

    // Swapping A and B of this strip changes nothing: both are Fire.
    const QUIET: &str = "火火水風土命火水風土命火水風";

    #[test]
    fn move_without_runs_still_costs_an_enemy_attack() {
        let config = GameConfig::default();
        let mut state = session(QUIET);
        let mut rng = PcgRng::new(2);

        let report = TurnEngine::new(&mut state, &config)
            .play(PlayerMove::Swap { a: 0, b: 1 }, &mut rng)
            .unwrap();

        assert!(report.resolutions.is_empty());
        assert_eq!(report.arranged, QUIET.parse::<Strip>().unwrap());
        assert_eq!(report.turn, 1);
        let TurnEnd::EnemyAttacked(attack) = report.end else {
            panic!("expected enemy attack, got {:?}", report.end);
        };
        // Slime: max(1, 10 - 10) = 1
        assert_eq!(attack.damage, 1);
        assert_eq!(state.party().hp(), 599);
        assert_eq!(state.phase(), TurnPhase::Idle);
    }

    #[test]
    fn invalid_move_is_rejected_without_mutation() {
        let config = GameConfig::default();
        let mut state = session(QUIET);
        let before = state.clone();

        let error = TurnEngine::new(&mut state, &config)
            .play(PlayerMove::Drag { from: 3, to: 14 }, &mut PcgRng::new(2))
            .unwrap_err();
        assert_eq!(
            error,
            TurnError::InvalidSwap(SwapError::InvalidSwapIndex { index: 14, len: 14 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn killing_blow_advances_and_resets_strip() {
        let config = GameConfig::default();
        // Swapping C and D lines up 火火火 at A-C.
        let mut state = session("火火水火風土命火水風土命火水");
        state.enemy = state.enemy.clone().with_hp(1);
        let mut rng = PcgRng::new(3);

        let report = TurnEngine::new(&mut state, &config)
            .play(PlayerMove::Swap { a: 2, b: 3 }, &mut rng)
            .unwrap();

        assert_eq!(report.arranged, "火火火水風土命火水風土命火水".parse::<Strip>().unwrap());
        assert_eq!(report.resolutions.len(), 1);
        assert_eq!(report.resolutions[0].element, Element::Fire);
        assert_eq!(report.resolutions[0].effect, Effect::Damage);
        assert_eq!(report.resolutions[0].enemy_hp, 0);
        let TurnEnd::EncounterAdvanced { index, enemy, strip } = &report.end else {
            panic!("expected advance, got {:?}", report.end);
        };
        assert_eq!(*index, 1);
        assert_eq!(enemy, "ゴブリン");
        assert_eq!(state.strip(), strip);
        assert_eq!(state.enemy().hp(), 200);
        assert_eq!(state.encounter_index(), 1);
        assert_eq!(state.phase(), TurnPhase::Idle);
        // No counter-attack on the turn the enemy fell.
        assert_eq!(state.party().hp(), 600);
    }

    #[test]
    fn defeating_last_enemy_is_victory() {
        let config = GameConfig::default();
        let mut state = session("火火水火風土命火水風土命火水");
        state.encounter_index = 1;
        state.enemy = Enemy::spawn(&encounters()[1]).with_hp(1);

        let report = TurnEngine::new(&mut state, &config)
            .play(PlayerMove::Swap { a: 2, b: 3 }, &mut PcgRng::new(4))
            .unwrap();
        assert_eq!(report.end, TurnEnd::Victory);
        assert_eq!(state.phase(), TurnPhase::Victory);
        assert_eq!(state.encounter_index(), 2);
        assert!(state.is_over());

        let error = TurnEngine::new(&mut state, &config)
            .play(PlayerMove::Swap { a: 0, b: 1 }, &mut PcgRng::new(4))
            .unwrap_err();
        assert_eq!(
            error,
            TurnError::SessionOver {
                phase: TurnPhase::Victory
            }
        );
    }

    #[test]
    fn counter_attack_to_zero_is_defeat() {
        let config = GameConfig::default();
        let mut state = session(QUIET);
        state.party = state.party.clone().with_hp(1);

        let report = TurnEngine::new(&mut state, &config)
            .play(PlayerMove::Swap { a: 0, b: 1 }, &mut PcgRng::new(5))
            .unwrap();
        assert!(matches!(report.end, TurnEnd::PartyDefeated(ref attack) if attack.party_hp == 0));
        assert_eq!(state.phase(), TurnPhase::Defeat);
        assert_eq!(party_outcome(state.party()), PartyOutcome::Defeated);

        let mut engine = TurnEngine::new(&mut state, &config);
        assert!(matches!(
            engine.play(PlayerMove::Swap { a: 0, b: 1 }, &mut PcgRng::new(5)),
            Err(TurnError::SessionOver {
                phase: TurnPhase::Defeat
            })
        ));

        engine.restart(&mut PcgRng::new(6));
        let state = engine.state();
        assert_eq!(state.phase(), TurnPhase::Idle);
        assert_eq!(state.party().hp(), 600);
        assert_eq!(state.encounter_index(), 0);
        assert_eq!(state.enemy().name(), "スライム");
        assert_eq!(state.enemy().hp(), 100);
        assert_eq!(state.turn(), 0);
    }

    #[test]
    fn same_seed_same_turns() {
        let config = GameConfig::default();
        let moves = [
            PlayerMove::Swap { a: 0, b: 5 },
            PlayerMove::Drag { from: 13, to: 2 },
            PlayerMove::Swap { a: 7, b: 8 },
        ];

        let run = || {
            let mut state = session("火火水火風土命火水風土命火水");
            let mut rng = PcgRng::new(77);
            let mut engine = TurnEngine::new(&mut state, &config);
            let reports: Vec<TurnReport> = moves
                .iter()
                .filter_map(|m| engine.play(*m, &mut rng).ok())
                .collect();
            (reports, state)
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn hp_stays_in_range_over_a_long_session() {
        let config = GameConfig::default();
        let mut state = SessionState::new(&config, &party(), encounters(), &mut PcgRng::new(8))
            .unwrap();
        let mut rng = PcgRng::new(9);
        let mut engine = TurnEngine::new(&mut state, &config);

        for turn in 0..300usize {
            let a = turn % 14;
            let b = (turn * 5 + 3) % 14;
            match engine.play(PlayerMove::Swap { a, b }, &mut rng) {
                Ok(report) => {
                    for event in &report.resolutions {
                        assert!(event.party_hp <= 600);
                        assert_eq!(event.after_refill.empty_slots(), 0);
                    }
                }
                Err(TurnError::SessionOver { .. }) => engine.restart(&mut rng),
                Err(other) => panic!("unexpected error {other}"),
            }
            let state = engine.state();
            assert!(state.party().hp() <= state.party().max_hp());
            assert!(state.enemy().hp() <= state.enemy().max_hp());
        }
    }
}
