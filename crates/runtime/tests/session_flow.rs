use gem_core::{
    Ally, Effect, Element, EnemyTemplate, PartyTemplate, PlayerMove, SetupError, Strip, SwapError,
    TurnError, TurnPhase,
};
use gem_runtime::{HealthBand, RuntimeError, Session, SessionEvent};

// No run anywhere; swapping A and B changes nothing.
const QUIET: &str = "火火水風土命火水風土命火水風";
// Swapping C and D lines up 火火火 at A-C.
const READY: &str = "火火水火風土命火水風土命火水";

fn strip(glyphs: &str) -> Strip {
    glyphs.parse().unwrap()
}

fn fragile_enemies() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new("スライム", Element::Water, 1, 10, 1),
        EnemyTemplate::new("ゴブリン", Element::Earth, 200, 20, 5),
    ]
}

#[test]
fn killing_blow_advances_to_the_next_encounter() {
    let mut session = Session::builder()
        .seed(11)
        .encounters(fragile_enemies())
        .initial_strip(strip(READY))
        .build()
        .unwrap();

    let events = session.play(PlayerMove::Swap { a: 2, b: 3 }).unwrap();

    assert_eq!(events.len(), 3, "{events:?}");
    assert_eq!(
        events[0],
        SessionEvent::TurnStarted {
            turn: 1,
            player_move: PlayerMove::Swap { a: 2, b: 3 },
            strip: strip("火火火水風土命火水風土命火水"),
        }
    );
    let SessionEvent::Resolution {
        resolution,
        enemy_band,
        party_band,
    } = &events[1]
    else {
        panic!("expected resolution, got {:?}", events[1]);
    };
    assert_eq!(resolution.element, Element::Fire);
    assert_eq!(resolution.effect, Effect::Damage);
    assert_eq!(resolution.ally.as_deref(), Some("朱雀"));
    assert_eq!(*enemy_band, HealthBand::Down);
    assert_eq!(*party_band, HealthBand::Healthy);
    assert!(matches!(
        &events[2],
        SessionEvent::EncounterAdvanced { index: 1, enemy, enemy_hp: 200, strip }
            if enemy == "ゴブリン" && strip == session.strip()
    ));
    assert_eq!(session.moves(), &[PlayerMove::Swap { a: 2, b: 3 }]);
}

#[test]
fn rejected_move_changes_nothing() {
    let mut session = Session::builder()
        .seed(3)
        .initial_strip(strip(QUIET))
        .build()
        .unwrap();
    let root = session.state_root();

    let error = session
        .play(PlayerMove::Drag { from: 0, to: 14 })
        .unwrap_err();
    assert!(matches!(
        error,
        RuntimeError::Turn(TurnError::InvalidSwap(SwapError::InvalidSwapIndex {
            index: 14,
            len: 14
        }))
    ));
    assert_eq!(session.state_root(), root);
    assert!(session.moves().is_empty());
}

#[test]
fn defeat_then_restart() {
    let party = PartyTemplate {
        name: "Glass".into(),
        max_hp: 1,
        allies: vec![Ally::new("朱雀", Element::Fire, 25, 10)],
    };
    let mut session = Session::builder()
        .seed(5)
        .party(party)
        .initial_strip(strip(QUIET))
        .build()
        .unwrap();

    let events = session.play(PlayerMove::Swap { a: 0, b: 1 }).unwrap();
    assert!(matches!(events[0], SessionEvent::TurnStarted { turn: 1, .. }));
    assert!(matches!(
        &events[1],
        SessionEvent::EnemyAttack { attack, party_band: HealthBand::Down } if attack.party_hp == 0
    ));
    assert_eq!(
        events[2],
        SessionEvent::Defeat {
            encounter: 0,
            enemy: "スライム".into()
        }
    );
    assert!(events[2].is_terminal());
    assert!(session.is_over());

    let error = session.play(PlayerMove::Swap { a: 0, b: 1 }).unwrap_err();
    assert!(error.severity().is_recoverable());

    let restarted = session.restart();
    assert!(matches!(restarted, SessionEvent::Restarted { strip, .. } if &strip == session.strip()));
    assert_eq!(session.restarts(), 1);
    assert_eq!(session.state().phase(), TurnPhase::Idle);
    assert_eq!(session.state().party().hp(), 1);
    assert_eq!(session.state().encounter_index(), 0);
    assert!(session.moves().is_empty());
}

#[test]
fn last_enemy_down_is_victory() {
    let mut session = Session::builder()
        .seed(8)
        .encounters(vec![EnemyTemplate::new("スライム", Element::Water, 1, 10, 1)])
        .initial_strip(strip(READY))
        .build()
        .unwrap();

    let events = session.play(PlayerMove::Swap { a: 2, b: 3 }).unwrap();
    assert_eq!(events.last(), Some(&SessionEvent::Victory { turns: 1 }));
    assert!(session.is_over());
    assert_eq!(session.state().phase(), TurnPhase::Victory);
    assert_eq!(session.state().encounter_index(), 1);
}

#[test]
fn invalid_content_fails_to_build() {
    let result = Session::builder().encounters(Vec::new()).build();
    assert!(matches!(result, Err(RuntimeError::Setup(_))));
}

#[test]
fn starting_strip_with_empty_slots_is_rejected() {
    let result = Session::builder()
        .seed(1)
        .initial_strip(strip("水風土命水風土命水風土___"))
        .build();
    assert!(matches!(
        result,
        Err(RuntimeError::Setup(SetupError::UnsettledStrip { empty: 3 }))
    ));
}

#[test]
fn events_serialize_with_a_tag() {
    let mut session = Session::builder()
        .seed(2)
        .initial_strip(strip(QUIET))
        .build()
        .unwrap();
    let events = session.play(PlayerMove::Swap { a: 0, b: 1 }).unwrap();

    let json = serde_json::to_value(&events).unwrap();
    assert_eq!(json[0]["event"], "turn_started");
    assert_eq!(json[1]["event"], "enemy_attack");
    assert_eq!(json[1]["attack"]["enemy"], "スライム");
    assert_eq!(json[1]["party_band"], "healthy");
}
