//! Session orchestrator.
//!
//! A [`Session`] owns the authoritative [`SessionState`], the rule config and
//! the random stream. It drives [`TurnEngine`] one move at a time and turns
//! each [`TurnReport`](gem_core::TurnReport) into [`SessionEvent`]s.

use tracing::{debug, info, warn};

use gem_content::{DefaultContent, GameContent};
use gem_core::{
    EnemyTemplate, GameConfig, GameError, PartyTemplate, PcgRng, PlayerMove, ResolutionEvent,
    SessionState, Strip, TurnEngine, compute_moves_root, compute_seed,
};

use crate::api::Result;
use crate::events::{SessionEvent, TurnContext, extract_events};

/// Stream id for the rng of each (re)start.
const STRIP_STREAM: u32 = 0;

/// One play-through of the encounter sequence, restartable.
pub struct Session {
    config: GameConfig,
    state: SessionState,
    rng: PcgRng,
    seed: u64,
    restarts: u64,
    moves: Vec<PlayerMove>,
}

impl Session {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Plays one move and returns everything that happened, in order.
    ///
    /// Rejected moves leave the session untouched and are not recorded.
    pub fn play(&mut self, player_move: PlayerMove) -> Result<Vec<SessionEvent>> {
        let party_max_hp = self.state.party().max_hp();
        let enemy_max_hp = self.state.enemy().max_hp();
        let encounter = self.state.encounter_index();

        let report = match TurnEngine::new(&mut self.state, &self.config)
            .play(player_move, &mut self.rng)
        {
            Ok(report) => report,
            Err(error) => {
                debug!(
                    target: "runtime::session",
                    ?player_move,
                    code = error.error_code(),
                    "Move rejected: {}",
                    error
                );
                return Err(error.into());
            }
        };
        self.moves.push(player_move);

        debug!(
            target: "runtime::session",
            turn = report.turn,
            ?player_move,
            resolutions = report.resolutions.len(),
            "Turn played"
        );
        for resolution in &report.resolutions {
            log_resolution(resolution);
        }
        if report.cascade_truncated {
            warn!(
                target: "runtime::session",
                turn = report.turn,
                steps = report.resolutions.len(),
                "Cascade hit max steps limit with runs still pending"
            );
        }

        let context = TurnContext {
            player_move,
            party_max_hp,
            enemy_max_hp,
            encounter,
        };
        let events = extract_events(&context, report, self.state.enemy().hp());
        self.log_outcome(&events);

        Ok(events)
    }

    /// Back to the first encounter with a full-hp party and a fresh strip.
    ///
    /// Each restart draws from its own stream derived from the session seed,
    /// so a replay that restarts at the same points reproduces exactly.
    pub fn restart(&mut self) -> SessionEvent {
        self.restarts += 1;
        let seed = compute_seed(self.seed, self.restarts, STRIP_STREAM);
        self.rng = PcgRng::new(seed);
        TurnEngine::new(&mut self.state, &self.config).restart(&mut self.rng);
        self.moves.clear();

        info!(
            target: "runtime::session",
            restarts = self.restarts,
            strip = %self.state.strip(),
            "Session restarted"
        );

        SessionEvent::Restarted {
            seed,
            strip: *self.state.strip(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn strip(&self) -> &Strip {
        self.state.strip()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Base seed the session was built with.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub const fn restarts(&self) -> u64 {
        self.restarts
    }

    /// Moves accepted since the last (re)start.
    pub fn moves(&self) -> &[PlayerMove] {
        &self.moves
    }

    pub fn state_root(&self) -> [u8; 32] {
        self.state.state_root()
    }

    pub fn moves_root(&self) -> [u8; 32] {
        compute_moves_root(&self.moves)
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    fn log_outcome(&self, events: &[SessionEvent]) {
        for event in events {
            match event {
                SessionEvent::EncounterAdvanced { index, enemy, .. } => info!(
                    target: "runtime::session",
                    index,
                    enemy = %enemy,
                    "Encounter advanced"
                ),
                SessionEvent::EnemyAttack { attack, .. } => debug!(
                    target: "runtime::session",
                    enemy = %attack.enemy,
                    damage = attack.damage,
                    party_hp = attack.party_hp,
                    "Enemy attacked"
                ),
                SessionEvent::Victory { turns } => info!(
                    target: "runtime::session",
                    turns,
                    state_root = %hex::encode(self.state_root()),
                    moves_root = %hex::encode(self.moves_root()),
                    "Victory"
                ),
                SessionEvent::Defeat { encounter, enemy } => info!(
                    target: "runtime::session",
                    encounter,
                    enemy = %enemy,
                    state_root = %hex::encode(self.state_root()),
                    "Party defeated"
                ),
                _ => {}
            }
        }
    }
}

fn log_resolution(resolution: &ResolutionEvent) {
    debug!(
        target: "runtime::session",
        element = %resolution.element,
        start = resolution.start,
        length = resolution.length,
        combo = resolution.combo,
        multiplier = resolution.multiplier,
        effect = %resolution.effect,
        amount = resolution.amount,
        party_hp = resolution.party_hp,
        enemy_hp = resolution.enemy_hp,
        "Run resolved"
    );
}

/// Builder for [`Session`] with flexible configuration.
///
/// Everything is optional: the built-in content, a random seed and a random
/// first strip are used for whatever is not set.
pub struct SessionBuilder {
    config: GameConfig,
    party: PartyTemplate,
    encounters: Vec<EnemyTemplate>,
    seed: Option<u64>,
    initial_strip: Option<Strip>,
}

impl SessionBuilder {
    fn new() -> Self {
        let GameContent {
            config,
            party,
            encounters,
        } = DefaultContent::content();
        Self {
            config,
            party,
            encounters,
            seed: None,
            initial_strip: None,
        }
    }

    /// Override rule configuration
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn party(mut self, party: PartyTemplate) -> Self {
        self.party = party;
        self
    }

    pub fn encounters(mut self, encounters: Vec<EnemyTemplate>) -> Self {
        self.encounters = encounters;
        self
    }

    /// Replace config, party and encounters at once.
    pub fn content(self, content: GameContent) -> Self {
        self.config(content.config)
            .party(content.party)
            .encounters(content.encounters)
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start from a known strip instead of a random one.
    ///
    /// [`build`](Self::build) rejects a strip with `Empty` slots.
    pub fn initial_strip(mut self, strip: Strip) -> Self {
        self.initial_strip = Some(strip);
        self
    }

    /// Validates the content and deals the first strip.
    pub fn build(self) -> Result<Session> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = PcgRng::new(compute_seed(seed, 0, STRIP_STREAM));

        let mut state = SessionState::new(&self.config, &self.party, self.encounters, &mut rng)?;
        if let Some(strip) = self.initial_strip {
            state = state.with_strip(strip)?;
        }

        info!(
            target: "runtime::session",
            seed,
            party = %state.party().name(),
            allies = state.party().allies().len(),
            encounters = state.encounters().len(),
            enemy = %state.enemy().name(),
            strip = %state.strip(),
            "Session started"
        );

        Ok(Session {
            config: self.config,
            state,
            rng,
            seed,
            restarts: 0,
            moves: Vec::new(),
        })
    }
}
