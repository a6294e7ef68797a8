//! Turn state machine phases.

/// Where a session is within the turn cycle.
///
/// ```text
/// Idle ──swap──▶ Cascading ──enemy alive──▶ EnemyTurn ──party alive──▶ Idle
///                    │                          └──party down──▶ Defeat
///                    └──enemy down──▶ EncounterAdvance ──more──▶ Idle
///                                               └──none left──▶ Victory
/// ```
///
/// `Victory` and `Defeat` are terminal until the session restarts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TurnPhase {
    /// Waiting for the player's move.
    #[default]
    Idle,
    /// Resolving runs produced by the last move.
    Cascading,
    /// The enemy survived and strikes back.
    EnemyTurn,
    /// The enemy fell; moving to the next encounter.
    EncounterAdvance,
    /// Every encounter cleared.
    Victory,
    /// The party fell.
    Defeat,
}

impl TurnPhase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}
