//! Built-in roster and encounter table.

use gem_core::{Ally, Element, EnemyTemplate, GameConfig, PartyTemplate};

/// Everything a session needs besides a seed.
#[derive(Clone, Debug, PartialEq)]
pub struct GameContent {
    pub config: GameConfig,
    pub party: PartyTemplate,
    pub encounters: Vec<EnemyTemplate>,
}

impl Default for GameContent {
    fn default() -> Self {
        DefaultContent::content()
    }
}

/// The four-guardian party against the five-stage gauntlet.
pub struct DefaultContent;

impl DefaultContent {
    pub const PARTY_NAME: &'static str = "Player";
    pub const PARTY_MAX_HP: u32 = 600;

    pub fn party() -> PartyTemplate {
        PartyTemplate {
            name: Self::PARTY_NAME.to_owned(),
            max_hp: Self::PARTY_MAX_HP,
            allies: vec![
                Ally::new("青龍", Element::Wind, 15, 10),
                Ally::new("朱雀", Element::Fire, 25, 10),
                Ally::new("白虎", Element::Earth, 20, 5),
                Ally::new("玄武", Element::Water, 20, 15),
            ],
        }
    }

    /// Encounters in play order, weakest first.
    pub fn encounters() -> Vec<EnemyTemplate> {
        vec![
            EnemyTemplate::new("スライム", Element::Water, 100, 10, 1),
            EnemyTemplate::new("ゴブリン", Element::Earth, 200, 20, 5),
            EnemyTemplate::new("オオコウモリ", Element::Wind, 300, 30, 10),
            EnemyTemplate::new("ウェアウルフ", Element::Wind, 400, 40, 15),
            EnemyTemplate::new("ドラゴン", Element::Fire, 600, 50, 20),
        ]
    }

    pub fn content() -> GameContent {
        GameContent {
            config: GameConfig::default(),
            party: Self::party(),
            encounters: Self::encounters(),
        }
    }
}
