//! Content factory for loading a full content set from a data directory.

use std::path::{Path, PathBuf};

use gem_core::{EnemyTemplate, GameConfig, PartyTemplate};

use crate::defaults::GameContent;
use crate::loaders::{ConfigLoader, EncounterLoader, LoadResult, PartyLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── party.ron
/// └── encounters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const PARTY_FILE: &'static str = "party.ron";
    pub const ENCOUNTERS_FILE: &'static str = "encounters.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load the party roster from `party.ron`.
    pub fn load_party(&self) -> LoadResult<PartyTemplate> {
        PartyLoader::load(&self.data_dir.join(Self::PARTY_FILE))
    }

    /// Load the encounter sequence from `encounters.ron`.
    pub fn load_encounters(&self) -> LoadResult<Vec<EnemyTemplate>> {
        EncounterLoader::load(&self.data_dir.join(Self::ENCOUNTERS_FILE))
    }

    /// Load every file. A missing `config.toml` falls back to the default
    /// configuration; the party and encounter files are required.
    pub fn load_all(&self) -> LoadResult<GameContent> {
        let config = if self.data_dir.join(Self::CONFIG_FILE).exists() {
            self.load_config()?
        } else {
            GameConfig::default()
        };

        Ok(GameContent {
            config,
            party: self.load_party()?,
            encounters: self.load_encounters()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
