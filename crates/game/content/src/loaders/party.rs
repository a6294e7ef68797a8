//! Party roster loader.

use std::path::Path;

use gem_core::PartyTemplate;

use crate::loaders::{LoadResult, read_file};

/// Loader for the party roster from RON files.
pub struct PartyLoader;

impl PartyLoader {
    /// Load a party from a RON file.
    ///
    /// RON format: `PartyTemplate`, i.e.
    /// `(name: "Player", max_hp: 600, allies: [(name: .., element: fire, attack: 25, defense: 10)])`.
    pub fn load(path: &Path) -> LoadResult<PartyTemplate> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<PartyTemplate> {
        let party: PartyTemplate = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse party RON: {}", e))?;
        party.validate()?;

        Ok(party)
    }
}
