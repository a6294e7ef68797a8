//! Encounter sequence loader.

use std::path::Path;

use gem_core::{EncounterSequence, EnemyTemplate};

use crate::loaders::{LoadResult, read_file};

/// Loader for the ordered encounter list from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    /// Load encounters from a RON file.
    ///
    /// RON format: `Vec<EnemyTemplate>` in play order.
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<EnemyTemplate>> {
        let encounters: Vec<EnemyTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter RON: {}", e))?;

        // Same checks a session runs at creation, surfaced at load time.
        let sequence = EncounterSequence::new(encounters)?;
        Ok(sequence.iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gem_core::Element;

    #[test]
    fn keeps_order() {
        let encounters = EncounterLoader::parse(
            r#"[
                (name: "スライム", element: water, max_hp: 100, attack: 10, defense: 1),
                (name: "ドラゴン", element: fire, max_hp: 600, attack: 50, defense: 20),
            ]"#,
        )
        .unwrap();

        assert_eq!(encounters.len(), 2);
        assert_eq!(encounters[0].name, "スライム");
        assert_eq!(encounters[1].element, Element::Fire);
    }

    #[test]
    fn rejects_empty_list_and_zero_hp() {
        assert!(EncounterLoader::parse("[]").is_err());
        let err = EncounterLoader::parse(
            r#"[(name: "ghost", element: wind, max_hp: 0, attack: 1, defense: 1)]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("ghost"), "{err}");
    }
}
