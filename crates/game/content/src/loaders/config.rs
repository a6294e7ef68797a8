//! Game configuration loader.

use std::path::Path;

use gem_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`]. The result is
    /// validated before it is returned.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gem_core::{Element, Token};

    #[test]
    fn empty_document_is_the_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = ConfigLoader::parse(
            r#"
            jitter_ratio = 0.0
            max_cascade_steps = 8

            [elements]
            healing = "water"
            refill_pool = ["fire", "water"]

            [[elements.display]]
            token = { gem = "fire" }
            glyph = "火"
            color = [255, 0, 0]

            [[elements.display]]
            token = "void"
            glyph = "・"
            color = [0, 0, 0]
            "#,
        )
        .unwrap();

        assert_eq!(config.jitter_ratio, 0.0);
        assert_eq!(config.max_cascade_steps, 8);
        assert_eq!(config.min_run, GameConfig::DEFAULT_MIN_RUN);
        assert!(config.elements.is_healing(Element::Water));
        assert_eq!(config.elements.refill_pool, vec![Element::Fire, Element::Water]);
        assert_eq!(config.elements.coefficient(Element::Fire, Element::Wind), 2.0);
        let void = config.elements.display_for(Token::Void).unwrap();
        assert_eq!(void.glyph, '・');
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse("min_run = 1").unwrap_err();
        assert!(err.to_string().contains("run"), "{err}");

        let err = ConfigLoader::parse("[elements]\nrefill_pool = []").unwrap_err();
        assert!(err.to_string().contains("refill"), "{err}");

        assert!(ConfigLoader::parse("min_run = \"three\"").is_err());
    }
}
