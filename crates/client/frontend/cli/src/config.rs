//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// How turn events are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputMode {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Terminal client configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Session seed. Random when unset.
    pub seed: Option<u64>,
    /// Directory with `config.toml`, `party.ron` and `encounters.ron`.
    /// Built-in content when unset.
    pub data_dir: Option<PathBuf>,
    pub output: OutputMode,
    /// Also write logs to `gem-cli.log` in this directory.
    pub log_dir: Option<PathBuf>,
    /// Paint gems with their display colours (24-bit ANSI).
    pub color: bool,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GEM_SEED` - Session seed (default: random)
    /// - `GEM_DATA_DIR` - Content directory (default: built-in content)
    /// - `GEM_OUTPUT` - `text` or `json` (default: text)
    /// - `GEM_LOG_DIR` - Log file directory (default: stderr only)
    /// - `GEM_COLOR` - `true` to colour gems (default: false)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            seed: read_var(&lookup, "GEM_SEED"),
            data_dir: read_var(&lookup, "GEM_DATA_DIR"),
            output: read_var(&lookup, "GEM_OUTPUT").unwrap_or_default(),
            log_dir: read_var(&lookup, "GEM_LOG_DIR"),
            color: read_var(&lookup, "GEM_COLOR").unwrap_or(false),
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn output_mode_parses_any_case() {
        assert_eq!("json".parse::<OutputMode>(), Ok(OutputMode::Json));
        assert_eq!("TEXT".parse::<OutputMode>(), Ok(OutputMode::Text));
        assert!("yaml".parse::<OutputMode>().is_err());
        assert_eq!(OutputMode::Json.to_string(), "json");
    }

    #[test]
    fn defaults_are_text_without_seed() {
        let config = CliConfig::default();
        assert_eq!(config.output, OutputMode::Text);
        assert_eq!(config.seed, None);
        assert!(!config.color);
    }

    #[test]
    fn variables_override_defaults() {
        let vars: HashMap<&str, &str> = [
            ("GEM_SEED", "42"),
            ("GEM_OUTPUT", "JSON"),
            ("GEM_LOG_DIR", "/tmp/gem"),
            ("GEM_COLOR", "true"),
        ]
        .into_iter()
        .collect();
        let config = CliConfig::from_vars(|key| vars.get(key).map(|value| value.to_string()));

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.data_dir, None);
        assert_eq!(config.output, OutputMode::Json);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/gem")));
        assert!(config.color);
    }

    #[test]
    fn color_stays_off_unless_enabled() {
        assert!(!CliConfig::from_vars(|_| None).color);

        let config = CliConfig::from_vars(|key| (key == "GEM_COLOR").then(|| "yes".to_string()));
        assert!(!config.color);
        assert_eq!(config, CliConfig::default());
    }
}
