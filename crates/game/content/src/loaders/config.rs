//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("seed = 7\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.enemy_turn_delay_ms, GameConfig::DEFAULT_ENEMY_TURN_DELAY_MS);
        assert_eq!(config.input_debounce_ms, GameConfig::DEFAULT_INPUT_DEBOUNCE_MS);
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "enemy_turn_delay_ms = 250").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.enemy_turn_delay_ms, 250);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn reports_missing_file_and_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let error = ConfigLoader::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(error.to_string().contains("Failed to read file"));

        let error = ConfigLoader::parse("enemy_turn_delay_ms = \"soon\"").unwrap_err();
        assert!(error.to_string().contains("Failed to parse config TOML"));
    }
}
