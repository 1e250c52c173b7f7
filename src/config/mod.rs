//! # Configuration
//!
//! Settings for the interactive shell and for logging, read from a TOML file.
//! The game world itself is built in code and is not configurable.
//!
//! ```toml
//! [game]
//! prompt = "> "
//! exit_keyword = "выход"
//! farewell = "До свидания!"
//! show_intro = true
//!
//! [logging]
//! level = "warn"
//! file = "textquest.log"
//! ```
//!
//! Every field has a default, so a partial file (or an empty one) is valid.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Printed before every input line.
    pub prompt: String,
    /// Line that ends the session. Checked by the shell, never dispatched.
    pub exit_keyword: String,
    /// Printed once when the player types the exit keyword.
    pub farewell: String,
    /// Print the starting room description before the first prompt.
    pub show_intro: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            exit_keyword: "выход".to_string(),
            farewell: "До свидания!".to_string(),
            show_intro: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace. Overridden by `-v`.
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown names fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        Ok(config)
    }

    /// Load the file if it exists, otherwise use defaults. A file that exists
    /// but cannot be parsed is still an error.
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if fs::try_exists(path).await.unwrap_or(false) {
            Self::load(path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Create a default configuration file
    pub async fn create_default(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path.display(), e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.game.prompt, "> ");
        assert_eq!(config.game.exit_keyword, "выход");
        assert_eq!(config.game.farewell, "До свидания!");
        assert!(config.game.show_intro);
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Warn);
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[game]\nprompt = \"? \"\n").unwrap();
        assert_eq!(config.game.prompt, "? ");
        assert_eq!(config.game.exit_keyword, "выход");
        assert_eq!(config.logging, LoggingConfig::default());

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_level_filter() {
        let mut logging = LoggingConfig::default();
        logging.level = "DEBUG".to_string();
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);
        logging.level = "loud".to_string();
        assert_eq!(logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.game.exit_keyword = "exit".to_string();
        config.logging.file = Some("game.log".to_string());
        let serialized = toml::to_string_pretty(&config).unwrap();
        assert!(serialized.contains("exit_keyword = \"exit\""));
        let back: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(back, config);
    }
}
