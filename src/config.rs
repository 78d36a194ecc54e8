use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::rules::MIN_WINNING_RUN;
use crate::game::Board;

/// Magnitudes of the board a new game starts from.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 7,
            height: 6,
        }
    }
}

impl BoardConfig {
    /// Empty board with the configured magnitudes
    pub fn empty_board(&self) -> Board {
        Board::empty(self.width, self.height)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Aligned tokens needed to win
    pub min_run: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig { min_run: 4 }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub rules: RulesConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width < 1 {
            return Err(ConfigError::Validation("board.width must be >= 1".into()));
        }
        if self.board.height < 1 {
            return Err(ConfigError::Validation("board.height must be >= 1".into()));
        }
        if self.rules.min_run < MIN_WINNING_RUN {
            return Err(ConfigError::Validation(format!(
                "rules.min_run must be >= {MIN_WINNING_RUN}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
