use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;
use crate::error::ConfigError;
use crate::game::{ControllerOptions, GameMode, Player};

/// Upper bound for the delay before the computer plays.
const MAX_MOVE_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeSetting {
    VsAi,
    TwoPlayer,
}

/// Table settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: ModeSetting,
    pub difficulty: u8,
    pub first_player: Player,
    pub alternate_first_player: bool,
    pub auto_progress: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: ModeSetting::VsAi,
            difficulty: 0,
            first_player: Player::A,
            alternate_first_player: false,
            auto_progress: true,
        }
    }
}

/// Computer opponent settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Pause before the computer's move is played, in milliseconds.
    pub move_delay_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            move_delay_ms: 600,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ai: AiConfig,
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
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Difficulty::new(self.game.difficulty).is_err() {
            return Err(ConfigError::Validation(format!(
                "game.difficulty must be in 0..={}",
                Difficulty::MAX
            )));
        }
        if self.ai.move_delay_ms > MAX_MOVE_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "ai.move_delay_ms must be <= {MAX_MOVE_DELAY_MS}"
            )));
        }
        Ok(())
    }

    /// Game mode described by this configuration. Call after `validate`.
    pub fn to_mode(&self) -> Result<GameMode, ConfigError> {
        match self.game.mode {
            ModeSetting::TwoPlayer => Ok(GameMode::TwoPlayer),
            ModeSetting::VsAi => Difficulty::new(self.game.difficulty)
                .map(GameMode::VsAi)
                .map_err(|e| ConfigError::Validation(e.to_string())),
        }
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            first_player: self.game.first_player,
            alternate_first_player: self.game.alternate_first_player,
            auto_progress: self.game.auto_progress,
            seed: self.ai.seed,
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
