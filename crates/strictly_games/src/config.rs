//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_tictactoe::{Mark, Mode};
use tracing::{debug, info, instrument};

/// Settings for a terminal game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Two players or versus the engine.
    #[serde(default)]
    mode: Mode,

    /// Mark the human plays in versus-ai mode.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Pause before the engine answers, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,
}

#[instrument]
fn default_human_mark() -> Mark {
    Mark::X
}

#[instrument]
fn default_ai_delay_ms() -> u64 {
    300
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            human_mark: default_human_mark(),
            ai_delay_ms: default_ai_delay_ms(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = ?config.mode, human_mark = %config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<Mode>,
        human_mark: Option<Mark>,
        ai_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(human_mark) = human_mark {
            self.human_mark = human_mark;
        }
        if let Some(ai_delay_ms) = ai_delay_ms {
            self.ai_delay_ms = ai_delay_ms;
        }
        self
    }

    /// Engine thinking delay.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
