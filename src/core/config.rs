//! Game configuration.
//!
//! Hosts configure the engine once at startup with a `GameConfig`, either
//! through the builder methods or from a TOML file:
//!
//! ```toml
//! target_score = 20
//! words_path = "words.txt"
//! seed = 42            # optional, pins word order for replays
//! ```

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Points a team needs to win.
pub const DEFAULT_TARGET_SCORE: u32 = 20;

/// Word file used when none is configured.
pub const DEFAULT_WORDS_PATH: &str = "words.txt";

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Win threshold. Always positive.
    #[serde(default = "default_target_score")]
    pub target_score: u32,

    /// RNG seed for word draws. `None` draws a fresh seed per engine.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Word source used by `AliasEngine::start_configured_game`.
    #[serde(default = "default_words_path")]
    pub words_path: PathBuf,
}

fn default_target_score() -> u32 {
    DEFAULT_TARGET_SCORE
}

fn default_words_path() -> PathBuf {
    PathBuf::from(DEFAULT_WORDS_PATH)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            seed: None,
            words_path: default_words_path(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration (target 20, unseeded, `words.txt`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_target_score(mut self, target: u32) -> Self {
        assert!(target > 0, "Target score must be positive");
        self.target_score = target;
        self
    }

    /// Pin the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the word file path.
    #[must_use]
    pub fn with_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.words_path = path.into();
        self
    }

    /// Parse configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        debug!(target_score = config.target_score, seed = ?config.seed, "Config parsed");
        Ok(config)
    }

    /// Load configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(words_path = %config.words_path.display(), "Config loaded successfully");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.target_score == 0 {
            return Err(ConfigError::new("target_score must be positive"));
        }
        Ok(())
    }
}

/// Configuration error with the location that raised it.
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
