//! Core configuration.
//!
//! # Responsibility
//! - Hold the tunables of the submission and feed paths.
//! - Load them from TOML, falling back to product defaults per field.
//!
//! # Invariants
//! - `max_words` and `lane_count` are always positive after `validate()`.
//! - An absent `blocked_phrases` means the built-in phrase set.

use crate::moderation::{ContentModerator, DEFAULT_BLOCKED_PHRASES};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Maximum words accepted in one submission.
pub const MAX_WORDS: usize = 200;
/// Words shown in a feed preview before truncation.
pub const PREVIEW_WORDS: usize = 30;
/// Number of feed lanes in the staggered layout.
pub const DEFAULT_LANE_COUNT: usize = 3;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Tunables for submission validation and feed layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Submission word limit.
    pub max_words: usize,
    /// Preview length in words.
    pub preview_words: usize,
    /// Number of feed lanes.
    pub lane_count: usize,
    /// Replacement phrase list; `None` keeps the built-in set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_phrases: Option<Vec<String>>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            max_words: MAX_WORDS,
            preview_words: PREVIEW_WORDS,
            lane_count: DEFAULT_LANE_COUNT,
            blocked_phrases: None,
        }
    }
}

impl CoreConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Rejects values that would make the pipeline unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_words == 0 {
            return Err(ConfigError::Invalid("max_words must be positive".to_string()));
        }
        if self.lane_count == 0 {
            return Err(ConfigError::Invalid("lane_count must be positive".to_string()));
        }
        Ok(())
    }

    /// Builds the moderator for the configured phrase list.
    pub fn moderator(&self) -> ContentModerator {
        match self.blocked_phrases.as_ref() {
            Some(phrases) => ContentModerator::new(phrases),
            None => ContentModerator::new(DEFAULT_BLOCKED_PHRASES),
        }
    }
}
