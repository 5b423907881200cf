//! Matching thresholds and scorer selection.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::{IndelRatio, LevenshteinRatio, SimilarityScorer};

/// Score a record must strictly exceed to be returned by the matcher.
pub const DEFAULT_MATCH_THRESHOLD: u8 = 70;

/// Score a keyword must strictly exceed to route a query.
pub const DEFAULT_INTENT_THRESHOLD: u8 = 80;

/// Queries longer than this are truncated at the boundary.
pub const DEFAULT_MAX_QUERY_CHARS: usize = 1000;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Which similarity metric to use.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    #[default]
    Indel,
    Levenshtein,
}

impl ScorerKind {
    /// Build the scorer for this kind.
    pub fn build(self) -> Box<dyn SimilarityScorer> {
        match self {
            ScorerKind::Indel => Box::new(IndelRatio),
            ScorerKind::Levenshtein => Box::new(LevenshteinRatio),
        }
    }
}

/// Tunables for the matching pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    pub match_threshold: u8,
    pub intent_threshold: u8,
    pub scorer: ScorerKind,
    pub max_query_chars: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            intent_threshold: DEFAULT_INTENT_THRESHOLD,
            scorer: ScorerKind::default(),
            max_query_chars: DEFAULT_MAX_QUERY_CHARS,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON config document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.match_threshold > 100 {
            return Err(ConfigError::Invalid(format!(
                "match_threshold must be <= 100, got {}",
                self.match_threshold
            )));
        }
        if self.intent_threshold > 100 {
            return Err(ConfigError::Invalid(format!(
                "intent_threshold must be <= 100, got {}",
                self.intent_threshold
            )));
        }
        if self.max_query_chars == 0 {
            return Err(ConfigError::Invalid("max_query_chars must be > 0".into()));
        }
        Ok(())
    }
}
