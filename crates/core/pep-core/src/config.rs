//! Configuration management and environment variable loading

use crate::{PepError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Reply returned when the catalog has nothing for an intent
pub const DEFAULT_FALLBACK_REPLY: &str =
    "I'm here to help. Please let me know how I can assist you.";

/// Load environment variables from .env file
///
/// Looks in the current directory and its parents. A missing file is not an
/// error; a file that fails to parse is.
///
/// # Example
///
/// ```no_run
/// use pep_core::load_env;
///
/// load_env().ok();
/// let config = pep_core::EngineConfig::from_env().unwrap();
/// ```
pub fn load_env() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::info!("✓ Loaded environment from: {}", path.display());
            Ok(())
        }
        Err(dotenvy::Error::LineParse(line, pos)) => Err(PepError::config(format!(
            "Failed to parse .env file at line {}, position {}",
            line, pos
        ))),
        Err(dotenvy::Error::Io(_)) => {
            tracing::warn!("No .env file found - using system environment variables only");
            Ok(())
        }
        Err(e) => Err(PepError::config(format!("Failed to load .env file: {}", e))),
    }
}

/// Load environment variables from a specific file
pub fn load_env_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    match dotenvy::from_path(path.as_ref()) {
        Ok(_) => {
            tracing::info!("✓ Loaded environment from: {}", path.as_ref().display());
            Ok(())
        }
        Err(e) => Err(PepError::config(format!(
            "Failed to load {} environment file: {}",
            path.as_ref().display(),
            e
        ))),
    }
}

/// Get optional environment variable with default
pub fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get environment variable as integer
pub fn get_env_int<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Get environment variable as float
pub fn get_env_float(key: &str, default: f32) -> f32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<f32>().ok())
        .unwrap_or(default)
}

/// Tunable thresholds of the scoring and personalization policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Compound score at or above which text is positive
    pub positive_threshold: f32,

    /// Compound score at or below which text is negative
    pub negative_threshold: f32,

    /// Confidence (0-100) that must be exceeded before a reply gets a prefix
    pub personalization_threshold: f32,

    /// Conversation length from which `respond` attaches a trend summary
    pub trend_min_turns: usize,

    /// Reply used for unknown or empty intents
    pub fallback_reply: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            positive_threshold: 0.05,
            negative_threshold: -0.05,
            personalization_threshold: 30.0,
            trend_min_turns: 3,
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Build a config from `PEP_*` environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            positive_threshold: get_env_float("PEP_POSITIVE_THRESHOLD", defaults.positive_threshold),
            negative_threshold: get_env_float("PEP_NEGATIVE_THRESHOLD", defaults.negative_threshold),
            personalization_threshold: get_env_float(
                "PEP_PERSONALIZATION_THRESHOLD",
                defaults.personalization_threshold,
            ),
            trend_min_turns: get_env_int("PEP_TREND_MIN_TURNS", defaults.trend_min_turns),
            fallback_reply: get_env_or("PEP_FALLBACK_REPLY", &defaults.fallback_reply),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that thresholds are ordered and within range
    pub fn validate(&self) -> Result<()> {
        if !(-1.0..=1.0).contains(&self.positive_threshold)
            || !(-1.0..=1.0).contains(&self.negative_threshold)
        {
            return Err(PepError::config(format!(
                "Sentiment thresholds must lie in [-1, 1] (positive={}, negative={})",
                self.positive_threshold, self.negative_threshold
            )));
        }
        if self.negative_threshold >= self.positive_threshold {
            return Err(PepError::config(format!(
                "negative_threshold ({}) must be below positive_threshold ({})",
                self.negative_threshold, self.positive_threshold
            )));
        }
        if !(0.0..=100.0).contains(&self.personalization_threshold) {
            return Err(PepError::config(format!(
                "personalization_threshold must lie in [0, 100], got {}",
                self.personalization_threshold
            )));
        }
        if self.fallback_reply.trim().is_empty() {
            return Err(PepError::config("fallback_reply must not be empty"));
        }
        Ok(())
    }
}
