//! Runtime configuration
//!
//! Built from any key lookup so the server can read its Shuttle secret store
//! and the CLI can read environment variables and its config file.

use std::time::Duration;
use thiserror::Error;

use crate::adapters::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const GENERATION_TIMEOUT_SECS: &str = "GENERATION_TIMEOUT_SECS";
pub const FEEDBACK_ENDPOINT: &str = "FEEDBACK_ENDPOINT";
pub const FEEDBACK_TIMEOUT_SECS: &str = "FEEDBACK_TIMEOUT_SECS";

/// Feedback request timeout when FEEDBACK_TIMEOUT_SECS is unset
pub const DEFAULT_FEEDBACK_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingApiKey(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Generation service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

/// Feedback relay settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackConfig {
    pub endpoint: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    /// None disables feedback
    pub feedback: Option<FeedbackConfig>,
}

impl AppConfig {
    /// Resolve configuration from `lookup`; blank values count as unset.
    ///
    /// A missing API key is an error: nothing can be served without it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(GEMINI_API_KEY).ok_or(ConfigError::MissingApiKey(GEMINI_API_KEY))?;

        let generation = GenerationConfig {
            api_key,
            model: get(GEMINI_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get(GEMINI_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: parse_secs(GENERATION_TIMEOUT_SECS, get(GENERATION_TIMEOUT_SECS))?,
        };

        let feedback = match get(FEEDBACK_ENDPOINT) {
            Some(endpoint) => Some(FeedbackConfig {
                endpoint,
                timeout: parse_secs(FEEDBACK_TIMEOUT_SECS, get(FEEDBACK_TIMEOUT_SECS))?
                    .or(Some(DEFAULT_FEEDBACK_TIMEOUT)),
            }),
            None => None,
        };

        Ok(Self {
            generation,
            feedback,
        })
    }

    /// Resolve from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn parse_secs(key: &'static str, value: Option<String>) -> Result<Option<Duration>, ConfigError> {
    value
        .map(|v| match v.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(ConfigError::InvalidValue { key, value: v }),
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[(GEMINI_API_KEY, "secret")])).unwrap();

        assert_eq!(config.generation.api_key, "secret");
        assert_eq!(config.generation.model, "gemini-1.5-flash");
        assert_eq!(config.generation.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.generation.timeout, None);
        assert!(config.feedback.is_none());
    }

    #[test]
    fn test_missing_or_blank_key_is_fatal() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingApiKey(GEMINI_API_KEY))
        );
        assert!(AppConfig::from_lookup(lookup(&[(GEMINI_API_KEY, "   ")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (GEMINI_API_KEY, "secret"),
            (GEMINI_MODEL, "gemini-2.0-flash"),
            (GENERATION_TIMEOUT_SECS, "30"),
            (FEEDBACK_ENDPOINT, "https://collector.example/exec"),
            (FEEDBACK_TIMEOUT_SECS, "10"),
        ]))
        .unwrap();

        assert_eq!(config.generation.model, "gemini-2.0-flash");
        assert_eq!(config.generation.timeout, Some(Duration::from_secs(30)));
        let feedback = config.feedback.unwrap();
        assert_eq!(feedback.endpoint, "https://collector.example/exec");
        assert_eq!(feedback.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_feedback_timeout_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[
            (GEMINI_API_KEY, "secret"),
            (FEEDBACK_ENDPOINT, "https://collector.example/exec"),
        ]))
        .unwrap();

        let feedback = config.feedback.unwrap();
        assert_eq!(feedback.timeout, Some(DEFAULT_FEEDBACK_TIMEOUT));
        assert_eq!(config.generation.timeout, None);
    }

    #[test]
    fn test_invalid_timeout() {
        let err = AppConfig::from_lookup(lookup(&[
            (GEMINI_API_KEY, "secret"),
            (GENERATION_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: GENERATION_TIMEOUT_SECS,
                value: "soon".to_string()
            }
        );
    }
}
