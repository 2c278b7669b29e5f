//! Configuration management for PromptCraft CLI
//!
//! Stores the API key and default settings in ~/.config/promptcraft/config.toml.
//! Environment variables (and a `.env` file) take precedence over the file.

use anyhow::{Context, Result};
use promptcraft::config::{FEEDBACK_ENDPOINT, GEMINI_API_KEY, GEMINI_MODEL};
use promptcraft::{AppConfig, ConfigError, DEFAULT_TARGET_MODEL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "promptcraft";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Gemini model used for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_endpoint: Option<String>,
    /// Target model preselected in new sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_target_model: Option<String>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set API key
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    pub fn target_model(&self) -> String {
        self.default_target_model
            .clone()
            .unwrap_or_else(|| DEFAULT_TARGET_MODEL.to_string())
    }

    /// Value stored in the file for a configuration key
    fn file_value(&self, key: &str) -> Option<String> {
        match key {
            GEMINI_API_KEY => self.api_key.clone(),
            GEMINI_MODEL => self.model.clone(),
            FEEDBACK_ENDPOINT => self.feedback_endpoint.clone(),
            _ => None,
        }
    }

    /// Resolve runtime configuration from the process environment and this file
    pub fn resolve(&self) -> Result<AppConfig, ConfigError> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolve with `env` taking precedence over file values
    pub fn resolve_with<F>(&self, env: F) -> Result<AppConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        AppConfig::from_lookup(|key| {
            env(key)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| self.file_value(key))
        })
    }
}
