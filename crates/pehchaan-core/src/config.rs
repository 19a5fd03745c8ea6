//! Configuration loaded from `~/.rail-pehchaan/config.json`

use pehchaan_files::{FileError, Paths};
use serde::{Deserialize, Serialize};

pub const ENV_CHAT_ENDPOINT: &str = "RAIL_PEHCHAAN_CHAT_ENDPOINT";
pub const ENV_CHAT_KEY: &str = "RAIL_PEHCHAAN_CHAT_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error("Chat endpoint must be an http(s) URL, got {0:?}")]
    InvalidEndpoint(String),
}

/// Assistant settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Remote chat function URL; the scripted assistant is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Simulated typing delay for scripted replies
    pub reply_delay_ms: u64,

    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            reply_delay_ms: 1500,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    pub upcoming_window_days: i64,
    pub urgent_days: i64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: 30,
            urgent_days: 7,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chat: ChatConfig,
    pub reminders: ReminderConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the standard location, then apply environment overrides
    pub fn load(paths: &Paths) -> Result<Self, ConfigError> {
        let config = pehchaan_files::read_json::<Config>(&paths.config_file())?
            .unwrap_or_default()
            .with_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_CHAT_ENDPOINT).filter(|v| !v.trim().is_empty()) {
            self.chat.endpoint = Some(endpoint);
        }
        if let Some(key) = lookup(ENV_CHAT_KEY).filter(|v| !v.trim().is_empty()) {
            self.chat.api_key = Some(key);
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(endpoint) = &self.chat.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConfigError::InvalidEndpoint(endpoint.clone()));
            }
        }
        Ok(())
    }

    pub fn save(&self, paths: &Paths) -> Result<(), ConfigError> {
        pehchaan_files::write_json_pretty(&paths.config_file(), self)?;
        Ok(())
    }
}
