//! Store Connection Configuration
//!
//! Persisted as `store_config.json` in the app data directory. Built into a
//! `ParseTaskStore` explicitly; nothing is configured process-wide.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const CONFIG_FILE_NAME: &str = "store_config.json";

const DEFAULT_CLASS_NAME: &str = "Task";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{0}")]
    Invalid(String),
}

/// When the busy flag drops after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyRelease {
    /// As soon as the mutation and its refresh have finished
    #[default]
    Completion,
    /// A fixed delay after entering busy, whatever the network is doing
    AfterDelay { after_ms: u64 },
}

/// Behaviour switches for the task screen
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenOptions {
    /// Re-fetch the whole list on every keystroke
    #[serde(default)]
    pub refresh_on_keystroke: bool,
    /// Complete by matching the first record with the same description
    /// instead of the tapped row's id
    #[serde(default)]
    pub delete_by_description: bool,
    #[serde(default)]
    pub busy_release: BusyRelease,
}

/// Remote store connection plus screen options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub server_url: String,
    pub application_id: String,
    #[serde(default)]
    pub javascript_key: Option<String>,
    #[serde(default)]
    pub rest_api_key: Option<String>,
    #[serde(default = "default_class_name")]
    pub class_name: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub screen: ScreenOptions,
}

fn default_class_name() -> String {
    DEFAULT_CLASS_NAME.to_string()
}

impl StoreConfig {
    pub fn new(server_url: impl Into<String>, application_id: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            application_id: application_id.into(),
            javascript_key: None,
            rest_api_key: None,
            class_name: default_class_name(),
            timeout_secs: None,
            screen: ScreenOptions::default(),
        }
    }

    /// Check the fields a client needs before any request is attempted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.application_id.trim().is_empty() {
            return Err(ConfigError::Invalid("application id is required".to_string()));
        }
        if self.class_name.trim().is_empty() {
            return Err(ConfigError::Invalid("class name is required".to_string()));
        }
        self.collection_url()?;
        Ok(())
    }

    /// `<server_url>/classes/<class_name>`
    ///
    /// The server URL is treated as a directory, so `https://host/parse`
    /// and `https://host/parse/` resolve alike.
    pub fn collection_url(&self) -> Result<Url, ConfigError> {
        let mut base = self.server_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!("{} cannot be a base URL", self.server_url)));
        }
        Ok(base.join(&format!("classes/{}", self.class_name.trim()))?)
    }
}

/// Read the config file; `None` when it does not exist yet
pub fn load_config(path: &Path) -> Result<Option<StoreConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    Ok(Some(config))
}

/// Validate and write the config file, creating parent directories
pub fn save_config(path: &Path, config: &StoreConfig) -> Result<(), ConfigError> {
    config.validate()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
