//! Frontend Models
//!
//! Data structures matching backend types.

use serde::{Deserialize, Serialize};

/// One visible task row (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: String,
    pub description: String,
}

/// Screen state after a backend operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenSnapshot {
    pub input_text: String,
    pub tasks: Vec<TaskRow>,
    pub busy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyRelease {
    #[default]
    Completion,
    AfterDelay { after_ms: u64 },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenOptions {
    #[serde(default)]
    pub refresh_on_keystroke: bool,
    #[serde(default)]
    pub delete_by_description: bool,
    #[serde(default)]
    pub busy_release: BusyRelease,
}

/// Parse connection settings (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
    "Task".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            server_url: "https://parseapi.back4app.com/".to_string(),
            application_id: String::new(),
            javascript_key: None,
            rest_api_key: None,
            class_name: default_class_name(),
            timeout_secs: None,
            screen: ScreenOptions::default(),
        }
    }
}
