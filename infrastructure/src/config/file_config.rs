//! On-disk configuration schema (`cardio.toml`)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub service: ServiceConfig,
    pub tui: TuiConfig,
}

/// Prediction service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the prediction service.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Wizard display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Show the completion gauge under the form.
    pub show_completion: bool,
    /// How long flash messages stay on screen, in milliseconds.
    pub flash_duration_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            show_completion: true,
            flash_duration_ms: 3000,
        }
    }
}

impl TuiConfig {
    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_duration_ms)
    }
}
