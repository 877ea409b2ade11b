//! Configuration module

pub mod loader;

pub use loader::{Config, CONFIG_FILENAME};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_true() -> bool {
    true
}

/// Report output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the reports (defaults to the scan root)
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Whether to write `yaml-doctor-report.json`
    #[serde(default = "default_true")]
    pub json: bool,

    /// Whether to write `yaml-doctor-report.html`
    #[serde(default = "default_true")]
    pub html: bool,

    /// Whether to write `yaml-doctor-badge.svg`
    #[serde(default = "default_true")]
    pub badge: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            json: true,
            html: true,
            badge: true,
        }
    }
}
