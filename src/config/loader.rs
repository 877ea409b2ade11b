//! Configuration loader

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, DoctorError};
use crate::scanner::ScanOptions;

use super::OutputConfig;

/// Configuration file looked up in the scan root
pub const CONFIG_FILENAME: &str = ".yaml-doctor.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ignore globs replacing the built-in list
    #[serde(default)]
    pub ignore: Option<Vec<String>>,

    /// Ignore globs appended to the active list
    #[serde(default)]
    pub extra_ignore: Vec<String>,

    /// Upper bound on worker threads
    #[serde(default)]
    pub jobs: Option<usize>,

    /// Fail the run when the score is below this value
    #[serde(default)]
    pub min_score: Option<u32>,

    /// Report output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load `.yaml-doctor.toml` from `root`, or return the default
    pub fn load_or_default(root: &Path) -> Result<Self, DoctorError> {
        let config_path = root.join(CONFIG_FILENAME);

        if config_path.is_file() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, DoctorError> {
        let content = fs::read_to_string(path).map_err(|e| {
            DoctorError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        toml::from_str(&content).map_err(Into::into)
    }

    /// Scan options derived from this configuration
    pub fn scan_options(&self) -> ScanOptions {
        let mut options = ScanOptions::default();

        if let Some(ignore) = &self.ignore {
            options.ignore_patterns = ignore.clone();
        }
        options
            .ignore_patterns
            .extend(self.extra_ignore.iter().cloned());
        options.jobs = self.jobs;

        options
    }
}
