//! Error types for yaml-doctor
//!
//! Rule evaluation never fails: every problem found inside a YAML file becomes
//! an [`Issue`](crate::rules::Issue). The errors below cover the collaborators
//! around the rules (file enumeration, configuration, report writing).

use thiserror::Error;

/// Main error type for yaml-doctor
#[derive(Error, Debug)]
pub enum DoctorError {
    /// Scan-related errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report writing errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that occur while enumerating files to scan
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory
    #[error("Scan root '{path}' is not a readable directory")]
    RootNotFound {
        /// Path that was requested
        path: String,
    },

    /// An ignore glob could not be compiled
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending glob
        pattern: String,
        /// The underlying glob error
        source: globset::Error,
    },

    /// Directory walking failed at the root level
    #[error("Failed to walk '{path}': {source}")]
    Walk {
        /// Directory being walked
        path: String,
        /// The underlying walker error
        source: ignore::Error,
    },

    /// The background scan task did not complete
    #[error("Scan task failed: {0}")]
    Task(String),
}

/// Errors that occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse the configuration file
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors that occur while writing reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to write a report file
    #[error("Failed to write '{path}': {source}")]
    FileWrite {
        /// Path to the report file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

impl From<toml::de::Error> for DoctorError {
    fn from(err: toml::de::Error) -> Self {
        DoctorError::Config(ConfigError::Parse(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_display() {
        let err = DoctorError::from(ScanError::RootNotFound {
            path: "/nope".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Scan error: Scan root '/nope' is not a readable directory"
        );
    }

    #[test]
    fn test_toml_error_converts_to_config_error() {
        let parse_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: DoctorError = parse_err.into();
        assert!(matches!(err, DoctorError::Config(ConfigError::Parse(_))));
    }
}
