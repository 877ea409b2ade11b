//! # Scan Result Structures
//!
//! This module defines the data structures for representing findings and
//! aggregate scan results.
//!
//! ## Overview
//!
//! - [`Severity`] - Issue severity levels (error, warn, info) and their score weight
//! - [`Issue`] - A single finding produced by a rule
//! - [`FileType`] - Classification of a scanned YAML file
//! - [`FileResult`] - All issues found in one file
//! - [`ScanResult`] - Totals and score over every scanned file
//!
//! ## Examples
//!
//! ```rust
//! use yaml_doctor::rules::results::{FileResult, FileType, Issue, ScanResult, Severity};
//!
//! let file = FileResult::new(
//!     "docker-compose.yml",
//!     FileType::DockerCompose,
//!     vec![Issue::new(Severity::Warn, "compose.latestTag", "uses latest")],
//! );
//!
//! let result = ScanResult::from_files("/repo", vec![file]);
//! assert_eq!(result.totals.warn, 1);
//! assert_eq!(result.score, 96);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Starting score before any deduction
pub const MAX_SCORE: u32 = 100;

/// Severity of an issue.
///
/// Each severity deducts a fixed number of points from the score:
///
/// - **Error** - 12 points (broken structure, unparsable YAML)
/// - **Warn** - 4 points (non-deterministic or incomplete configuration)
/// - **Info** - 1 point (style and best-practice suggestions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
    Info,
}

impl Severity {
    /// Points deducted from the score for one issue of this severity
    pub fn weight(self) -> u32 {
        match self {
            Self::Error => 12,
            Self::Warn => 4,
            Self::Info => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding.
///
/// `code` is a stable dotted identifier namespaced by rule family
/// (`style.tabs`, `compose.restart`, `k8s.latestTag`, ...). `line` is only
/// set for text-level style issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Issue {
    /// Create a new issue without a line number
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            line: None,
        }
    }

    /// Set the 1-based line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    pub fn warn(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warn, code, message)
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, message)
    }
}

/// Classification of a YAML file; selects the structural rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileType {
    Generic,
    DockerCompose,
    GithubActions,
    Kubernetes,
}

impl FileType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::DockerCompose => "docker-compose",
            Self::GithubActions => "github-actions",
            Self::Kubernetes => "kubernetes",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issues found in one scanned file.
///
/// Style issues come first, followed by type-specific issues, both in rule
/// evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    /// Path relative to the scan root, with forward slashes
    pub path: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub issues: Vec<Issue>,
}

impl FileResult {
    pub fn new(path: impl Into<String>, file_type: FileType, issues: Vec<Issue>) -> Self {
        Self {
            path: path.into(),
            file_type,
            issues,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Issue counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub error: usize,
    pub warn: usize,
    pub info: usize,
}

impl Totals {
    /// Count one issue of the given severity
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.error += 1,
            Severity::Warn => self.warn += 1,
            Severity::Info => self.info += 1,
        }
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.error,
            Severity::Warn => self.warn,
            Severity::Info => self.info,
        }
    }

    pub fn total(&self) -> usize {
        self.error + self.warn + self.info
    }

    /// `max(0, 100 - 12*error - 4*warn - info)`
    pub fn score(&self) -> u32 {
        let deduction = [Severity::Error, Severity::Warn, Severity::Info]
            .into_iter()
            .map(|s| (self.get(s) as u64).saturating_mul(u64::from(s.weight())))
            .fold(0u64, u64::saturating_add);

        u64::from(MAX_SCORE).saturating_sub(deduction) as u32
    }
}

/// Aggregate result of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Absolute, resolved scan root
    pub root: String,
    /// Files in enumeration order
    pub files: Vec<FileResult>,
    pub totals: Totals,
    pub score: u32,
}

impl ScanResult {
    /// Build the aggregate from per-file results, computing totals and score
    pub fn from_files(root: impl Into<String>, files: Vec<FileResult>) -> Self {
        let mut totals = Totals::default();
        for issue in files.iter().flat_map(|f| f.issues.iter()) {
            totals.record(issue.severity);
        }

        Self {
            root: root.into(),
            files,
            score: totals.score(),
            totals,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.totals.total() == 0
    }
}
