//! yaml-doctor Library
//!
//! Static analysis for the YAML files of a directory tree. Every `*.yml` /
//! `*.yaml` file is parsed, classified as a Kubernetes manifest, a Docker
//! Compose file, a GitHub Actions workflow or generic YAML, and checked by the
//! rules for its type plus a set of text style rules. The findings are
//! aggregated into a [`ScanResult`] with a 0..=100 quality score.
//!
//! ```rust,no_run
//! use yaml_doctor::{scan, ScanOptions};
//!
//! let result = scan("./deploy", ScanOptions::default())?;
//! println!("score: {}/100", result.score);
//! # Ok::<(), yaml_doctor::DoctorError>(())
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod rules;
pub mod scanner;

pub use error::DoctorError;
pub use rules::{FileResult, FileType, Issue, ScanResult, Severity, Totals};
pub use scanner::{scan, ScanOptions, Scanner};
