//! Rules evaluation engine
//!
//! Runs the full rule pipeline on the text of one file: style rules on the
//! raw text, then parsing, type detection and the structural rule set that
//! matches the detected type.

use tracing::debug;

use super::categories::{compose, kubernetes, style, workflows};
use super::detect::detect_type;
use super::results::{FileResult, FileType, Issue};
use crate::document::{self, Node};

/// Run the structural rule set for `file_type`. Generic files have none.
pub fn check_document(file_type: FileType, root: &Node) -> Vec<Issue> {
    match file_type {
        FileType::Generic => Vec::new(),
        FileType::DockerCompose => compose::check(root),
        FileType::GithubActions => workflows::check(root),
        FileType::Kubernetes => kubernetes::check(root),
    }
}

/// Evaluate one file.
///
/// `path` is the forward-slash path relative to the scan root. A document
/// that fails to parse gets a single `yaml.parse` error after its style
/// issues and is reported as generic.
pub fn evaluate(path: &str, text: &str) -> FileResult {
    let mut issues = style::check(text);

    let file_type = match document::parse(text) {
        Ok(root) => {
            let file_type = detect_type(path, &root);
            let found = check_document(file_type, &root);
            debug!(
                path,
                file_type = file_type.as_str(),
                style_issues = issues.len(),
                rule_issues = found.len(),
                "Evaluated file"
            );
            issues.extend(found);
            file_type
        }
        Err(e) => {
            debug!(path, error = %e, "YAML parse failed");
            issues.push(Issue::error(
                "yaml.parse",
                format!("Error parsing YAML: {}", e),
            ));
            FileType::Generic
        }
    };

    FileResult::new(path, file_type, issues)
}
