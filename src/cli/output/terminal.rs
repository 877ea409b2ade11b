//! Terminal output formatting with colors

use crate::error::DoctorError;
use colored::Colorize;
use std::path::{Path, PathBuf};

use super::ReportRenderer;
use crate::rules::results::{FileResult, Issue, ScanResult, Severity};

const PREFIX: &str = "[yaml-doctor]";

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    pub fn format_scanning(&self, root: &Path) -> String {
        format!("{} Scanning {} ...\n", PREFIX.cyan().bold(), root.display())
    }

    pub fn format_generated(&self, paths: &[PathBuf]) -> String {
        let mut output = format!("{} Generated:\n", PREFIX.cyan().bold());
        for path in paths {
            output.push_str(&format!("  - {}\n", path.display()));
        }
        output
    }

    fn format_files(&self, result: &ScanResult) -> String {
        let mut output = String::new();

        for file in result.files.iter().filter(|f| !f.is_clean()) {
            output.push_str(&self.format_file(file));
        }

        output
    }

    fn format_file(&self, file: &FileResult) -> String {
        let mut output = format!(
            "\n{} {}\n",
            file.path.white().bold(),
            format!("({})", file.file_type).dimmed()
        );

        for issue in &file.issues {
            output.push_str(&self.format_issue(issue));
        }

        output
    }

    fn format_issue(&self, issue: &Issue) -> String {
        let label = format!("{:<5}", issue.severity.as_str());
        let severity = match issue.severity {
            Severity::Error => label.red().bold(),
            Severity::Warn => label.yellow().bold(),
            Severity::Info => label.blue().bold(),
        };

        let mut output = format!("  {} [{}] {}", severity, issue.code.cyan(), issue.message);
        if let Some(line) = issue.line {
            output.push_str(&format!(" {}", format!("(line {})", line).dimmed()));
        }
        output.push('\n');

        output
    }

    fn format_clean(&self, result: &ScanResult) -> String {
        if result.is_clean() {
            format!("\n{}\n", "No issues found.".green())
        } else {
            String::new()
        }
    }

    fn format_summary(&self, result: &ScanResult) -> String {
        let score = result.score.to_string();
        let score = if result.score >= 90 {
            score.green().bold()
        } else if result.score >= 75 {
            score.yellow().bold()
        } else {
            score.red().bold()
        };

        format!(
            "\n{} Score: {}/100 | errors={} warnings={} info={}\n",
            PREFIX.cyan().bold(),
            score,
            result.totals.error,
            result.totals.warn,
            result.totals.info
        )
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, result: &ScanResult) -> Result<String, DoctorError> {
        let mut output = String::new();

        output.push_str(&self.format_files(result));
        output.push_str(&self.format_clean(result));
        output.push_str(&self.format_summary(result));

        Ok(output)
    }
}
