//! Output formatting module for CLI

mod badge;
mod html;
pub mod json;
mod terminal;

pub use badge::{badge_color, BadgeSvg};
pub use html::HtmlReport;
pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use crate::error::DoctorError;
use crate::rules::results::ScanResult;

/// File name of the JSON report
pub const JSON_REPORT_FILE: &str = "yaml-doctor-report.json";
/// File name of the HTML report
pub const HTML_REPORT_FILE: &str = "yaml-doctor-report.html";
/// File name of the SVG badge
pub const BADGE_FILE: &str = "yaml-doctor-badge.svg";

/// Trait for rendering a finished scan
pub trait ReportRenderer {
    fn render_report(&self, result: &ScanResult) -> Result<String, DoctorError>;
}
