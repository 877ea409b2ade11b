//! JSON output formatting

use crate::error::DoctorError;

use super::ReportRenderer;
use crate::rules::results::ScanResult;

/// Pretty-printed [`ScanResult`], field for field
pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, result: &ScanResult) -> Result<String, DoctorError> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}
