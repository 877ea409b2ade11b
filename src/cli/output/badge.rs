//! SVG score badge

use crate::error::DoctorError;

use super::ReportRenderer;
use crate::rules::results::ScanResult;

const LABEL: &str = "yaml-doctor";
const LABEL_WIDTH: u32 = 88;
const VALUE_WIDTH: u32 = 62;

/// Shields-style badge showing `score/100`
pub struct BadgeSvg;

impl BadgeSvg {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, score: u32) -> String {
        let color = badge_color(score);
        let value = format!("{}/100", score);
        let width = LABEL_WIDTH + VALUE_WIDTH;

        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="20" role="img" aria-label="{label}: {value}">
  <linearGradient id="s" x2="0" y2="100%"><stop offset="0" stop-color="#bbb" stop-opacity=".1"/><stop offset="1" stop-opacity=".1"/></linearGradient>
  <rect rx="3" width="{width}" height="20" fill="#555"/>
  <rect rx="3" x="{lw}" width="{vw}" height="20" fill="{color}"/>
  <path fill="{color}" d="M{lw} 0h4v20h-4z"/>
  <rect rx="3" width="{width}" height="20" fill="url(#s)"/>
  <g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,DejaVu Sans,sans-serif" font-size="11">
    <text x="{label_x}" y="14">{label}</text>
    <text x="{value_x}" y="14">{value}</text>
  </g>
</svg>"##,
            width = width,
            label = LABEL,
            value = value,
            lw = LABEL_WIDTH,
            vw = VALUE_WIDTH,
            color = color,
            label_x = LABEL_WIDTH / 2,
            value_x = LABEL_WIDTH + VALUE_WIDTH / 2,
        )
    }
}

impl Default for BadgeSvg {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for BadgeSvg {
    fn render_report(&self, result: &ScanResult) -> Result<String, DoctorError> {
        Ok(self.render(result.score))
    }
}

/// Green from 90, yellow from 75, red below
pub fn badge_color(score: u32) -> &'static str {
    if score >= 90 {
        "#2ebc4f"
    } else if score >= 75 {
        "#dfb317"
    } else {
        "#e05d44"
    }
}
