//! Style rules
//!
//! Line-oriented checks on the raw text of every YAML file, run before the
//! file is parsed so they also apply to files that fail to parse:
//! - Tab characters (`style.tabs`)
//! - Trailing whitespace (`style.trailingSpace`)
//! - Lines longer than [`MAX_LINE_LENGTH`] characters (`style.lineLength`)

use crate::rules::results::Issue;

/// Longest accepted line, in characters, excluding the terminator
pub const MAX_LINE_LENGTH: usize = 160;

/// Run every style check on `text`.
///
/// Lines are split on `\n` with one optional preceding `\r` removed and are
/// numbered from 1. A `\r` at the very end of the text is not followed by a
/// `\n`, so it stays part of the last line. A line may produce several issues.
pub fn check(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let segments: Vec<&str> = text.split('\n').collect();
    let last = segments.len() - 1;

    for (index, raw) in segments.into_iter().enumerate() {
        let line = if index < last {
            raw.strip_suffix('\r').unwrap_or(raw)
        } else {
            raw
        };
        let line_number = index + 1;

        if line.contains('\t') {
            issues.push(Issue::warn("style.tabs", "Tab found (use spaces)").with_line(line_number));
        }

        if line.chars().next_back().is_some_and(char::is_whitespace) {
            issues.push(
                Issue::info("style.trailingSpace", "Trailing whitespace at end of line")
                    .with_line(line_number),
            );
        }

        if line.chars().count() > MAX_LINE_LENGTH {
            issues.push(
                Issue::info(
                    "style.lineLength",
                    format!("Line with >{} columns", MAX_LINE_LENGTH),
                )
                .with_line(line_number),
            );
        }
    }

    issues
}
