//! Exit codes for the CLI
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | Scan completed, score at or above the threshold |
//! | 1 | `BELOW_MIN_SCORE` | Threshold missed | `--min-score 90` with a score of 84 |
//! | 2 | `ERROR` | Runtime error | Missing scan root, invalid config, unwritable report |

/// Scan completed.
///
/// Issues inside YAML files do not change the exit code on their own; use
/// `--min-score` to gate on them.
pub const SUCCESS: i32 = 0;

/// The score is below the configured `min_score`.
pub const BELOW_MIN_SCORE: i32 = 1;

/// Runtime error (scan root missing, invalid configuration or ignore glob,
/// report not writable).
pub const ERROR: i32 = 2;
