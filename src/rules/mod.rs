//! Rules module - YAML rules and evaluation engine

pub mod categories;
pub mod containers;
pub mod detect;
pub mod engine;
pub mod results;

pub use results::{FileResult, FileType, Issue, ScanResult, Severity, Totals};
