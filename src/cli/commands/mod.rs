//! CLI commands module

pub mod scan;

use clap::Args;
use std::path::PathBuf;

/// Arguments for a scan
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Print the JSON result to stdout and write no report files
    #[arg(long)]
    pub json: bool,

    /// Directory receiving the reports (defaults to the scan root)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not write yaml-doctor-report.json
    #[arg(long)]
    pub no_json: bool,

    /// Do not write yaml-doctor-report.html
    #[arg(long)]
    pub no_html: bool,

    /// Do not write yaml-doctor-badge.svg
    #[arg(long)]
    pub no_badge: bool,

    /// Ignore glob replacing the default list (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub ignore: Option<Vec<String>>,

    /// Maximum number of worker threads
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub jobs: Option<u64>,

    /// Exit with code 1 when the score is below this value
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub min_score: Option<u32>,
}
