//! # CLI Module
//!
//! Command-line interface for yaml-doctor using `clap`.
//!
//! ## Submodules
//!
//! - [`commands`] - The scan command
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Report output formatters (JSON, HTML, badge, terminal)
//!
//! ## Examples
//!
//! ```bash
//! # Scan the current directory and write the three reports next to it
//! yaml-doctor
//!
//! # Print the JSON result of another directory to stdout
//! yaml-doctor --path ./deploy --json
//!
//! # Fail a CI job below 80 points
//! yaml-doctor --min-score 80 --no-html --no-badge
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

use commands::ScanArgs;

/// yaml-doctor - Static analysis for Kubernetes manifests, Docker Compose files and GitHub Actions workflows
#[derive(Parser, Debug)]
#[command(name = "yaml-doctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file (defaults to .yaml-doctor.toml in the scan root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub scan: ScanArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["yaml-doctor"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        assert_eq!(cli.scan.path, PathBuf::from("."));
        assert!(!cli.scan.json);
        assert!(cli.scan.ignore.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "yaml-doctor",
            "-vv",
            "--config",
            "ci.toml",
            "--path",
            "deploy",
            "--json",
            "-o",
            "out",
            "--no-html",
            "--ignore",
            "**/a/**",
            "--ignore",
            "**/b/**",
            "--jobs",
            "3",
            "--min-score",
            "75",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
        assert_eq!(cli.scan.path, PathBuf::from("deploy"));
        assert!(cli.scan.json);
        assert_eq!(cli.scan.output_dir, Some(PathBuf::from("out")));
        assert!(cli.scan.no_html);
        assert!(!cli.scan.no_json);
        assert_eq!(
            cli.scan.ignore,
            Some(vec!["**/a/**".to_string(), "**/b/**".to_string()])
        );
        assert_eq!(cli.scan.jobs, Some(3));
        assert_eq!(cli.scan.min_score, Some(75));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(Cli::try_parse_from(["yaml-doctor", "--jobs", "0"]).is_err());
        assert!(Cli::try_parse_from(["yaml-doctor", "--min-score", "101"]).is_err());
    }
}
