//! Scan command - Analyze a directory and write the reports

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::ScanArgs;
use crate::cli::exit_codes;
use crate::cli::output::{
    BadgeSvg, HtmlReport, JsonOutput, ReportRenderer, TerminalOutput, BADGE_FILE,
    HTML_REPORT_FILE, JSON_REPORT_FILE,
};
use crate::config::Config;
use crate::error::{DoctorError, ReportError, ScanError};
use crate::rules::results::ScanResult;
use crate::scanner::{self, ScanOptions};

/// Effective settings after merging the config file with the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub options: ScanOptions,
    pub write_json: bool,
    pub write_html: bool,
    pub write_badge: bool,
    pub min_score: Option<u32>,
}

impl ScanSettings {
    /// Command-line values win over the config file
    pub fn resolve(args: &ScanArgs, config: &Config) -> Self {
        let mut options = config.scan_options();
        if let Some(ignore) = &args.ignore {
            options.ignore_patterns = ignore.clone();
        }
        if let Some(jobs) = args.jobs {
            options.jobs = Some(usize::try_from(jobs).unwrap_or(usize::MAX));
        }

        Self {
            options,
            write_json: config.output.json && !args.no_json,
            write_html: config.output.html && !args.no_html,
            write_badge: config.output.badge && !args.no_badge,
            min_score: args.min_score.or(config.min_score),
        }
    }

    /// Exit code for a finished scan
    pub fn exit_code(&self, result: &ScanResult) -> i32 {
        match self.min_score {
            Some(min) if result.score < min => exit_codes::BELOW_MIN_SCORE,
            _ => exit_codes::SUCCESS,
        }
    }
}

pub async fn execute(args: ScanArgs, config_path: Option<PathBuf>) -> Result<i32, DoctorError> {
    // Load configuration
    let config = match &config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(&args.path)?,
    };
    let settings = ScanSettings::resolve(&args, &config);
    debug!(?settings, "Resolved scan settings");

    let terminal = TerminalOutput::new();
    if !args.json {
        let display_root = args.path.canonicalize().unwrap_or_else(|_| args.path.clone());
        print!("{}", terminal.format_scanning(&display_root));
    }

    // Rule evaluation is CPU-bound and runs on its own pool
    let root = args.path.clone();
    let options = settings.options.clone();
    let result = tokio::task::spawn_blocking(move || scanner::scan(&root, options))
        .await
        .map_err(|e| ScanError::Task(e.to_string()))??;

    if args.json {
        println!("{}", JsonOutput::new().render_report(&result)?);
        return Ok(settings.exit_code(&result));
    }

    print!("{}", terminal.render_report(&result)?);

    let report_dir = report_dir(&args, &config, Path::new(&result.root));
    let generated = write_reports(&report_dir, &settings, &result).await?;
    if !generated.is_empty() {
        print!("{}", terminal.format_generated(&generated));
    }

    Ok(settings.exit_code(&result))
}

/// `--output-dir` as given, else the configured directory relative to the
/// scan root, else the scan root itself
fn report_dir(args: &ScanArgs, config: &Config, root: &Path) -> PathBuf {
    match (&args.output_dir, &config.output.dir) {
        (Some(dir), _) => dir.clone(),
        (None, Some(dir)) => root.join(dir),
        (None, None) => root.to_path_buf(),
    }
}

/// Render the enabled reports and write them into `dir`
async fn write_reports(
    dir: &Path,
    settings: &ScanSettings,
    result: &ScanResult,
) -> Result<Vec<PathBuf>, DoctorError> {
    let mut reports: Vec<(&str, Box<dyn ReportRenderer + Send>)> = Vec::new();
    if settings.write_json {
        reports.push((JSON_REPORT_FILE, Box::new(JsonOutput::new())));
    }
    if settings.write_html {
        reports.push((HTML_REPORT_FILE, Box::new(HtmlReport::new())));
    }
    if settings.write_badge {
        reports.push((BADGE_FILE, Box::new(BadgeSvg::new())));
    }

    if reports.is_empty() {
        return Ok(Vec::new());
    }

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| ReportError::FileWrite {
            path: dir.display().to_string(),
            source: e,
        })?;

    let mut written = Vec::with_capacity(reports.len());
    for (file_name, renderer) in reports {
        let content = renderer.render_report(result)?;
        let path = dir.join(file_name);

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| ReportError::FileWrite {
                path: path.display().to_string(),
                source: e,
            })?;

        info!(path = %path.display(), "Report written");
        written.push(path);
    }

    Ok(written)
}
