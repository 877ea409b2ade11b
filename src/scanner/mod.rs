//! Scanner module - drives the rule pipeline over a directory tree
//!
//! The scanner lists YAML files through a [`FileSource`], evaluates every
//! file in parallel, and aggregates the per-file results into a
//! [`ScanResult`] in enumeration order.

mod filesystem;

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

pub use filesystem::{relative_path, FileSource, FsSource};

use crate::error::DoctorError;
use crate::rules::engine;
use crate::rules::results::{FileResult, ScanResult};

/// Globs excluded from every scan unless overridden
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "**/node_modules/**",
    "**/.git/**",
    "**/vendor/**",
    "**/target/**",
    "**/bin/**",
];

/// Per-scan options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Globs matched against forward-slash relative paths
    pub ignore_patterns: Vec<String>,
    /// Upper bound on worker threads; defaults to the available parallelism
    pub jobs: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            jobs: None,
        }
    }
}

impl ScanOptions {
    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }
}

/// Main scanner
pub struct Scanner {
    options: ScanOptions,
    source: Box<dyn FileSource>,
}

impl Scanner {
    /// Create a scanner reading from the local file system
    pub fn new(options: ScanOptions) -> Result<Self, DoctorError> {
        let source = FsSource::new(&options.ignore_patterns)?;
        Ok(Self::with_source(options, source))
    }

    /// Create a scanner over a custom file source
    pub fn with_source(options: ScanOptions, source: impl FileSource + 'static) -> Self {
        Self {
            options,
            source: Box::new(source),
        }
    }

    /// Scan every YAML file under `root`.
    ///
    /// Unreadable files are skipped. Enumeration failures abort the scan.
    pub fn scan(&self, root: &Path) -> Result<ScanResult, DoctorError> {
        let started = Instant::now();
        let root = self.source.resolve_root(root)?;
        let files = self.source.list_yaml_files(&root)?;

        debug!(root = %root.display(), candidates = files.len(), "Listed YAML files");

        let results = self.evaluate_all(&root, &files);
        let result = ScanResult::from_files(root.display().to_string(), results);

        info!(
            files = result.files.len(),
            errors = result.totals.error,
            warnings = result.totals.warn,
            info = result.totals.info,
            score = result.score,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Scan complete"
        );

        Ok(result)
    }

    fn evaluate_all(&self, root: &Path, files: &[PathBuf]) -> Vec<FileResult> {
        let workers = self
            .options
            .jobs
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .min(files.len())
            .max(1);

        let run = || {
            files
                .par_iter()
                .filter_map(|path| self.evaluate_file(root, path))
                .collect::<Vec<_>>()
        };

        match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                warn!(error = %e, "Falling back to the global thread pool");
                run()
            }
        }
    }

    fn evaluate_file(&self, root: &Path, path: &Path) -> Option<FileResult> {
        let relative = relative_path(root, path);

        let Some(text) = self.source.read_text(path) else {
            debug!(path = %relative, "Skipping unreadable file");
            return None;
        };

        Some(engine::evaluate(&relative, &text))
    }
}

/// Scan `root` with the given options using the local file system
pub fn scan(root: impl AsRef<Path>, options: ScanOptions) -> Result<ScanResult, DoctorError> {
    Scanner::new(options)?.scan(root.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use crate::rules::results::FileType;
    use std::collections::BTreeMap;

    /// In-memory file tree; entries with `None` content are unreadable
    struct MemorySource {
        files: BTreeMap<String, Option<String>>,
    }

    impl MemorySource {
        fn new(files: &[(&str, Option<&str>)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(p, c)| (p.to_string(), c.map(str::to_string)))
                    .collect(),
            }
        }
    }

    impl FileSource for MemorySource {
        fn resolve_root(&self, root: &Path) -> Result<PathBuf, ScanError> {
            Ok(root.to_path_buf())
        }

        fn list_yaml_files(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
            Ok(self.files.keys().map(|p| root.join(p)).collect())
        }

        fn read_text(&self, path: &Path) -> Option<String> {
            let key = relative_path(Path::new("/mem"), path);
            self.files.get(&key).cloned().flatten()
        }
    }

    fn scanner(files: &[(&str, Option<&str>)]) -> Scanner {
        Scanner::with_source(ScanOptions::default(), MemorySource::new(files))
    }

    #[test]
    fn test_default_options() {
        let options = ScanOptions::default();
        assert_eq!(options.ignore_patterns.len(), DEFAULT_IGNORE_PATTERNS.len());
        assert!(options.jobs.is_none());
    }

    #[test]
    fn test_scan_aggregates_in_enumeration_order() {
        let scanner = scanner(&[
            ("b/pod.yaml", Some("apiVersion: v1\nkind: Pod\nmetadata:\n  name: p\n")),
            ("a/compose.yml", Some("services:\n  web:\n    image: nginx:latest\n")),
            (".github/workflows/ci.yml", Some("jobs:\n  b:\n    steps:\n      - run: x\n")),
        ]);

        let result = scanner.scan(Path::new("/mem")).unwrap();

        let paths: Vec<_> = result.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec![".github/workflows/ci.yml", "a/compose.yml", "b/pod.yaml"]);
        assert_eq!(result.files[0].file_type, FileType::GithubActions);
        assert_eq!(result.files[1].file_type, FileType::DockerCompose);
        assert_eq!(result.files[2].file_type, FileType::Kubernetes);

        assert_eq!(result.totals.error, 0);
        assert_eq!(result.totals.warn, 2);
        assert_eq!(result.totals.info, 2);
        assert_eq!(result.score, 100 - 8 - 2);
        assert_eq!(result.root, "/mem");
    }

    #[test]
    fn test_unreadable_files_are_skipped() {
        let scanner = scanner(&[("a.yml", None), ("b.yml", Some("x: 1\n"))]);
        let result = scanner.scan(Path::new("/mem")).unwrap();

        assert_eq!(result.files.len(), 1);
        assert_eq!(result.files[0].path, "b.yml");
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_parse_failure_counts_once() {
        let scanner = scanner(&[("bad.yml", Some("key: [oops\n"))]);
        let result = scanner.scan(Path::new("/mem")).unwrap();

        assert_eq!(result.files[0].file_type, FileType::Generic);
        assert_eq!(result.files[0].issues.len(), 1);
        assert_eq!(result.totals.error, 1);
        assert_eq!(result.score, 88);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let files: Vec<(String, Option<String>)> = (0..40)
            .map(|i| {
                (
                    format!("f{:02}.yml", i),
                    Some(format!("services:\n  s{}:\n    image: app:latest\n", i)),
                )
            })
            .collect();
        let borrowed: Vec<(&str, Option<&str>)> = files
            .iter()
            .map(|(p, c)| (p.as_str(), c.as_deref()))
            .collect();

        let sequential = Scanner::with_source(
            ScanOptions::default().with_jobs(1),
            MemorySource::new(&borrowed),
        )
        .scan(Path::new("/mem"))
        .unwrap();
        let parallel = Scanner::with_source(
            ScanOptions::default().with_jobs(8),
            MemorySource::new(&borrowed),
        )
        .scan(Path::new("/mem"))
        .unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(parallel.totals.warn, 40);
        assert_eq!(parallel.score, 0);
    }

    #[test]
    fn test_empty_tree() {
        let result = scanner(&[]).scan(Path::new("/mem")).unwrap();
        assert!(result.files.is_empty());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_invalid_ignore_pattern_fails_construction() {
        let options = ScanOptions::default().with_ignore_patterns(vec!["[".to_string()]);
        assert!(matches!(
            Scanner::new(options),
            Err(DoctorError::Scan(ScanError::InvalidPattern { .. }))
        ));
    }
}
