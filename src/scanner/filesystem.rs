//! File system access for scans

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::ScanError;

/// Source of the files a scan looks at.
///
/// The scanner only needs an ordered list of candidate YAML files and a way
/// to read them, so tests can substitute an in-memory implementation.
pub trait FileSource: Send + Sync {
    /// Resolve the scan root to an absolute path
    fn resolve_root(&self, root: &Path) -> Result<PathBuf, ScanError> {
        let resolved = root.canonicalize().map_err(|_| ScanError::RootNotFound {
            path: root.display().to_string(),
        })?;

        if !resolved.is_dir() {
            return Err(ScanError::RootNotFound {
                path: root.display().to_string(),
            });
        }

        Ok(resolved)
    }

    /// Absolute paths of the `*.yml` / `*.yaml` files under `root`, sorted
    /// by their path relative to `root`
    fn list_yaml_files(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError>;

    /// File contents, or `None` when the file cannot be read
    fn read_text(&self, path: &Path) -> Option<String>;
}

/// [`FileSource`] backed by the local file system.
///
/// Walks the tree with `ignore`, honouring `.gitignore` and `.ignore` files
/// (also outside git repositories), and drops every file whose relative path
/// matches one of the ignore globs. Hidden directories such as `.github` are
/// walked; `.git` never is.
pub struct FsSource {
    ignore: GlobSet,
}

impl FsSource {
    pub fn new<S: AsRef<str>>(ignore_patterns: &[S]) -> Result<Self, ScanError> {
        Ok(Self {
            ignore: build_globset(ignore_patterns)?,
        })
    }

    fn is_ignored(&self, relative: &str) -> bool {
        self.ignore.is_match(relative)
    }
}

impl FileSource for FsSource {
    fn list_yaml_files(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .ignore(true)
            .parents(true)
            .filter_entry(|entry| entry.file_name() != ".git")
            .build();

        let mut files: Vec<(String, PathBuf)> = Vec::new();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth().unwrap_or(0) == 0 => {
                    return Err(ScanError::Walk {
                        path: root.display().to_string(),
                        source: e,
                    });
                }
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) || !is_yaml(entry.path()) {
                continue;
            }

            let relative = relative_path(root, entry.path());
            if relative.is_empty() || self.is_ignored(&relative) {
                continue;
            }

            files.push((relative, entry.into_path()));
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files.into_iter().map(|(_, path)| path).collect())
    }

    fn read_text(&self, path: &Path) -> Option<String> {
        std::fs::read(path)
            .ok()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Compile ignore globs. `*` does not cross `/`; `**` does.
fn build_globset<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet, ScanError> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| ScanError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        builder.add(glob);
    }

    builder.build().map_err(|source| ScanError::InvalidPattern {
        pattern: patterns
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join(", "),
        source,
    })
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Path of `path` relative to `root`, joined with `/` on every platform
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::DEFAULT_IGNORE_PATTERNS;
    use std::fs;
    use tempfile::tempdir;

    fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files.iter().map(|f| relative_path(root, f)).collect()
    }

    #[test]
    fn test_lists_yaml_files_sorted() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("k8s")).unwrap();
        fs::create_dir_all(root.join(".github/workflows")).unwrap();
        fs::write(root.join("k8s/pod.yaml"), "a: 1").unwrap();
        fs::write(root.join("compose.yml"), "a: 1").unwrap();
        fs::write(root.join(".github/workflows/ci.yml"), "a: 1").unwrap();
        fs::write(root.join("README.md"), "# x").unwrap();
        fs::write(root.join("data.json"), "{}").unwrap();

        let source = FsSource::new(DEFAULT_IGNORE_PATTERNS).unwrap();
        let files = source.list_yaml_files(root).unwrap();

        assert_eq!(
            names(root, &files),
            vec![".github/workflows/ci.yml", "compose.yml", "k8s/pod.yaml"]
        );
    }

    #[test]
    fn test_default_ignores() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        for sub in ["node_modules/pkg", "vendor", "target", "bin", "src"] {
            fs::create_dir_all(root.join(sub)).unwrap();
            fs::write(root.join(sub).join("x.yml"), "a: 1").unwrap();
        }

        let source = FsSource::new(DEFAULT_IGNORE_PATTERNS).unwrap();
        let files = source.list_yaml_files(root).unwrap();

        assert_eq!(names(root, &files), vec!["src/x.yml"]);
    }

    #[test]
    fn test_custom_ignores_replace_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("vendor")).unwrap();
        fs::create_dir_all(root.join("fixtures")).unwrap();
        fs::write(root.join("vendor/a.yml"), "a: 1").unwrap();
        fs::write(root.join("fixtures/b.yml"), "a: 1").unwrap();

        let source = FsSource::new(&["**/fixtures/**"]).unwrap();
        let files = source.list_yaml_files(root).unwrap();

        assert_eq!(names(root, &files), vec!["vendor/a.yml"]);
    }

    #[test]
    fn test_gitignore_is_respected() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::write(root.join(".gitignore"), "generated/\n").unwrap();
        fs::create_dir_all(root.join("generated")).unwrap();
        fs::write(root.join("generated/out.yml"), "a: 1").unwrap();
        fs::write(root.join("keep.yml"), "a: 1").unwrap();

        let source = FsSource::new(DEFAULT_IGNORE_PATTERNS).unwrap();
        let files = source.list_yaml_files(root).unwrap();

        assert_eq!(names(root, &files), vec!["keep.yml"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = FsSource::new(&["a[".to_string()]).err().unwrap();
        assert!(matches!(err, ScanError::InvalidPattern { .. }));
    }

    #[test]
    fn test_resolve_missing_root() {
        let source = FsSource::new(DEFAULT_IGNORE_PATTERNS).unwrap();
        let err = source
            .resolve_root(Path::new("/definitely/not/here"))
            .unwrap_err();
        assert!(matches!(err, ScanError::RootNotFound { .. }));
    }

    #[test]
    fn test_read_text_lossy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bin.yml");
        fs::write(&path, [b'a', b':', b' ', 0xff]).unwrap();

        let source = FsSource::new(DEFAULT_IGNORE_PATTERNS).unwrap();
        assert!(source.read_text(&path).unwrap().starts_with("a: "));
        assert!(source.read_text(&dir.path().join("missing.yml")).is_none());
    }

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let root = Path::new("/repo");
        let path = root.join("a").join("b").join("c.yml");
        assert_eq!(relative_path(root, &path), "a/b/c.yml");
    }
}
