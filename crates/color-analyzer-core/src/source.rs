//! File collection and reading.
//!
//! Resolves user-supplied paths into the `(text, location)` inputs the engine
//! consumes. Location identifiers are paths as reached from the argument the
//! user gave, e.g. `src/styles/app.css` for `-d src/styles`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;
use crate::engine::Source;
use crate::error::{AnalyzerError, Result};

/// Validate a single input file
pub fn collect_file(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(AnalyzerError::InputNotFile {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}

/// Recursively collect files under `root` that match the scan config
///
/// Excluded directories are pruned, ignore globs are matched against the
/// path relative to `root`. The result is sorted.
pub fn collect_dir(root: &Path, scan: &ScanConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(AnalyzerError::DirNotFound {
            path: root.to_path_buf(),
        });
    }

    let ignore = scan
        .ignore
        .iter()
        .map(|p| Pattern::new(p))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, scan));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !scan.has_extension(path) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if ignore.iter().any(|p| p.matches_path(relative)) {
            debug!(path = %relative.display(), "ignored by pattern");
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn is_excluded_dir(entry: &DirEntry, scan: &ScanConfig) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    scan.exclude.iter().any(|d| d == name.as_ref())
}

/// Location identifier for a collected path
pub fn location_of(path: &Path) -> String {
    let trimmed: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    trimmed.display().to_string()
}

/// Read one file into an engine input
///
/// Read failures (missing file, invalid UTF-8, permissions) become
/// [`Source::Unreadable`] so the rest of the run can proceed.
pub fn read_source(path: &Path) -> Source {
    let location = location_of(path);
    match fs::read_to_string(path) {
        Ok(text) => Source::text(location, text),
        Err(source) => {
            let error = AnalyzerError::Unreadable {
                location: location.clone(),
                source,
            };
            Source::unreadable(location, error)
        }
    }
}

/// Read every path into engine inputs, preserving order
pub fn read_sources(paths: &[PathBuf]) -> Vec<Source> {
    paths.iter().map(|p| read_source(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| {
                f.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_collect_dir_filters_extensions() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b.scss", "");
        touch(temp.path(), "a.css", "");
        touch(temp.path(), "nested/c.TSX", "");
        touch(temp.path(), "README.md", "");

        let files = collect_dir(temp.path(), &ScanConfig::default()).unwrap();
        assert_eq!(
            relative_names(temp.path(), &files),
            vec!["a.css", "b.scss", "nested/c.TSX"]
        );
    }

    #[test]
    fn test_collect_dir_prunes_excluded_dirs() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "node_modules/lib/index.js", "");
        touch(temp.path(), ".git/hooks/x.js", "");
        touch(temp.path(), "src/app.js", "");

        let files = collect_dir(temp.path(), &ScanConfig::default()).unwrap();
        assert_eq!(relative_names(temp.path(), &files), vec!["src/app.js"]);
    }

    #[test]
    fn test_collect_dir_ignore_patterns() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "dist/app.min.css", "");
        touch(temp.path(), "src/app.css", "");
        touch(temp.path(), "vendor/lib.css", "");

        let scan = ScanConfig {
            ignore: vec!["**/*.min.css".to_string(), "vendor/*".to_string()],
            ..ScanConfig::default()
        };
        let files = collect_dir(temp.path(), &scan).unwrap();
        assert_eq!(relative_names(temp.path(), &files), vec!["src/app.css"]);
    }

    #[test]
    fn test_collect_dir_invalid_pattern() {
        let temp = TempDir::new().unwrap();
        let scan = ScanConfig {
            ignore: vec!["[".to_string()],
            ..ScanConfig::default()
        };
        assert!(matches!(
            collect_dir(temp.path(), &scan),
            Err(AnalyzerError::Pattern(_))
        ));
    }

    #[test]
    fn test_collect_dir_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        assert!(matches!(
            collect_dir(&missing, &ScanConfig::default()),
            Err(AnalyzerError::DirNotFound { .. })
        ));
    }

    #[test]
    fn test_collect_file() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "style.css", "");
        assert!(collect_file(&temp.path().join("style.css")).is_ok());
        assert!(matches!(
            collect_file(temp.path()),
            Err(AnalyzerError::InputNotFile { .. })
        ));
    }

    #[test]
    fn test_location_strips_current_dir() {
        assert_eq!(location_of(Path::new("./a.css")), "a.css");
        assert_eq!(
            location_of(Path::new("styles/a.css")),
            Path::new("styles/a.css").display().to_string()
        );
    }

    #[test]
    fn test_read_source_text_and_unreadable() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "ok.css", "color: red;");
        fs::write(temp.path().join("bad.css"), [0xff, 0xfe, 0x00]).unwrap();

        let sources = read_sources(&[temp.path().join("ok.css"), temp.path().join("bad.css")]);
        assert!(matches!(&sources[0], Source::Text { text, .. } if text == "color: red;"));
        assert!(matches!(&sources[1], Source::Unreadable { .. }));
        assert!(sources[1].location().ends_with("bad.css"));
    }
}
