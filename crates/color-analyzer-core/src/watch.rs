//! Modification-time polling for watch mode.
//!
//! The engine itself has no notion of change: callers poll a
//! [`ChangeDetector`] and re-run the whole analysis when it reports a change.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

/// Tracks the last seen modification time of a fixed set of files.
#[derive(Debug, Clone)]
pub struct ChangeDetector {
    mtimes: BTreeMap<PathBuf, SystemTime>,
}

fn mtime(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

impl ChangeDetector {
    /// Snapshot the current modification times. Missing files count as
    /// never modified.
    pub fn new(files: &[PathBuf]) -> Self {
        let mtimes = files.iter().map(|f| (f.clone(), mtime(f))).collect();
        Self { mtimes }
    }

    /// Return true if any file was modified since the last poll.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for (path, last) in self.mtimes.iter_mut() {
            let current = mtime(path);
            if current > *last {
                debug!(path = %path.display(), "file changed");
                *last = current;
                changed = true;
            }
        }
        changed
    }

    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.mtimes.keys().map(PathBuf::as_path)
    }
}
