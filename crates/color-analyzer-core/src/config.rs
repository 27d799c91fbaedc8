use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};

const CONFIG_FILE: &str = ".color-analyzer.toml";

/// File extensions scanned by default
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".css", ".scss", ".less", ".styl", ".tsx", ".jsx", ".js", ".ts",
];

/// Directory names skipped by default when walking a tree
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "node_modules"];

const DEFAULT_WATCH_INTERVAL_MS: u64 = 1000;

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# css-color-analyzer configuration file
# Location: .color-analyzer.toml in the directory you run from

[scan]
# File extensions to analyze (case-insensitive)
extensions = [".css", ".scss", ".less", ".styl", ".tsx", ".jsx", ".js", ".ts"]

# Directory names to skip when walking a tree
# Example: exclude = [".git", "node_modules", "dist"]
exclude = [".git", "node_modules"]

# Glob patterns matched against paths relative to the scanned directory
# Example: ignore = ["**/*.min.css", "vendor/**"]
ignore = []

[output]
# Indent the JSON report
pretty = false

[watch]
# Polling interval for --watch, in milliseconds
interval_ms = 1000
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

/// Which files are collected
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Extensions to analyze, with leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names to exclude (checked against path components)
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Glob patterns for relative paths to skip
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
            ignore: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Check whether a file has one of the configured extensions
    pub fn has_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
        self.extensions.iter().any(|e| e.to_lowercase() == ext)
    }
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

/// Watch mode settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    DEFAULT_WATCH_INTERVAL_MS
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_WATCH_INTERVAL_MS,
        }
    }
}

impl WatchConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Config {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::path(dir);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(&path)
    }

    /// Load config from an explicit file path
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| AnalyzerError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Get config file path
    pub fn path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    ///
    /// An existing file is left untouched.
    pub fn init(dir: &Path) -> Result<PathBuf> {
        let path = Self::path(dir);
        fs::create_dir_all(dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }
}
