use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Input is not a file: {path}")]
    InputNotFile { path: PathBuf },

    #[error("Directory does not exist: {path}")]
    DirNotFound { path: PathBuf },

    #[error("No files found to analyze")]
    NoFiles,

    #[error("Could not read {location}: {source}")]
    Unreadable {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid ignore pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

impl AnalyzerError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFile { .. } => 2,
            Self::DirNotFound { .. } => 3,
            Self::NoFiles => 4,
            Self::ConfigParse { .. } | Self::Pattern(_) => 5,
            _ => 1,
        }
    }
}
