//! # Color Analyzer Core
//!
//! Finds every color literal in style sheets, markup and scripts, merges
//! different spellings of the same color, and groups the results by hue
//! family.
//!
//! ```rust
//! use color_analyzer_core::{analyze, build, Category, Source};
//!
//! let registry = analyze(vec![Source::text("a.css", "a { color: #F00; } b { color: red; }")]);
//! let report = build(&registry);
//!
//! let reds = report.get(Category::Red).unwrap();
//! assert_eq!(reds[0].count(), 2);
//! ```

pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod source;
pub mod watch;

pub use color::{
    categorize, normalize, parse_literal, scan, CanonicalColor, Category, ColorFormat,
    ColorLiteral, Rgb,
};
pub use config::Config;
pub use engine::{
    analyze, analyze_parallel, build, ColorRecord, ExcludedInput, Registry, Report, Source,
};
pub use error::{AnalyzerError, Result};
pub use source::{collect_dir, collect_file, read_source, read_sources};
pub use watch::ChangeDetector;
