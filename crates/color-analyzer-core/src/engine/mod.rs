//! # Engine Module
//!
//! Aggregates color occurrences across many inputs.
//!
//! ## Module layout
//!
//! - `analyzer`: [`analyze`] / [`analyze_parallel`], the engine entry points
//! - `registry`: per-color records keyed by canonical identity
//! - `report`: category-grouped, deterministically ordered output
//!
//! ## Example
//!
//! ```rust
//! use color_analyzer_core::engine::{analyze, build, Source};
//!
//! let registry = analyze(vec![
//!     Source::text("a.css", "color: #0a40ff; border: rgb(10,64,255);"),
//!     Source::text("b.css", "background: #0A40FF;"),
//! ]);
//!
//! let record = registry.find("#0a40ff").unwrap();
//! assert_eq!(record.count(), 3);
//! assert_eq!(record.locations().count(), 2);
//!
//! let report = build(&registry);
//! assert_eq!(report.color_count(), 1);
//! ```

mod analyzer;
mod registry;
mod report;

pub use analyzer::{analyze, analyze_parallel, Source};
pub use registry::{ColorRecord, ExcludedInput, Registry};
pub use report::{build, Report};
