//! Engine entry point: turn a set of inputs into a [`Registry`].

use std::num::NonZeroUsize;
use std::thread;

use tracing::{debug, info, warn};

use crate::color::scan;
use crate::error::AnalyzerError;

use super::registry::{Registry, Sighting};

/// One input handed to the engine by a collaborator.
#[derive(Debug)]
pub enum Source {
    /// Text to scan and the identifier of where it came from
    Text { location: String, text: String },
    /// The collaborator could not produce text for this location
    Unreadable {
        location: String,
        error: AnalyzerError,
    },
}

impl Source {
    pub fn text(location: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Text {
            location: location.into(),
            text: text.into(),
        }
    }

    pub fn unreadable(location: impl Into<String>, error: AnalyzerError) -> Self {
        Self::Unreadable {
            location: location.into(),
            error,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            Self::Text { location, .. } | Self::Unreadable { location, .. } => location,
        }
    }
}

fn sightings(text: &str) -> Vec<Sighting<'_>> {
    scan(text).map(|(literal, _)| Sighting::from(literal)).collect()
}

fn merge_source(registry: &mut Registry, source: &Source, found: Vec<Sighting<'_>>) {
    match source {
        Source::Text { location, .. } => {
            debug!(location = %location, colors = found.len(), "scanned input");
            for sighting in found {
                registry.merge(sighting, location);
            }
        }
        Source::Unreadable { location, error } => {
            warn!(location = %location, error = %error, "excluding unreadable input");
            registry.exclude(location.clone(), error.to_string());
        }
    }
}

fn log_summary(registry: &Registry, inputs: usize) {
    info!(
        inputs,
        colors = registry.len(),
        occurrences = registry.occurrences(),
        excluded = registry.excluded().len(),
        "analysis complete"
    );
}

/// Scan every input and aggregate the colors found.
///
/// Malformed literals are skipped and unreadable inputs are recorded on the
/// registry as excluded; neither aborts the run.
pub fn analyze<I>(sources: I) -> Registry
where
    I: IntoIterator<Item = Source>,
{
    let mut registry = Registry::new();
    let mut inputs = 0;

    for source in sources {
        inputs += 1;
        let found = match &source {
            Source::Text { text, .. } => sightings(text),
            Source::Unreadable { .. } => Vec::new(),
        };
        merge_source(&mut registry, &source, found);
    }

    log_summary(&registry, inputs);
    registry
}

/// Like [`analyze`], but scans inputs on up to `workers` threads.
///
/// Merging happens on the calling thread in input order, so the result is
/// identical to [`analyze`] over the same sources.
pub fn analyze_parallel(sources: &[Source], workers: NonZeroUsize) -> Registry {
    let chunk_size = sources.len().div_ceil(workers.get()).max(1);

    let scanned: Vec<Vec<Sighting<'_>>> = thread::scope(|scope| {
        let handles: Vec<_> = sources
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|source| match source {
                            Source::Text { text, .. } => sightings(text),
                            Source::Unreadable { .. } => Vec::new(),
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(found) => found,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    let mut registry = Registry::new();
    for (source, found) in sources.iter().zip(scanned) {
        merge_source(&mut registry, source, found);
    }

    log_summary(&registry, sources.len());
    registry
}
