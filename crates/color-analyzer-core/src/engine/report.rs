//! Category-grouped view of a registry.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::color::Category;
use crate::error::Result;

use super::registry::{ColorRecord, Registry};

/// Records grouped by category.
///
/// Categories appear in [`Category`] declaration order and only when they
/// hold at least one record. Within a category records are sorted by
/// `count` descending, then by name ascending.
///
/// Serializes as a JSON object of category name to record array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    categories: BTreeMap<Category, Vec<ColorRecord>>,
}

impl Report {
    pub fn build(registry: &Registry) -> Self {
        let mut categories: BTreeMap<Category, Vec<ColorRecord>> = BTreeMap::new();
        for record in registry.records() {
            categories
                .entry(record.category())
                .or_default()
                .push(record.clone());
        }

        for records in categories.values_mut() {
            records.sort_by(|a, b| {
                b.count()
                    .cmp(&a.count())
                    .then_with(|| a.name().cmp(&b.name()))
            });
        }

        Self { categories }
    }

    pub fn get(&self, category: Category) -> Option<&[ColorRecord]> {
        self.categories.get(&category).map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = (Category, &[ColorRecord])> {
        self.categories.iter().map(|(c, r)| (*c, r.as_slice()))
    }

    /// Number of distinct colors in the report.
    pub fn color_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Render as JSON, two-space indented when `pretty`.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Group a registry into a [`Report`].
pub fn build(registry: &Registry) -> Report {
    Report::build(registry)
}
