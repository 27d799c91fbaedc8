//! Running registry of colors keyed by canonical identity.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::color::{
    categorize, normalize, parse_literal, CanonicalColor, Category, ColorFormat, ColorLiteral,
};

/// Everything known about one canonical color.
///
/// Serializes with the field names consumers of the JSON report rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorRecord {
    name: CanonicalColor,
    count: usize,
    variations: BTreeSet<String>,
    unique: bool,
    color_format: ColorFormat,
    category: Category,
    locations: BTreeSet<String>,
}

impl ColorRecord {
    fn new(name: CanonicalColor, color_format: ColorFormat) -> Self {
        Self {
            name,
            count: 0,
            variations: BTreeSet::new(),
            unique: true,
            color_format,
            category: categorize(name),
            locations: BTreeSet::new(),
        }
    }

    fn observe(&mut self, raw: &str, location: &str) {
        self.count += 1;
        self.unique = self.count == 1;
        if !self.variations.contains(raw) {
            self.variations.insert(raw.to_string());
        }
        if !self.locations.contains(location) {
            self.locations.insert(location.to_string());
        }
    }

    pub fn name(&self) -> CanonicalColor {
        self.name
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Distinct raw spellings, sorted.
    pub fn variations(&self) -> impl Iterator<Item = &str> {
        self.variations.iter().map(String::as_str)
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Format of the first literal seen for this color.
    pub fn color_format(&self) -> ColorFormat {
        self.color_format
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Distinct locations, sorted.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(String::as_str)
    }
}

/// An input left out of the run because its text could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedInput {
    pub location: String,
    pub reason: String,
}

/// Color occurrence ready to be merged.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sighting<'t> {
    pub color: CanonicalColor,
    pub raw: &'t str,
    pub format: ColorFormat,
}

impl<'t> From<ColorLiteral<'t>> for Sighting<'t> {
    fn from(literal: ColorLiteral<'t>) -> Self {
        Self {
            color: normalize(&literal),
            raw: literal.raw,
            format: literal.format,
        }
    }
}

/// Mapping from canonical color to its record, scoped to one analysis run.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    colors: BTreeMap<CanonicalColor, ColorRecord>,
    excluded: Vec<ExcludedInput>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `literal` at `location`.
    pub fn record(&mut self, literal: ColorLiteral<'_>, location: &str) {
        self.merge(Sighting::from(literal), location);
    }

    pub(crate) fn merge(&mut self, sighting: Sighting<'_>, location: &str) {
        self.colors
            .entry(sighting.color)
            .or_insert_with(|| ColorRecord::new(sighting.color, sighting.format))
            .observe(sighting.raw, location);
    }

    /// Note an input that contributed nothing because it could not be read.
    pub fn exclude(&mut self, location: impl Into<String>, reason: impl Into<String>) {
        self.excluded.push(ExcludedInput {
            location: location.into(),
            reason: reason.into(),
        });
    }

    pub fn get(&self, color: CanonicalColor) -> Option<&ColorRecord> {
        self.colors.get(&color)
    }

    /// Look up a record by any literal spelling of its color (`"#0a40ff"`,
    /// `"red"`, `"rgb(0,0,255)"`).
    pub fn find(&self, literal: &str) -> Option<&ColorRecord> {
        let literal = parse_literal(literal)?;
        self.get(normalize(&literal))
    }

    /// Records in canonical color order.
    pub fn records(&self) -> impl Iterator<Item = &ColorRecord> {
        self.colors.values()
    }

    pub fn excluded(&self) -> &[ExcludedInput] {
        &self.excluded
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Total matched literals across all records.
    pub fn occurrences(&self) -> usize {
        self.colors.values().map(|r| r.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_all(registry: &mut Registry, raws: &[&str], location: &str) {
        for raw in raws {
            registry.record(parse_literal(raw).unwrap(), location);
        }
    }

    #[test]
    fn test_first_sighting_creates_record() {
        let mut registry = Registry::new();
        record_all(&mut registry, &["rgb(255, 0, 0)"], "a.css");

        let record = registry.find("red").unwrap();
        assert_eq!(record.name().to_string(), "#ff0000");
        assert_eq!(record.count(), 1);
        assert!(record.is_unique());
        assert_eq!(record.color_format(), ColorFormat::Rgb);
        assert_eq!(record.category(), Category::Red);
        assert_eq!(record.locations().collect::<Vec<_>>(), vec!["a.css"]);
    }

    #[test]
    fn test_repeats_count_but_do_not_grow_sets() {
        let mut registry = Registry::new();
        record_all(&mut registry, &["#fff", "#fff", "white"], "a.css");
        record_all(&mut registry, &["#fff"], "a.css");

        let record = registry.find("#ffffff").unwrap();
        assert_eq!(record.count(), 4);
        assert!(!record.is_unique());
        assert_eq!(record.variations().collect::<Vec<_>>(), vec!["#fff", "white"]);
        assert_eq!(record.locations().count(), 1);
        assert_eq!(record.color_format(), ColorFormat::Hex);
    }

    #[test]
    fn test_format_is_taken_from_first_literal() {
        let mut registry = Registry::new();
        record_all(&mut registry, &["navy", "#000080"], "a.css");
        assert_eq!(registry.find("navy").unwrap().color_format(), ColorFormat::Named);
    }

    #[test]
    fn test_occurrences_and_len() {
        let mut registry = Registry::new();
        record_all(&mut registry, &["red", "blue", "#00f"], "a.css");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.occurrences(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_exclude_keeps_records_untouched() {
        let mut registry = Registry::new();
        registry.exclude("broken.css", "invalid UTF-8");
        assert!(registry.is_empty());
        assert_eq!(
            registry.excluded(),
            &[ExcludedInput {
                location: "broken.css".to_string(),
                reason: "invalid UTF-8".to_string(),
            }]
        );
    }

    #[test]
    fn test_find_unknown() {
        let registry = Registry::new();
        assert!(registry.find("red").is_none());
        assert!(registry.find("not a color").is_none());
    }
}
