//! Font correction tables.
//!
//! A [`FontCorrectionTable`] maps the text a font's glyph map currently
//! produces to the text it should produce, together with the glyph id the
//! correction was observed on. A [`CorrectionTables`] set holds one table per
//! font name. Tables are immutable once built; the built-in set is loaded once
//! and shared, custom sets can be injected from JSON.

use crate::error::Result;
use crate::fonts::builtin_tables::BUILTIN_TABLES;
use crate::fonts::cmap::CMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Glyph id marking a correction that was never tied to a concrete glyph.
pub const UNCONSTRAINED_GLYPH_ID: i32 = -1;

/// One correction: replacement text and the glyph id it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// Text to emit instead of the observed text
    pub replacement: String,
    /// Glyph id, or [`UNCONSTRAINED_GLYPH_ID`]
    pub glyph_id: i32,
}

impl Correction {
    /// Create a correction.
    pub fn new(replacement: impl Into<String>, glyph_id: i32) -> Self {
        Self {
            replacement: replacement.into(),
            glyph_id,
        }
    }
}

/// Corrections for one font, keyed by observed text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontCorrectionTable {
    entries: IndexMap<String, Correction>,
}

impl FontCorrectionTable {
    /// Build a table from `(observed, replacement, glyph id)` triples.
    ///
    /// When an observed text appears more than once the later entry shadows
    /// the earlier one but keeps its position.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_tei::fonts::FontCorrectionTable;
    ///
    /// let table = FontCorrectionTable::from_entries(
    ///     "Demo",
    ///     [("e", "\u{119}", 101), ("e", "\u{119}", 102)],
    /// );
    /// assert_eq!(table.len(), 1);
    /// assert_eq!(table.get("e").unwrap().glyph_id, 102);
    /// ```
    pub fn from_entries<I, O, R>(name: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (O, R, i32)>,
        O: Into<String>,
        R: Into<String>,
    {
        let mut table = Self::default();
        for (observed, replacement, glyph_id) in entries {
            let observed = observed.into();
            let correction = Correction::new(replacement, glyph_id);
            if let Some(previous) = table.entries.insert(observed.clone(), correction) {
                log::debug!(
                    "Table {}: entry for {:?} (glyph {}) shadowed by a later one",
                    name,
                    observed,
                    previous.glyph_id
                );
            }
        }
        table
    }

    /// Correction for an observed text.
    pub fn get(&self, observed: &str) -> Option<&Correction> {
        self.entries.get(observed)
    }

    /// Replacement for an observed text, or the text itself.
    pub fn replace<'a>(&'a self, observed: &'a str) -> &'a str {
        self.get(observed)
            .map(|c| c.replacement.as_str())
            .unwrap_or(observed)
    }

    /// The table re-keyed by glyph id.
    ///
    /// The observed text is ignored. Unconstrained entries are skipped and a
    /// glyph id listed twice keeps the later replacement.
    pub fn by_glyph_id(&self) -> CMap {
        let mut map = CMap::new();
        for correction in self.entries.values() {
            if let Ok(gid) = u32::try_from(correction.glyph_id) {
                map.insert(gid, correction.replacement.clone());
            }
        }
        map
    }

    /// Iterate over `(observed, correction)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Correction)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

lazy_static::lazy_static! {
    static ref BUILTIN: Arc<CorrectionTables> = Arc::new(CorrectionTables::builtin());
}

/// A set of correction tables keyed by font name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrectionTables {
    tables: IndexMap<String, FontCorrectionTable>,
}

impl CorrectionTables {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the hand-curated table set shipped with the crate.
    pub fn builtin() -> Self {
        let mut tables = Self::new();
        for (name, entries) in BUILTIN_TABLES {
            tables.insert(*name, FontCorrectionTable::from_entries(name, entries.iter().copied()));
        }
        tables
    }

    /// Shared handle on the built-in set, built on first use.
    pub fn shared() -> Arc<CorrectionTables> {
        Arc::clone(&BUILTIN)
    }

    /// Load a table set from JSON.
    ///
    /// The format is `{font: {observed: {"replacement": .., "glyph_id": ..}}}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_tei::fonts::CorrectionTables;
    ///
    /// let json = r#"{"Demo": {"e": {"replacement": "ę", "glyph_id": 101}}}"#;
    /// let tables = CorrectionTables::from_json(json).unwrap();
    /// assert_eq!(tables.get("Demo").unwrap().replace("e"), "\u{119}");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialise the table set to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add or replace the table for `name`.
    pub fn insert(&mut self, name: impl Into<String>, table: FontCorrectionTable) {
        self.tables.insert(name.into(), table);
    }

    /// Table for a font name.
    pub fn get(&self, name: &str) -> Option<&FontCorrectionTable> {
        self.tables.get(name)
    }

    /// Font names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contains_fallback_tables() {
        let tables = CorrectionTables::builtin();
        for name in [
            "TT Special",
            "PSMT Special",
            "Symbol",
            "TimesSonder-Roman",
            "TimesSonder2",
            "TimesSonder3",
            "GriechischMedium",
            "Spezialzeichen",
        ] {
            assert!(tables.get(name).is_some(), "missing {}", name);
        }
    }

    #[test]
    fn test_builtin_keeps_load_order() {
        let tables = CorrectionTables::builtin();
        assert_eq!(tables.names().next(), Some("ATGarSo"));
        assert_eq!(tables.names().last(), Some("WP-MathA"));
    }

    #[test]
    fn test_duplicate_observed_text_later_wins() {
        let tables = CorrectionTables::builtin();
        let table = tables.get("StempelGaramondLTPro-Roman").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("\u{16f}").unwrap().glyph_id, 31);

        let table = tables.get("StGSonderItalic").unwrap();
        assert_eq!(table.get("\u{2021}").unwrap().glyph_id, 130);
    }

    #[test]
    fn test_by_glyph_id_skips_unconstrained() {
        let table = FontCorrectionTable::from_entries(
            "Demo",
            [("2", "\u{25cb}", -1), ("x", "\u{25b2}", 120)],
        );
        let by_gid = table.by_glyph_id();
        assert_eq!(by_gid.len(), 1);
        assert_eq!(by_gid.get(&120), Some(&"\u{25b2}".to_string()));
    }

    #[test]
    fn test_by_glyph_id_later_wins() {
        let table = FontCorrectionTable::from_entries("Demo", [("a", "1", 5), ("b", "2", 5)]);
        assert_eq!(table.by_glyph_id().get(&5), Some(&"2".to_string()));
    }

    #[test]
    fn test_replace_passes_through_unknown() {
        let tables = CorrectionTables::builtin();
        let table = tables.get("ATGarSo").unwrap();
        assert_eq!(table.replace("\u{e4}"), "a\u{364}");
        assert_eq!(table.replace("x"), "x");
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let mut tables = CorrectionTables::new();
        tables.insert("B", FontCorrectionTable::from_entries("B", [("b", "\u{62}", 1)]));
        tables.insert("A", FontCorrectionTable::from_entries("A", [("a", "\u{61}", -1)]));
        let json = tables.to_json().unwrap();
        let back = CorrectionTables::from_json(&json).unwrap();
        assert_eq!(back, tables);
        assert_eq!(back.names().collect::<Vec<_>>(), vec!["B", "A"]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(CorrectionTables::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_shared_is_builtin() {
        let shared = CorrectionTables::shared();
        assert_eq!(shared.len(), CorrectionTables::builtin().len());
    }
}
