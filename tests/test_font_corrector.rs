//! Integration tests for font correction.
//!
//! Fonts are built the way the text extractor hands them over: a name, an
//! optional glyph map, an optional secondary Unicode map and metrics.

use pdf_tei::error::Error;
use pdf_tei::fonts::{
    adjust_font_metrics, CMap, Correction, CorrectionTables, FontCorrectionTable, FontCorrector,
    PdfFont, ReencodeMode, Reencoding, TableCorrector, UnicodeMap,
};
use proptest::prelude::*;
use std::sync::Arc;

// ============================================================================
// Helper Functions for Creating Mock Fonts
// ============================================================================

fn glyph_map(entries: &[(u32, &str)]) -> CMap {
    entries.iter().map(|(cid, s)| (*cid, s.to_string())).collect()
}

fn mock_font(name: &str, entries: &[(u32, &str)]) -> PdfFont {
    PdfFont::new(name).with_cid_to_unicode(glyph_map(entries))
}

fn small_tables() -> Arc<CorrectionTables> {
    let mut tables = CorrectionTables::new();
    tables.insert(
        "Symbol",
        FontCorrectionTable::from_entries(
            "Symbol",
            vec![("a", "\u{3b1}", 97), ("b", "\u{3b2}", 98)],
        ),
    );
    tables.insert(
        "PSMT Special",
        FontCorrectionTable::from_entries("PSMT Special", vec![("x", "\u{1e25}", 7)]),
    );
    Arc::new(tables)
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_exact_basename_wins_over_patterns() {
    let corrector = TableCorrector::new(CorrectionTables::shared());
    // TimesSonder-Italic has its own table although it also matches the
    // TimesSonder family pattern
    let sel = corrector.select("ABCDEF+TimesSonder-Italic").unwrap();
    assert_eq!(sel.table, "TimesSonder-Italic");
    assert_eq!(sel.mode, ReencodeMode::CharKeyed);
}

#[test]
fn test_tt_subset_font() {
    let corrector = TableCorrector::new(CorrectionTables::shared());
    let sel = corrector.select("QWERTZ+TT1A2Bo00").unwrap();
    assert_eq!(sel.table, "TT Special");
}

#[test]
fn test_psmt_exception_uses_glyph_ids() {
    let corrector = TableCorrector::new(CorrectionTables::shared());
    let sel = corrector.select("KGLOYZ+StempelGrmnd-Roman").unwrap();
    assert_eq!(sel.table, "PSMT Special");
    assert_eq!(sel.mode, ReencodeMode::CidKeyed);
}

#[test]
fn test_symbol_font_case_insensitive() {
    let corrector = TableCorrector::new(CorrectionTables::shared());
    let sel = corrector.select("ABCDEF+SYMBOLMT").unwrap();
    // PS..MT does not match: no "PS" in the name
    assert_eq!(sel.table, "Symbol");
}

// ============================================================================
// Re-encoding
// ============================================================================

#[test]
fn test_char_keyed_reencoding() {
    let corrector = FontCorrector::TableDriven(TableCorrector::new(small_tables()));
    let mut font = mock_font("ABCDEF+Symbol", &[(97, "a"), (98, "b"), (99, "c")]);
    let report = corrector.correct(&mut font).unwrap();

    assert_eq!(report.reencoding, Some(Reencoding::Applied { changed: 2 }));
    assert_eq!(font.to_unicode(97), Some("\u{3b1}"));
    assert_eq!(font.to_unicode(98), Some("\u{3b2}"));
    assert_eq!(font.to_unicode(99), Some("c"));
}

#[test]
fn test_missing_glyph_map_falls_back_to_glyph_ids() {
    let corrector = FontCorrector::TableDriven(TableCorrector::new(small_tables()));
    let unicode_map: UnicodeMap = vec![(97, "?".to_string())].into_iter().collect();
    let mut font = PdfFont::new("Symbol").with_unicode_map(unicode_map);

    let report = corrector.correct(&mut font).unwrap();
    assert_eq!(report.reencoding, Some(Reencoding::UnicodeMapUpdated { entries: 2 }));
    assert_eq!(font.to_unicode(97), Some("\u{3b1}"));
    assert_eq!(font.to_unicode(98), Some("\u{3b2}"));
}

#[test]
fn test_no_maps_builds_ad_hoc_map() {
    let corrector = FontCorrector::TableDriven(TableCorrector::new(small_tables()));
    let mut font = PdfFont::new("ABCDEF+ArialPS-ItalicMT");
    let report = corrector.correct(&mut font).unwrap();

    assert_eq!(report.reencoding, Some(Reencoding::AdHocMap { entries: 1 }));
    assert_eq!(font.to_unicode(7), Some("\u{1e25}"));
}

#[test]
fn test_missing_fallback_table_is_fatal() {
    let corrector = FontCorrector::TableDriven(TableCorrector::new(small_tables()));
    let mut font = mock_font("ABCDEF+TT5Fo00", &[(1, "a")]);
    let err = corrector.correct(&mut font).unwrap_err();
    assert!(
        matches!(err, Error::MissingCorrectionTable { ref table, .. } if table == "TT Special")
    );
}

#[test]
fn test_tables_json_roundtrip() {
    let tables = small_tables();
    let json = tables.to_json().unwrap();
    let back = CorrectionTables::from_json(&json).unwrap();
    assert_eq!(back.len(), 2);
    assert_eq!(
        back.get("PSMT Special").unwrap().get("x"),
        Some(&Correction::new("\u{1e25}", 7))
    );
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Fonts matching no pattern keep their glyph map.
    #[test]
    fn prop_unmatched_fonts_are_untouched(
        name in "[a-z]{3,12}",
        entries in proptest::collection::btree_map(0u32..500, "[a-z]", 0..20),
    ) {
        prop_assume!(!name.starts_with("symbol"));
        let corrector = FontCorrector::builtin();
        let mut font = PdfFont::new(name.clone()).with_cid_to_unicode(entries.clone());
        let report = corrector.correct(&mut font).unwrap();
        prop_assert!(report.selection.is_none());
        prop_assert!(!report.metrics_patched);
        prop_assert_eq!(font.cid_to_unicode, Some(entries));
    }

    /// Patching metrics twice equals patching once.
    #[test]
    fn prop_metrics_patch_is_idempotent(
        prefix in "[A-Z]{6}\\+",
        family in prop_oneof![
            Just("TT1Ao00"),
            Just("TimesSonder"),
            Just("TTTimesSonder"),
            Just("Garamond"),
        ],
    ) {
        let mut font = PdfFont::new(format!("{}{}", prefix, family));
        adjust_font_metrics(&mut font);
        let once = (font.bbox, font.descent);
        adjust_font_metrics(&mut font);
        prop_assert_eq!((font.bbox, font.descent), once);
    }
}
