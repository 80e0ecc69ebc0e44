//! Font correction.
//!
//! The corrector rewrites a font's glyph-id → Unicode mapping with a
//! hand-curated [`FontCorrectionTable`] and patches the metrics of a few
//! known-bad font families. At most one table is applied per font; which one
//! is decided by the font name alone:
//!
//! 1. the subset-stripped name has a table of its own;
//! 2. TrueType subset fonts (`TT…`) use `TT Special`;
//! 3. special families, first substring match wins: `TimesSonder2`,
//!    `TimesSonder3`, `TimesSonder` (→ `TimesSonder-Roman`),
//!    `GriechischMedium`, `Spezialzeichen`;
//! 4. `PS…MT` fonts get `PSMT Special`, keyed by glyph id;
//! 5. Symbol fonts use `Symbol`.
//!
//! Character-keyed re-encoding needs an enumerable glyph map. Fonts without
//! one are re-encoded by glyph id instead.

use crate::error::{Error, Result};
use crate::fonts::cmap::UnicodeMap;
use crate::fonts::correction::{CorrectionTables, FontCorrectionTable};
use crate::fonts::font::{strip_subset_prefix, FontBBox, PdfFont};
use std::sync::Arc;

/// Bounding box forced onto TrueType subset fonts.
pub const TT_FONT_BBOX: FontBBox = [-198.0, -247.0, 1213.0, 1013.0];
/// Descent forced onto TrueType subset fonts.
pub const TT_FONT_DESCENT: f64 = -216.0;
/// Bounding box forced onto `TimesSonder` fonts.
pub const SONDER_FONT_BBOX: FontBBox = [-599.0, -338.0, 2031.0, 1038.0];
/// Descent forced onto `TimesSonder` fonts.
pub const SONDER_FONT_DESCENT: f64 = -307.0;

/// Substring → table name, tested in order.
const SPECIAL_FAMILIES: &[(&str, &str)] = &[
    ("TimesSonder2", "TimesSonder2"),
    ("TimesSonder3", "TimesSonder3"),
    ("TimesSonder", "TimesSonder-Roman"),
    ("GriechischMedium", "GriechischMedium"),
    ("Spezialzeichen", "Spezialzeichen"),
];

/// Font names that need glyph-id correction without following the
/// `PS…MT` pattern.
const PSMT_EXCEPTIONS: &[&str] = &[
    "JNNUBF+TimesNewRomanPS-ItalicMT",
    "JNNUBF+StempelGrmnd-Italic",
    "KGLOYZ+StempelGrmnd-Roman",
];

/// How a table is applied to a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReencodeMode {
    /// Look up each current Unicode value in the table
    CharKeyed,
    /// Look up each glyph id in the table
    CidKeyed,
}

/// The table chosen for a font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Table name
    pub table: String,
    /// Re-encoding mode
    pub mode: ReencodeMode,
}

impl Selection {
    fn new(table: &str, mode: ReencodeMode) -> Self {
        Self {
            table: table.to_string(),
            mode,
        }
    }
}

/// What a re-encoding pass did to a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reencoding {
    /// The enumerable glyph map was rewritten; `changed` entries differ now
    Applied {
        /// Number of entries whose text changed
        changed: usize,
    },
    /// The font has no enumerable glyph map; nothing was touched
    MissingGlyphMap,
    /// Only the secondary Unicode map existed and was updated
    UnicodeMapUpdated {
        /// Number of entries written
        entries: usize,
    },
    /// Neither map existed; a new Unicode map was attached
    AdHocMap {
        /// Number of entries in the new map
        entries: usize,
    },
}

/// Outcome of correcting one font.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionReport {
    /// Font name as given
    pub fontname: String,
    /// Table and mode used, `None` if no pattern matched
    pub selection: Option<Selection>,
    /// Final re-encoding outcome
    pub reencoding: Option<Reencoding>,
    /// True if bounding box or descent were overwritten
    pub metrics_patched: bool,
}

/// Font correctors.
///
/// Every corrector rewrites a font in place through [`FontCorrector::correct`].
#[derive(Debug, Clone)]
pub enum FontCorrector {
    /// Name-driven correction with hand-curated tables
    TableDriven(TableCorrector),
}

impl FontCorrector {
    /// Table-driven corrector over the built-in tables.
    pub fn builtin() -> Self {
        FontCorrector::TableDriven(TableCorrector::new(CorrectionTables::shared()))
    }

    /// Table-driven corrector over a caller-supplied table set.
    pub fn with_tables(tables: CorrectionTables) -> Self {
        FontCorrector::TableDriven(TableCorrector::new(Arc::new(tables)))
    }

    /// Patch metrics, then re-encode `font`.
    pub fn correct(&self, font: &mut PdfFont) -> Result<CorrectionReport> {
        match self {
            FontCorrector::TableDriven(corrector) => corrector.correct(font),
        }
    }
}

/// Applies correction tables selected by font name.
#[derive(Debug, Clone)]
pub struct TableCorrector {
    tables: Arc<CorrectionTables>,
}

impl TableCorrector {
    /// Create a corrector over a table set.
    pub fn new(tables: Arc<CorrectionTables>) -> Self {
        Self { tables }
    }

    /// The table set in use.
    pub fn tables(&self) -> &CorrectionTables {
        &self.tables
    }

    /// Patch metrics, then re-encode `font`.
    ///
    /// Fails only if a fallback table chosen by name pattern is missing from
    /// the table set.
    pub fn correct(&self, font: &mut PdfFont) -> Result<CorrectionReport> {
        let metrics_patched = adjust_font_metrics(font);
        let selection = self.select(&font.fontname);

        let reencoding = match &selection {
            None => None,
            Some(sel) => {
                let table = self.tables.get(&sel.table).ok_or_else(|| {
                    Error::MissingCorrectionTable {
                        table: sel.table.clone(),
                        font: font.fontname.clone(),
                    }
                })?;
                Some(match sel.mode {
                    ReencodeMode::CharKeyed => match reencode(font, table) {
                        Reencoding::MissingGlyphMap => {
                            log::warn!(
                                "Cannot directly re-encode font {}. Trying glyph id re-encoding.",
                                font.fontname
                            );
                            cid_reencode(font, table)
                        },
                        done => done,
                    },
                    ReencodeMode::CidKeyed => cid_reencode(font, table),
                })
            },
        };

        if let Some(outcome) = reencoding {
            log::debug!("Font {}: {:?}", font.fontname, outcome);
        }

        Ok(CorrectionReport {
            fontname: font.fontname.clone(),
            selection,
            reencoding,
            metrics_patched,
        })
    }

    /// Choose the table for a font name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_tei::fonts::{CorrectionTables, ReencodeMode, TableCorrector};
    ///
    /// let corrector = TableCorrector::new(CorrectionTables::shared());
    /// let sel = corrector.select("KFRKEE+TimesSonder-Italic").unwrap();
    /// assert_eq!(sel.table, "TimesSonder-Italic");
    ///
    /// let sel = corrector.select("ABCDEF+TimesSonder5").unwrap();
    /// assert_eq!(sel.table, "TimesSonder-Roman");
    ///
    /// let sel = corrector.select("ABCDEF+ArialPS-BoldMT").unwrap();
    /// assert_eq!(sel.mode, ReencodeMode::CidKeyed);
    ///
    /// assert!(corrector.select("Helvetica").is_none());
    /// ```
    pub fn select(&self, fontname: &str) -> Option<Selection> {
        let basename = strip_subset_prefix(fontname);
        if self.tables.get(basename).is_some() {
            return Some(Selection::new(basename, ReencodeMode::CharKeyed));
        }
        if is_tt_font(fontname) {
            return Some(Selection::new("TT Special", ReencodeMode::CharKeyed));
        }
        if let Some((_, table)) = SPECIAL_FAMILIES
            .iter()
            .find(|(marker, _)| fontname.contains(marker))
        {
            return Some(Selection::new(table, ReencodeMode::CharKeyed));
        }
        if is_psmt_font(fontname) {
            return Some(Selection::new("PSMT Special", ReencodeMode::CidKeyed));
        }
        if is_symbol_font(fontname) {
            return Some(Selection::new("Symbol", ReencodeMode::CharKeyed));
        }
        None
    }
}

/// True for TrueType subset fonts: the subset-stripped name starts with `TT`.
pub fn is_tt_font(fontname: &str) -> bool {
    strip_subset_prefix(fontname).starts_with("TT")
}

/// True for `PS…MT` fonts: the first `MT` does not come before the first
/// `PS`.
pub fn is_psmt_font(fontname: &str) -> bool {
    if PSMT_EXCEPTIONS.contains(&fontname) {
        return true;
    }
    match (fontname.find("PS"), fontname.find("MT")) {
        (Some(ps), Some(mt)) => mt >= ps,
        _ => false,
    }
}

/// True if the subset-stripped name starts with `symbol`, any case.
pub fn is_symbol_font(fontname: &str) -> bool {
    strip_subset_prefix(fontname)
        .to_lowercase()
        .starts_with("symbol")
}

/// Overwrite the metrics of fonts known to report wrong ones.
///
/// TrueType subsets are patched first, `TimesSonder` fonts second; a name
/// matching both ends up with the `TimesSonder` values. Applying the patch
/// twice leaves the font as after the first application.
pub fn adjust_font_metrics(font: &mut PdfFont) -> bool {
    let mut patched = false;
    if is_tt_font(&font.fontname) {
        font.bbox = TT_FONT_BBOX;
        font.descent = TT_FONT_DESCENT;
        patched = true;
    }
    if font.fontname.contains("TimesSonder") {
        font.bbox = SONDER_FONT_BBOX;
        font.descent = SONDER_FONT_DESCENT;
        patched = true;
    }
    patched
}

/// Rewrite the font's glyph map by looking up each current value in `table`.
///
/// The rewritten map is pushed into the secondary Unicode map as well when the
/// font has one. Returns [`Reencoding::MissingGlyphMap`] without touching the
/// font if there is no enumerable glyph map.
pub fn reencode(font: &mut PdfFont, table: &FontCorrectionTable) -> Reencoding {
    let Some(glyph_map) = font.cid_to_unicode.as_mut() else {
        return Reencoding::MissingGlyphMap;
    };

    let mut changed = 0;
    for (cid, text) in glyph_map.iter_mut() {
        if let Some(correction) = table.get(text) {
            if correction.replacement != *text {
                log::trace!(
                    "{} glyph {}: {:?} -> {:?}",
                    font.fontname,
                    cid,
                    text,
                    correction.replacement
                );
                changed += 1;
            }
            *text = correction.replacement.clone();
        }
    }

    if let Some(unicode_map) = font.unicode_map.as_mut() {
        unicode_map.update(glyph_map.iter().map(|(k, v)| (*k, v.clone())));
    }
    Reencoding::Applied { changed }
}

/// Rewrite the font's mappings by glyph id.
///
/// With an enumerable glyph map, every glyph id found in the table is
/// replaced (and the secondary map updated). Without one the secondary map
/// receives the table directly; without either a new Unicode map is built
/// from the table.
pub fn cid_reencode(font: &mut PdfFont, table: &FontCorrectionTable) -> Reencoding {
    let by_gid = table.by_glyph_id();

    if let Some(glyph_map) = font.cid_to_unicode.as_mut() {
        let mut changed = 0;
        for (cid, text) in glyph_map.iter_mut() {
            if let Some(replacement) = by_gid.get(cid) {
                if replacement != text {
                    changed += 1;
                }
                *text = replacement.clone();
            }
        }
        if let Some(unicode_map) = font.unicode_map.as_mut() {
            unicode_map.update(glyph_map.iter().map(|(k, v)| (*k, v.clone())));
        }
        return Reencoding::Applied { changed };
    }

    let entries = by_gid.len();
    match font.unicode_map.as_mut() {
        Some(unicode_map) => {
            unicode_map.update(by_gid);
            Reencoding::UnicodeMapUpdated { entries }
        },
        None => {
            log::warn!(
                "Could not re-encode font {}. Building ad-hoc unicode map.",
                font.fontname
            );
            font.unicode_map = Some(by_gid.into_iter().collect::<UnicodeMap>());
            Reencoding::AdHocMap { entries }
        },
    }
}
