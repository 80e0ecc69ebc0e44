//! Font handling and correction.
//!
//! This module provides the font model handed over by the PDF interpreter,
//! ToUnicode CMap parsing, the hand-curated correction tables and the
//! corrector that applies them, the font index written for review and the
//! reviewed replacement tables read back during conversion.

mod builtin_tables;
pub mod cmap;
pub mod correction;
pub mod corrector;
pub mod font;
pub mod font_index;
pub mod replacement;
pub mod tree_corrector;

pub use cmap::{parse_tounicode_cmap, CMap, UnicodeMap};
pub use correction::{Correction, CorrectionTables, FontCorrectionTable, UNCONSTRAINED_GLYPH_ID};
pub use corrector::{
    adjust_font_metrics, cid_reencode, is_psmt_font, is_symbol_font, is_tt_font, reencode,
    CorrectionReport, FontCorrector, ReencodeMode, Reencoding, Selection, TableCorrector,
};
pub use font::{strip_subset_prefix, FontBBox, PdfFont};
pub use font_index::{font_style_classes, FontIndex};
pub use replacement::{Replacement, ReplacementTable, StyleFlag};
pub use tree_corrector::{correct_page_tree, TreeCorrection};
