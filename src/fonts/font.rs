//! Font objects handed over by the PDF interpreter.
//!
//! Only the parts the corrector touches are modelled: the font name, the two
//! glyph maps and the metrics that drive glyph placement (bounding box and
//! descent). Parsing fonts out of a PDF is the interpreter's business.

use crate::fonts::cmap::{CMap, UnicodeMap};

/// Font bounding box in glyph space units (`[x0, y0, x1, y1]`).
pub type FontBBox = [f64; 4];

/// A font as seen by the corrector.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfFont {
    /// Font name, possibly carrying a subset prefix (`ABCDEF+Times-Roman`)
    pub fontname: String,
    /// Enumerable glyph-id → Unicode map; some font kinds do not have one
    pub cid_to_unicode: Option<CMap>,
    /// Secondary Unicode map built from the font's ToUnicode stream
    pub unicode_map: Option<UnicodeMap>,
    /// Font bounding box
    pub bbox: FontBBox,
    /// Descent below the baseline (negative)
    pub descent: f64,
}

impl PdfFont {
    /// Create a font with no maps and zeroed metrics.
    pub fn new(fontname: impl Into<String>) -> Self {
        Self {
            fontname: fontname.into(),
            cid_to_unicode: None,
            unicode_map: None,
            bbox: [0.0; 4],
            descent: 0.0,
        }
    }

    /// Attach an enumerable glyph map.
    pub fn with_cid_to_unicode(mut self, map: CMap) -> Self {
        self.cid_to_unicode = Some(map);
        self
    }

    /// Attach a secondary Unicode map.
    pub fn with_unicode_map(mut self, map: UnicodeMap) -> Self {
        self.unicode_map = Some(map);
        self
    }

    /// Set bounding box and descent.
    pub fn with_metrics(mut self, bbox: FontBBox, descent: f64) -> Self {
        self.bbox = bbox;
        self.descent = descent;
        self
    }

    /// Font name without its subset prefix.
    pub fn basename(&self) -> &str {
        strip_subset_prefix(&self.fontname)
    }

    /// Resolve a glyph id to text, preferring the enumerable map.
    pub fn to_unicode(&self, cid: u32) -> Option<&str> {
        self.cid_to_unicode
            .as_ref()
            .and_then(|m| m.get(&cid).map(String::as_str))
            .or_else(|| self.unicode_map.as_ref().and_then(|m| m.get(cid)))
    }
}

/// Strip a subset prefix (everything up to and including the first `+`).
///
/// # Examples
///
/// ```
/// use pdf_tei::fonts::strip_subset_prefix;
///
/// assert_eq!(strip_subset_prefix("KFRKEE+StGSonderRoman"), "StGSonderRoman");
/// assert_eq!(strip_subset_prefix("Symbol"), "Symbol");
/// ```
pub fn strip_subset_prefix(fontname: &str) -> &str {
    match fontname.find('+') {
        Some(pos) => &fontname[pos + 1..],
        None => fontname,
    }
}
