//! Page tree representation.
//!
//! This module defines the page → textbox → line → character tree produced
//! by the text extraction stage. Characters are mutated in place by the later
//! stages (replacement, case folding, size normalisation) and consumed when
//! the TEI output is built.

use crate::geometry::{BBox, Point, ZoneCoords};

/// A single character with its position and styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextChar {
    /// Text value; usually one character, may be empty or whitespace
    pub text: String,
    /// Full font name, including any subset prefix
    pub font: String,
    /// Font size in points, 0.0 if unknown
    pub size: f64,
    /// Glyph id, -1 if unknown
    pub cid: i32,
    /// Bounding box of the glyph
    pub bbox: Option<BBox>,
    /// Baseline origin
    pub origin: Option<Point>,
    /// Text rise (super/subscript offset)
    pub rise: f64,
    /// Fill colour as reported by the extractor
    pub color: Option<String>,
    /// Glyph name from the font program (`a.sc`), if the extractor wrote one
    pub glyph_name: Option<String>,
}

impl TextChar {
    /// Create a character with no geometry.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_tei::layout::TextChar;
    ///
    /// let ch = TextChar::new("a", "ABCDEF+Times-Roman", 10.0);
    /// assert_eq!(ch.cid, -1);
    /// assert_eq!(ch.base(), None);
    /// ```
    pub fn new(text: impl Into<String>, font: impl Into<String>, size: f64) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
            size,
            cid: -1,
            bbox: None,
            origin: None,
            rise: 0.0,
            color: None,
            glyph_name: None,
        }
    }

    /// Set the glyph id.
    pub fn with_cid(mut self, cid: i32) -> Self {
        self.cid = cid;
        self
    }

    /// Set the bounding box.
    pub fn with_bbox(mut self, bbox: BBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Set the baseline origin.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the text rise.
    pub fn with_rise(mut self, rise: f64) -> Self {
        self.rise = rise;
        self
    }

    /// Set the colour.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the glyph name.
    pub fn with_glyph_name(mut self, name: impl Into<String>) -> Self {
        self.glyph_name = Some(name.into());
        self
    }

    /// Baseline y coordinate, if the origin is known.
    pub fn base(&self) -> Option<f64> {
        self.origin.map(|p| p.y)
    }

    /// True for whitespace-only (but non-empty) text.
    pub fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.trim().is_empty()
    }
}

/// A line of characters in extraction order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLine {
    /// Bounding box of the line
    pub bbox: Option<BBox>,
    /// Zone coordinates of the line
    pub coords: Option<ZoneCoords>,
    /// Characters, left to right
    pub chars: Vec<TextChar>,
}

impl TextLine {
    /// Create a line from characters.
    pub fn new(bbox: Option<BBox>, chars: Vec<TextChar>) -> Self {
        Self {
            coords: bbox.map(|b| b.zone()),
            bbox,
            chars,
        }
    }

    /// Keep the zone coordinates exactly as the extractor wrote them.
    pub fn with_coords(mut self, coords: Option<ZoneCoords>) -> Self {
        self.coords = coords;
        self
    }

    /// Concatenated text of the line.
    pub fn text(&self) -> String {
        self.chars.iter().map(|c| c.text.as_str()).collect()
    }
}

/// A text box (paragraph-like group of lines).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBox {
    /// Bounding box of the box
    pub bbox: Option<BBox>,
    /// Zone coordinates of the box
    pub coords: Option<ZoneCoords>,
    /// Lines, top to bottom
    pub lines: Vec<TextLine>,
}

impl TextBox {
    /// Create a text box from lines.
    pub fn new(bbox: Option<BBox>, lines: Vec<TextLine>) -> Self {
        Self {
            coords: bbox.map(|b| b.zone()),
            bbox,
            lines,
        }
    }

    /// Keep the zone coordinates exactly as the extractor wrote them.
    pub fn with_coords(mut self, coords: Option<ZoneCoords>) -> Self {
        self.coords = coords;
        self
    }
}

/// One page of the extracted tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Page id as reported by the extractor (scan number)
    pub id: String,
    /// Printed page label, if any
    pub label: Option<String>,
    /// Page bounding box
    pub bbox: Option<BBox>,
    /// Zone coordinates of the page surface
    pub coords: Option<ZoneCoords>,
    /// Text boxes in extraction order
    pub textboxes: Vec<TextBox>,
}

impl Page {
    /// Create an empty page.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the page label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the page bounding box.
    pub fn with_bbox(mut self, bbox: BBox) -> Self {
        self.coords = Some(bbox.zone());
        self.bbox = Some(bbox);
        self
    }

    /// Append a text box.
    pub fn with_textbox(mut self, textbox: TextBox) -> Self {
        self.textboxes.push(textbox);
        self
    }
}

/// All pages of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageTree {
    /// Pages in document order
    pub pages: Vec<Page>,
}

impl PageTree {
    /// Create a tree from pages.
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Number of characters on all pages.
    pub fn char_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| &p.textboxes)
            .flat_map(|tb| &tb.lines)
            .map(|l| l.chars.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_char_builders() {
        let ch = TextChar::new("x", "F", 9.0)
            .with_cid(120)
            .with_origin(Point::new(1.0, 300.0))
            .with_rise(2.5)
            .with_color("0");
        assert_eq!(ch.cid, 120);
        assert_eq!(ch.base(), Some(300.0));
        assert_eq!(ch.rise, 2.5);
        assert_eq!(ch.color.as_deref(), Some("0"));
    }

    #[test]
    fn test_is_whitespace() {
        assert!(TextChar::new(" ", "F", 1.0).is_whitespace());
        assert!(TextChar::new("\n", "F", 1.0).is_whitespace());
        assert!(!TextChar::new("", "F", 1.0).is_whitespace());
        assert!(!TextChar::new("a", "F", 1.0).is_whitespace());
    }

    #[test]
    fn test_line_text() {
        let line = TextLine::new(
            None,
            vec![TextChar::new("a", "F", 1.0), TextChar::new("b", "F", 1.0)],
        );
        assert_eq!(line.text(), "ab");
    }

    #[test]
    fn test_char_count() {
        let line = TextLine::new(None, vec![TextChar::new("a", "F", 1.0); 3]);
        let page = Page::new("1").with_textbox(TextBox::new(None, vec![line.clone(), line]));
        assert_eq!(PageTree::new(vec![page]).char_count(), 6);
    }
}
