//! Font index writer.
//!
//! Lists every distinct `(character, glyph id)` pair of every font in a page
//! tree as an HTML table, for editors to review. The reviewed file is read
//! back by [`ReplacementTable::from_file`](crate::fonts::ReplacementTable).
//! Each row carries the found character (cell 0), a placeholder for the glyph
//! picture (cell 1), the replacement to edit (cell 2, its `class` holding the
//! style flags), the glyph id (cell 3) and the scan it was first seen on.

use crate::error::Result;
use crate::fonts::correction::UNCONSTRAINED_GLYPH_ID;
use crate::fonts::font::{strip_subset_prefix, FontBBox, PdfFont};
use crate::geometry::fmt_coord;
use crate::layout::{Page, PageTree, TextChar};
use quick_xml::escape::escape;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const HTML_HEAD: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
<meta http-equiv="Content-type" content="text/html; charset=UTF-8"/>
<title>Fonts</title>
<style>
td { font-size:36pt; vertical-align:baseline; }
td.bold { font-weight:bold; }
td.sc { font-variant:small-caps; }
td.italics { font-style:italic; }
td.cid { font-size:12pt; }
td.pic { font-size:18pt; padding-left:1em; }
p.fontmetrics { margin-left: 40px; color: red; }
</style>
</head>
<body>
"#;

const HTML_FOOT: &str = "</body>\n</html>\n";

/// First sighting of a glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Glyph {
    page: String,
    smallcaps: bool,
}

/// `(text, glyph id as written)`; sorts like the review files always have.
type GlyphKey = (String, String);

/// Distinct glyphs per font, ready to be written as a review file.
#[derive(Debug, Clone, Default)]
pub struct FontIndex {
    fonts: BTreeMap<String, BTreeMap<GlyphKey, Glyph>>,
    metrics: BTreeMap<String, (FontBBox, f64)>,
}

impl FontIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index all pages of a tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_tei::fonts::FontIndex;
    /// use pdf_tei::layout::{Page, PageTree, TextBox, TextChar, TextLine};
    ///
    /// let chars = vec![
    ///     TextChar::new("e", "X+Demo-Italic", 10.0).with_cid(101),
    ///     TextChar::new("e", "X+Demo-Italic", 10.0).with_cid(101),
    ///     TextChar::new("E", "X+Demo-Italic", 10.0).with_cid(69),
    /// ];
    /// let line = TextLine::new(None, chars);
    /// let page = Page::new("1").with_textbox(TextBox::new(None, vec![line]));
    /// let index = FontIndex::from_tree(&PageTree::new(vec![page]));
    /// assert_eq!(index.font_count(), 1);
    /// assert_eq!(index.glyph_count(), 2);
    /// assert!(index.to_html().contains("<td class=\"italics\">E</td>"));
    /// ```
    pub fn from_tree(tree: &PageTree) -> Self {
        let mut index = Self::new();
        for page in &tree.pages {
            index.add_page(page);
        }
        index
    }

    /// Add the glyphs of one page; glyphs seen before keep their first page.
    pub fn add_page(&mut self, page: &Page) {
        let chars = page
            .textboxes
            .iter()
            .flat_map(|tb| &tb.lines)
            .flat_map(|line| &line.chars);
        for ch in chars {
            if ch.font.is_empty() || is_line_break(&ch.text) {
                continue;
            }
            self.fonts
                .entry(ch.font.clone())
                .or_default()
                .entry((ch.text.clone(), cid_label(ch.cid)))
                .or_insert_with(|| Glyph {
                    page: page.id.clone(),
                    smallcaps: is_smallcaps_glyph(ch),
                });
        }
    }

    /// Record the metrics of a font, printed under its heading.
    pub fn with_metrics(mut self, font: &PdfFont) -> Self {
        self.metrics
            .insert(font.fontname.clone(), (font.bbox, font.descent));
        self
    }

    /// Number of fonts.
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Number of distinct glyphs over all fonts.
    pub fn glyph_count(&self) -> usize {
        self.fonts.values().map(BTreeMap::len).sum()
    }

    /// Render the index as XHTML.
    pub fn to_html(&self) -> String {
        let mut html = String::from(HTML_HEAD);

        html.push_str("<p>\n");
        for (n, font) in self.fonts.keys().enumerate() {
            html.push_str(&format!("<a href=\"#f{}\">{}</a><br/>\n", n, escape(font)));
        }
        html.push_str("</p>\n");

        for (n, (font, glyphs)) in self.fonts.iter().enumerate() {
            html.push_str(&format!("<h1 id=\"f{}\">{}</h1>\n", n, escape(font)));
            if let Some((bbox, descent)) = self.metrics.get(font) {
                html.push_str(&format!(
                    "<p class=\"fontmetrics\">\nBBox: [{}]<br/>\nDescent: {}<br/>\n</p>\n",
                    bbox.iter().map(|v| fmt_coord(*v)).collect::<Vec<_>>().join(", "),
                    fmt_coord(*descent)
                ));
            }

            let font_style = font_style_classes(strip_subset_prefix(font));
            html.push_str("<table>\n");
            for ((text, cid), glyph) in glyphs {
                let class = if glyph.smallcaps && !font_style.split(' ').any(|c| c == "sc") {
                    if font_style.is_empty() {
                        "sc".to_string()
                    } else {
                        format!("{} sc", font_style)
                    }
                } else {
                    font_style.clone()
                };
                let text = escape(text);
                html.push_str("<tr>\n");
                html.push_str(&format!("<td class=\"{}\">{}</td>\n", class, text));
                html.push_str("<td></td>\n");
                html.push_str(&format!("<td class=\"{}\">{}</td>\n", class, text));
                html.push_str(&format!("<td class=\"cid\">CID: {}</td>\n", cid));
                html.push_str(&format!("<td>Scan: {}</td>\n", escape(&glyph.page)));
                html.push_str("</tr>\n");
            }
            html.push_str("</table>\n");
        }

        html.push_str(HTML_FOOT);
        html
    }

    /// Write the index to `path`.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_html())?;
        Ok(())
    }
}

/// Style classes implied by a font name without subset prefix.
///
/// # Examples
///
/// ```
/// use pdf_tei::fonts::font_style_classes;
///
/// assert_eq!(font_style_classes("Garamond-BoldItalic"), "bold italics");
/// assert_eq!(font_style_classes("GaramondSC-Regular"), "sc");
/// assert_eq!(font_style_classes("Garamond-Roman"), "");
/// ```
pub fn font_style_classes(basename: &str) -> String {
    let lower = basename.to_lowercase();
    let mut classes = Vec::new();
    if lower.contains("bold") {
        classes.push("bold");
    }
    if lower.contains("italic") {
        classes.push("italics");
    }
    if basename.contains("SC") || lower.contains("smallcaps") {
        classes.push("sc");
    }
    classes.join(" ")
}

fn is_line_break(text: &str) -> bool {
    matches!(text, "\n" | "\r" | "\r\n" | "\n\r")
}

fn is_smallcaps_glyph(ch: &TextChar) -> bool {
    ch.glyph_name
        .as_deref()
        .map_or(false, |name| name.trim().to_lowercase().ends_with(".sc"))
}

fn cid_label(cid: i32) -> String {
    if cid == UNCONSTRAINED_GLYPH_ID {
        String::new()
    } else {
        cid.to_string()
    }
}
