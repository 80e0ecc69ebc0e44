//! Per-font replacement tables from a reviewed font index.
//!
//! A font analysis run writes an HTML index listing, for every font, each
//! distinct `(character, glyph id)` pair it met. Editors fix the replacement
//! column and mark style flags through the cell's `class` attribute. The
//! converter then reads the reviewed index back:
//!
//! ```text
//! <h1>KFRKEE+StGSonderRoman</h1>
//! <p class="fontmetrics">BBox: ...</p>          (optional)
//! <table>
//!   <tr>
//!     <td class="">E</td>                         found character
//!     <td><img .../></td>                         glyph picture
//!     <td class="sc bold">Ę</td>                  replacement + flags
//!     <td class="cid">CID: 69</td>                glyph id
//!     ...
//!   </tr>
//! </table>
//! ```

use crate::error::{Error, Result};
use crate::fonts::correction::UNCONSTRAINED_GLYPH_ID;
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// Style flag attached to a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleFlag {
    /// `sc`
    SmallCaps,
    /// `bold`
    Bold,
    /// `italics`
    Italics,
    /// Any other class name; ignored when applied
    Unknown(String),
}

impl StyleFlag {
    /// Map a class name to a flag.
    pub fn from_name(name: &str) -> Self {
        match name {
            "sc" => StyleFlag::SmallCaps,
            "bold" => StyleFlag::Bold,
            "italics" => StyleFlag::Italics,
            other => StyleFlag::Unknown(other.to_string()),
        }
    }
}

/// Replacement text and style flags for one `(character, glyph id)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Text to emit
    pub text: String,
    /// Style flags to merge into the character's style
    pub flags: Vec<StyleFlag>,
}

type FontReplacements = IndexMap<(String, i32), Replacement>;

/// Reviewed replacements keyed by full font name, character and glyph id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplacementTable {
    fonts: IndexMap<String, FontReplacements>,
}

impl ReplacementTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a reviewed font index from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let html = fs::read_to_string(path)?;
        Self::from_html(&html)
    }

    /// Parse a reviewed font index.
    ///
    /// Each `<h1>` names a font and must be followed by its `<table>`,
    /// optionally after one `<p>` with font metrics. Rows whose replacement
    /// equals the found character and that carry no flags are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_tei::fonts::{ReplacementTable, StyleFlag};
    ///
    /// let html = r#"<html><body>
    /// <h1>ABCDEF+Demo-Roman</h1>
    /// <table>
    /// <tr><td>E</td><td/><td class="sc">&#x118;</td><td class="cid">CID: 69</td></tr>
    /// </table>
    /// </body></html>"#;
    /// let table = ReplacementTable::from_html(html).unwrap();
    /// let repl = table.lookup("ABCDEF+Demo-Roman", "E", 69).unwrap();
    /// assert_eq!(repl.text, "\u{118}");
    /// assert_eq!(repl.flags, vec![StyleFlag::SmallCaps]);
    /// ```
    pub fn from_html(html: &str) -> Result<Self> {
        let mut reader = Reader::from_str(html);
        reader.trim_text(false);
        reader.check_end_names(false);

        let mut table = ReplacementTable::new();
        let mut heading: Option<String> = None;
        let mut pending_font: Option<String> = None;
        let mut active_font: Option<String> = None;
        let mut row: Option<Vec<Cell>> = None;
        let mut cell: Option<Cell> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let name = name.as_ref();
                    if let Some(font) = pending_font.as_ref() {
                        match name {
                            b"table" => {
                                table.fonts.entry(font.clone()).or_default();
                                active_font = pending_font.take();
                                continue;
                            },
                            b"p" => continue,
                            b"h1" => {
                                return Err(Error::InvalidInput(format!(
                                    "font index: no table for font {}",
                                    font
                                )))
                            },
                            _ => {},
                        }
                    }
                    match name {
                        b"h1" => heading = Some(String::new()),
                        b"tr" if active_font.is_some() => row = Some(Vec::new()),
                        b"td" if row.is_some() => cell = Some(Cell::open(&e)?),
                        _ => {},
                    }
                },
                Event::Empty(e) => {
                    if e.name().as_ref() == b"td" {
                        if let Some(cells) = row.as_mut() {
                            cells.push(Cell::open(&e)?);
                        }
                    }
                },
                Event::Text(e) => {
                    if let Some(h) = heading.as_mut() {
                        h.push_str(&e.unescape()?);
                    } else if let Some(c) = cell.as_mut() {
                        c.text.push_str(&e.unescape()?);
                    }
                },
                Event::End(e) => match e.name().as_ref() {
                    b"h1" => {
                        if let Some(font) = heading.take() {
                            pending_font = Some(font.trim().to_string());
                        }
                    },
                    b"td" => {
                        if let (Some(c), Some(cells)) = (cell.take(), row.as_mut()) {
                            cells.push(c);
                        }
                    },
                    b"tr" => {
                        if let (Some(cells), Some(font)) = (row.take(), active_font.as_ref()) {
                            table.add_row(font, cells)?;
                        }
                    },
                    b"table" => active_font = None,
                    _ => {},
                },
                Event::Eof => break,
                _ => {},
            }
        }

        if let Some(font) = pending_font {
            return Err(Error::InvalidInput(format!(
                "font index: no table for font {}",
                font
            )));
        }
        Ok(table)
    }

    fn add_row(&mut self, font: &str, cells: Vec<Cell>) -> Result<()> {
        if cells.len() < 4 {
            return Err(Error::InvalidInput(format!(
                "font index: row with {} cells for font {}",
                cells.len(),
                font
            )));
        }
        let found = normalize_cell(&cells[0].text);
        let text = normalize_cell(&cells[2].text);
        let cid = parse_cid_cell(&cells[3].text)?;
        let flags: Vec<StyleFlag> = cells[2]
            .class
            .split_whitespace()
            .map(StyleFlag::from_name)
            .collect();
        if found == text && flags.is_empty() {
            return Ok(());
        }
        self.insert(font, found, cid, Replacement { text, flags });
        Ok(())
    }

    /// Add or replace a rule.
    pub fn insert(
        &mut self,
        font: impl Into<String>,
        found: impl Into<String>,
        cid: i32,
        replacement: Replacement,
    ) {
        self.fonts
            .entry(font.into())
            .or_default()
            .insert((found.into(), cid), replacement);
    }

    /// Rule for a character of `font`, keyed by its trimmed text and glyph id.
    pub fn lookup(&self, font: &str, found: &str, cid: i32) -> Option<&Replacement> {
        self.fonts
            .get(font)?
            .get(&(found.to_string(), cid))
    }

    /// True if the table has rules (possibly none) for `font`.
    pub fn has_font(&self, font: &str) -> bool {
        self.fonts.contains_key(font)
    }

    /// Number of fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Number of rules over all fonts.
    pub fn rule_count(&self) -> usize {
        self.fonts.values().map(IndexMap::len).sum()
    }

    /// True if no font is listed.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

#[derive(Debug, Default)]
struct Cell {
    text: String,
    class: String,
}

impl Cell {
    fn open(e: &BytesStart<'_>) -> Result<Self> {
        let mut class = String::new();
        for attr in e.attributes() {
            let attr = attr?;
            if attr.key.as_ref() == b"class" {
                class = attr.unescape_value()?.trim().to_string();
            }
        }
        Ok(Cell {
            class,
            ..Cell::default()
        })
    }
}

/// A whitespace-only cell holding a space stands for the space character.
fn normalize_cell(text: &str) -> String {
    if text.contains(' ') && text.trim().is_empty() {
        " ".to_string()
    } else {
        text.trim().to_string()
    }
}

/// `"CID: 69"` → 69; an empty cell or value means the glyph id is unknown.
fn parse_cid_cell(text: &str) -> Result<i32> {
    let text = text.trim();
    let value = match text.find(':') {
        Some(pos) => text[pos + 1..].trim(),
        None => text,
    };
    if value.is_empty() {
        return Ok(UNCONSTRAINED_GLYPH_ID);
    }
    value
        .parse()
        .map_err(|_| Error::InvalidInput(format!("font index: bad glyph id cell {:?}", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(rows: &str) -> String {
        format!(
            "<html><body><h1>X+Font</h1>\n\
             <p class=\"fontmetrics\">BBox: [0, 0, 1, 1]<br/></p>\n\
             <table>\n{}</table></body></html>",
            rows
        )
    }

    #[test]
    fn test_style_flag_from_name() {
        assert_eq!(StyleFlag::from_name("sc"), StyleFlag::SmallCaps);
        assert_eq!(StyleFlag::from_name("italics"), StyleFlag::Italics);
        assert_eq!(StyleFlag::from_name("italic"), StyleFlag::Unknown("italic".into()));
    }

    #[test]
    fn test_identity_row_without_flags_is_skipped() {
        let html = index("<tr><td>a</td><td/><td>a</td><td>CID: 97</td></tr>\n");
        let table = ReplacementTable::from_html(&html).unwrap();
        assert!(table.has_font("X+Font"));
        assert!(table.lookup("X+Font", "a", 97).is_none());
    }

    #[test]
    fn test_identity_row_with_flags_is_kept() {
        let html = index(
            "<tr><td class=\"sc\">A</td><td/><td class=\"sc bold\">A</td><td>CID: 65</td></tr>\n",
        );
        let table = ReplacementTable::from_html(&html).unwrap();
        let repl = table.lookup("X+Font", "A", 65).unwrap();
        assert_eq!(repl.flags, vec![StyleFlag::SmallCaps, StyleFlag::Bold]);
    }

    #[test]
    fn test_missing_cid_means_unknown() {
        let html = index("<tr><td>e</td><td/><td>&#x119;</td><td class=\"cid\"></td></tr>\n");
        let table = ReplacementTable::from_html(&html).unwrap();
        assert_eq!(table.lookup("X+Font", "e", -1).unwrap().text, "\u{119}");
    }

    #[test]
    fn test_space_cell_normalizes_to_space() {
        let html = index("<tr><td>  </td><td/><td>_</td><td>CID: 3</td></tr>\n");
        let table = ReplacementTable::from_html(&html).unwrap();
        assert_eq!(table.lookup("X+Font", " ", 3).unwrap().text, "_");
    }

    #[test]
    fn test_escaped_text() {
        let html = index("<tr><td>&amp;</td><td/><td>&lt;</td><td>CID: 3</td></tr>\n");
        let table = ReplacementTable::from_html(&html).unwrap();
        assert_eq!(table.lookup("X+Font", "&", 3).unwrap().text, "<");
    }

    #[test]
    fn test_heading_without_table_is_error() {
        let html = "<html><body><h1>A</h1><h1>B</h1><table></table></body></html>";
        assert!(matches!(
            ReplacementTable::from_html(html),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_short_row_is_error() {
        let html = index("<tr><td>a</td><td>b</td></tr>\n");
        assert!(ReplacementTable::from_html(&html).is_err());
    }

    #[test]
    fn test_parse_cid_cell() {
        assert_eq!(parse_cid_cell("CID: 69").unwrap(), 69);
        assert_eq!(parse_cid_cell(" ").unwrap(), -1);
        assert_eq!(parse_cid_cell("CID: ").unwrap(), -1);
        assert!(parse_cid_cell("CID: x").is_err());
    }
}
