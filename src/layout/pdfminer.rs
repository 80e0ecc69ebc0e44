//! Reader for the layout XML written by the text extraction stage.
//!
//! The extractor dumps its layout tree as
//!
//! ```text
//! <pages>
//!   <page id="1" bbox="0,0,595,842" label="17">
//!     <textbox id="0" bbox="...">
//!       <textline bbox="...">
//!         <text font="ABCDEF+Times-Roman" size="10.0" cid="72"
//!               bbox="..." origin="56.7,700.2" ncolour="0" glyphname="H">H</text>
//!         <text> </text>
//!       </textline>
//!     </textbox>
//!     <rect .../> <figure>...</figure> <layout>...</layout>
//!   </page>
//! </pages>
//! ```
//!
//! Only text boxes are kept; other page content is discarded.

use crate::error::{Error, Result};
use crate::geometry::{parse_bbox, parse_origin, BBox, ZoneCoords};
use crate::layout::text_block::{Page, PageTree, TextBox, TextChar, TextLine};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// Read a layout XML file.
pub fn read_layout_file(path: impl AsRef<Path>) -> Result<PageTree> {
    let xml = fs::read_to_string(path)?;
    parse_layout_xml(&xml)
}

/// Parse layout XML into a [`PageTree`].
///
/// Malformed geometry or numeric attributes abort the whole document.
///
/// # Examples
///
/// ```
/// use pdf_tei::layout::parse_layout_xml;
///
/// let xml = r#"<pages><page id="1" bbox="0,0,100,100">
///   <textbox id="0" bbox="10,10,50,20"><textline bbox="10,10,50,20">
///     <text font="F" size="10.0" bbox="10,10,15,20" origin="10,12">A</text>
///   </textline></textbox>
///   <rect bbox="0,0,1,1"/>
/// </page></pages>"#;
/// let tree = parse_layout_xml(xml).unwrap();
/// assert_eq!(tree.pages[0].textboxes[0].lines[0].chars[0].text, "A");
/// ```
pub fn parse_layout_xml(xml: &str) -> Result<PageTree> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut tree = PageTree::default();
    let mut page: Option<Page> = None;
    let mut textbox: Option<TextBox> = None;
    let mut line: Option<TextLine> = None;
    let mut ch: Option<TextChar> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name().as_ref().to_vec();
                match name.as_slice() {
                    b"pages" if page.is_none() => {},
                    b"page" if page.is_none() => page = Some(read_page(&e)?),
                    b"textbox" if page.is_some() && textbox.is_none() => {
                        let (bbox, coords) = read_bbox(&e)?;
                        textbox = Some(TextBox::new(bbox, Vec::new()).with_coords(coords));
                    },
                    b"textline" if textbox.is_some() && line.is_none() => {
                        let (bbox, coords) = read_bbox(&e)?;
                        line = Some(TextLine::new(bbox, Vec::new()).with_coords(coords));
                    },
                    b"text" if line.is_some() && ch.is_none() => ch = Some(read_char(&e)?),
                    other => {
                        warn_unexpected(other, textbox.is_some(), line.is_some());
                        reader.read_to_end(QName(&name))?;
                    },
                }
            },
            Event::Empty(e) => {
                let name = e.name();
                match name.as_ref() {
                    b"text" if line.is_some() => {
                        if let Some(l) = line.as_mut() {
                            l.chars.push(read_char(&e)?);
                        }
                    },
                    b"textline" if textbox.is_some() => {
                        let (bbox, coords) = read_bbox(&e)?;
                        if let Some(tb) = textbox.as_mut() {
                            tb.lines.push(TextLine::new(bbox, Vec::new()).with_coords(coords));
                        }
                    },
                    b"textbox" if page.is_some() => {
                        let (bbox, coords) = read_bbox(&e)?;
                        if let Some(p) = page.as_mut() {
                            p.textboxes.push(TextBox::new(bbox, Vec::new()).with_coords(coords));
                        }
                    },
                    b"page" => tree.pages.push(read_page(&e)?),
                    other => warn_unexpected(other, textbox.is_some(), line.is_some()),
                }
            },
            Event::Text(e) => {
                if let Some(c) = ch.as_mut() {
                    c.text.push_str(&e.unescape()?);
                }
            },
            Event::CData(e) => {
                if let Some(c) = ch.as_mut() {
                    c.text.push_str(&String::from_utf8_lossy(&e));
                }
            },
            Event::End(e) => match e.name().as_ref() {
                b"text" => {
                    if let (Some(c), Some(l)) = (ch.take(), line.as_mut()) {
                        l.chars.push(c);
                    }
                },
                b"textline" => {
                    if let (Some(l), Some(tb)) = (line.take(), textbox.as_mut()) {
                        tb.lines.push(l);
                    }
                },
                b"textbox" => {
                    if let (Some(tb), Some(p)) = (textbox.take(), page.as_mut()) {
                        p.textboxes.push(tb);
                    }
                },
                b"page" => {
                    if let Some(p) = page.take() {
                        tree.pages.push(p);
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    if page.is_some() {
        return Err(Error::InvalidInput("layout XML ends inside a page".to_string()));
    }
    log::info!("Read {} pages, {} characters", tree.pages.len(), tree.char_count());
    Ok(tree)
}

fn warn_unexpected(name: &[u8], in_textbox: bool, in_line: bool) {
    let name = String::from_utf8_lossy(name);
    if in_line {
        log::warn!("Unexpected element {} in textline", name);
    } else if in_textbox {
        log::warn!("Unexpected element {} in textbox", name);
    } else {
        log::debug!("Discarding page element {}", name);
    }
}

fn read_page(e: &BytesStart<'_>) -> Result<Page> {
    let mut page = Page::default();
    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"id" => page.id = value.into_owned(),
            b"label" if !value.is_empty() => page.label = Some(value.into_owned()),
            b"bbox" => {
                let (bbox, coords) = parse_bbox(&value)?;
                page.bbox = Some(bbox);
                page.coords = Some(coords);
            },
            _ => {},
        }
    }
    Ok(page)
}

fn read_bbox(e: &BytesStart<'_>) -> Result<(Option<BBox>, Option<ZoneCoords>)> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"bbox" {
            let (bbox, coords) = parse_bbox(&attr.unescape_value()?)?;
            return Ok((Some(bbox), Some(coords)));
        }
    }
    Ok((None, None))
}

fn read_char(e: &BytesStart<'_>) -> Result<TextChar> {
    let mut ch = TextChar::new("", "", 0.0);
    let mut size: Option<f64> = None;
    let mut msize: Option<f64> = None;
    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"font" => ch.font = value.into_owned(),
            b"size" => size = Some(parse_number(&value, "size")?),
            b"msize" => msize = Some(parse_number(&value, "msize")?),
            b"rise" => ch.rise = parse_number(&value, "rise")?,
            b"cid" => {
                ch.cid = value
                    .trim()
                    .parse()
                    .map_err(|_| Error::InvalidInput(format!("bad cid {:?}", value)))?
            },
            b"bbox" => ch.bbox = Some(value.parse()?),
            b"origin" => ch.origin = Some(parse_origin(&value)?),
            b"ncolour" => ch.color = Some(value.into_owned()),
            b"glyphname" if !value.is_empty() => ch.glyph_name = Some(value.into_owned()),
            _ => {},
        }
    }
    // a corrected size recorded by an earlier pass takes precedence
    ch.size = msize.or(size).unwrap_or(0.0);
    Ok(ch)
}

fn parse_number(value: &str, what: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("bad {} {:?}", what, value)))
}
