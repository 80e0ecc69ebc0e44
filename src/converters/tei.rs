//! Page tree to TEI conversion.
//!
//! Walks page → textbox → line → word → character. Every line is segmented,
//! its dominant base and size become the reference for the styles of its
//! words, and each character is emitted as a `c` element pointing at an
//! interned style.
//!
//! Ids are built from running counters: the page counter runs through the
//! whole document, the textbox counter restarts on every page, the line
//! counter on every textbox and the word counter on every line.

use crate::config::ConversionConfig;
use crate::converters::tei_document::{
    CoordSurface, Rendition, ScanSurface, TeiChar, TeiDocument, TeiLine, TeiPage, TeiSegment,
    TeiTextBox, Zone,
};
use crate::error::{Error, Result};
use crate::fonts::ReplacementTable;
use crate::geometry::BBox;
use crate::layout::{Page, PageTree, TextBox, TextChar, TextLine};
use crate::style::StyleRegistry;
use crate::text::{segment_line, LineContext, Segment, StyleResolver};

/// Id of the `page`-th page.
pub fn page_id(page: usize) -> String {
    format!("page_{:05}", page)
}

/// Id of a textbox.
pub fn textbox_id(page: usize, textbox: usize) -> String {
    format!("tb_{:05}_{:03}", page, textbox)
}

/// Id of a line.
pub fn line_id(page: usize, textbox: usize, line: usize) -> String {
    format!("line_{:05}_{:03}_{:03}", page, textbox, line)
}

/// Id of a word.
pub fn word_id(page: usize, textbox: usize, line: usize, word: usize) -> String {
    format!("wd_{:05}_{:03}_{:03}_{:02}", page, textbox, line, word)
}

/// Converts page trees into TEI documents.
///
/// # Examples
///
/// ```
/// use pdf_tei::converters::TeiConverter;
/// use pdf_tei::geometry::{BBox, Point};
/// use pdf_tei::layout::{Page, PageTree, TextBox, TextChar, TextLine};
///
/// let chars = "Hi"
///     .chars()
///     .enumerate()
///     .map(|(i, c)| {
///         let x = i as f64 * 5.0;
///         TextChar::new(c.to_string(), "ABCDEF+Garamond-Roman", 10.0)
///             .with_bbox(BBox::new(x, 100.0, x + 5.0, 110.0))
///             .with_origin(Point::new(x, 100.0))
///     })
///     .collect();
/// let line = TextLine::new(None, chars);
/// let page = Page::new("1").with_textbox(TextBox::new(None, vec![line]));
///
/// let doc = TeiConverter::default().convert(PageTree::new(vec![page])).unwrap();
/// assert_eq!(doc.renditions.len(), 1);
/// assert_eq!(doc.lines().next().unwrap().text(), "Hi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TeiConverter {
    config: ConversionConfig,
    replacements: Option<ReplacementTable>,
}

impl TeiConverter {
    /// Create a converter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config`.
    pub fn with_config(mut self, config: ConversionConfig) -> Self {
        self.config = config;
        self
    }

    /// Apply reviewed replacements.
    pub fn with_replacements(mut self, replacements: ReplacementTable) -> Self {
        self.replacements = Some(replacements);
        self
    }

    /// Configuration in use.
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert a page tree.
    ///
    /// Every conversion starts with a fresh style registry. Malformed
    /// geometry aborts the conversion.
    pub fn convert(&self, tree: PageTree) -> Result<TeiDocument> {
        let mut resolver = StyleResolver::new(&self.config);
        if let Some(ref table) = self.replacements {
            resolver = resolver.with_replacements(table);
        }
        let mut run = Conversion {
            config: &self.config,
            resolver,
            registry: StyleRegistry::new(),
            line: LineContext::default(),
            doc: TeiDocument::new(),
        };

        for (index, page) in tree.pages.into_iter().enumerate() {
            let page_no = index + 1;
            if self.config.stops_before(page_no) {
                log::info!("Stopping after {} pages", page_no - 1);
                break;
            }
            run.page(page_no, page)?;
        }

        let Conversion { registry, mut doc, .. } = run;
        doc.renditions = registry
            .iter()
            .map(|(id, style)| Rendition {
                id: id.to_string(),
                css: style.to_css(),
            })
            .collect();
        log::info!(
            "Converted {} pages, {} styles",
            doc.pages.len(),
            doc.renditions.len()
        );
        Ok(doc)
    }
}

/// State of one document conversion.
struct Conversion<'a> {
    config: &'a ConversionConfig,
    resolver: StyleResolver<'a>,
    registry: StyleRegistry,
    line: LineContext,
    doc: TeiDocument,
}

impl Conversion<'_> {
    fn page(&mut self, page_no: usize, page: Page) -> Result<()> {
        let id = page_id(page_no);
        log::debug!("Converting page {} ({})", page.id, id);

        let mut zones = Vec::new();
        let mut textboxes = Vec::with_capacity(page.textboxes.len());
        for (index, textbox) in page.textboxes.into_iter().enumerate() {
            textboxes.push(self.textbox(page_no, index + 1, textbox, &mut zones)?);
        }

        self.doc.coord_surfaces.push(CoordSurface {
            page_id: id.clone(),
            coords: page.coords,
            zones,
        });
        self.doc.scan_surfaces.push(ScanSurface {
            id: id.clone(),
            sequence_no: page.id,
            native_no: page.label.clone(),
        });
        self.doc.pages.push(TeiPage {
            id,
            label: page.label,
            textboxes,
        });
        Ok(())
    }

    fn textbox(
        &mut self,
        page_no: usize,
        tb_no: usize,
        textbox: TextBox,
        zones: &mut Vec<Zone>,
    ) -> Result<TeiTextBox> {
        let id = textbox_id(page_no, tb_no);
        zones.push(Zone::new(id.clone(), textbox.coords));

        let mut lines = Vec::with_capacity(textbox.lines.len());
        for (index, line) in textbox.lines.into_iter().enumerate() {
            let line_id = line_id(page_no, tb_no, index + 1);
            let coords = line.coords.clone();
            let segments = self.line(page_no, tb_no, index + 1, line, zones)?;
            zones.push(Zone::new(line_id.clone(), coords));
            lines.push(TeiLine {
                id: line_id,
                segments,
            });
        }
        Ok(TeiTextBox { id, lines })
    }

    fn line(
        &mut self,
        page_no: usize,
        tb_no: usize,
        line_no: usize,
        line: TextLine,
        zones: &mut Vec<Zone>,
    ) -> Result<Vec<TeiSegment>> {
        let bbox = line.bbox;
        let segmented = segment_line(line.chars);
        self.update_line_context(segmented.metrics.base, segmented.metrics.size, bbox);

        let mut segments = Vec::with_capacity(segmented.segments.len());
        let mut word_no = 0;
        for segment in segmented.segments {
            match segment {
                Segment::Space => segments.push(TeiSegment::Space),
                Segment::Word(chars) => {
                    word_no += 1;
                    let id = word_id(page_no, tb_no, line_no, word_no);
                    let bbox = word_bbox(&chars)?;
                    segments.push(self.word(id.clone(), chars));
                    zones.push(Zone::new(id, Some(bbox.zone())));
                },
            }
        }
        Ok(segments)
    }

    fn update_line_context(&mut self, base: Option<f64>, size: Option<f64>, bbox: Option<BBox>) {
        match base {
            Some(base) => self.line.base = Some(base),
            None => log::warn!(
                "Empty line? No character base in line {:?}, keeping base {:?}",
                bbox,
                self.line.base
            ),
        }
        match (self.config.default_font_size, size) {
            (Some(default), _) => self.line.size = default,
            (None, Some(size)) => self.line.size = size,
            (None, None) => log::warn!(
                "Empty line? No character size in line {:?}, keeping size {}",
                bbox,
                self.line.size
            ),
        }
    }

    fn word(&mut self, id: String, chars: Vec<TextChar>) -> TeiSegment {
        let chars = self
            .resolver
            .resolve_word(chars, &self.line)
            .into_iter()
            .map(|resolved| TeiChar {
                text: resolved.ch.text,
                rendition: self.registry.intern(resolved.style),
            })
            .collect();
        TeiSegment::Word { id, chars }
    }
}

/// Union of the character boxes of a word.
fn word_bbox(chars: &[TextChar]) -> Result<BBox> {
    BBox::union_all(chars.iter().filter_map(|c| c.bbox.as_ref())).ok_or_else(|| {
        let text: String = chars.iter().map(|c| c.text.as_str()).collect();
        Error::geometry(text, "word without character boxes")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn word_chars(text: &str, x: f64, size: f64) -> Vec<TextChar> {
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let x0 = x + i as f64 * 5.0;
                TextChar::new(c.to_string(), "ABCDEF+Garamond-Roman", size)
                    .with_bbox(BBox::new(x0, 100.0, x0 + 5.0, 110.0))
                    .with_origin(Point::new(x0, 100.0))
            })
            .collect()
    }

    fn one_line_page(chars: Vec<TextChar>) -> Page {
        let line = TextLine::new(Some(BBox::new(0.0, 100.0, 200.0, 110.0)), chars);
        let bbox = BBox::new(0.0, 90.0, 200.0, 120.0);
        Page::new("7").with_textbox(TextBox::new(Some(bbox), vec![line]))
    }

    #[test]
    fn test_ids() {
        assert_eq!(page_id(3), "page_00003");
        assert_eq!(textbox_id(3, 12), "tb_00003_012");
        assert_eq!(line_id(3, 12, 4), "line_00003_012_004");
        assert_eq!(word_id(3, 12, 4, 7), "wd_00003_012_004_07");
    }

    #[test]
    fn test_word_counter_skips_spaces() {
        let mut chars = word_chars("ab", 0.0, 10.0);
        chars.push(TextChar::new(" ", "F", 10.0));
        chars.extend(word_chars("cd", 20.0, 10.0));
        let doc = TeiConverter::new()
            .convert(PageTree::new(vec![one_line_page(chars)]))
            .unwrap();
        let line = doc.lines().next().unwrap();
        assert_eq!(line.segments.len(), 3);
        match &line.segments[2] {
            TeiSegment::Word { id, .. } => assert_eq!(id, "wd_00001_001_001_02"),
            other => panic!("unexpected segment {:?}", other),
        }
    }

    #[test]
    fn test_zone_order() {
        let mut chars = word_chars("ab", 0.0, 10.0);
        chars.push(TextChar::new(" ", "F", 10.0));
        chars.extend(word_chars("c", 20.0, 10.0));
        let doc = TeiConverter::new()
            .convert(PageTree::new(vec![one_line_page(chars)]))
            .unwrap();
        let ids: Vec<&str> = doc.coord_surfaces[0].zones.iter().map(|z| z.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "tb_00001_001",
                "wd_00001_001_001_01",
                "wd_00001_001_001_02",
                "line_00001_001_001"
            ]
        );
        let word = &doc.coord_surfaces[0].zones[1];
        assert_eq!(word.coords, Some(BBox::new(0.0, 100.0, 10.0, 110.0).zone()));
    }

    #[test]
    fn test_counters_reset() {
        let line = || TextLine::new(None, word_chars("a", 0.0, 10.0));
        let page = || {
            Page::new("p")
                .with_textbox(TextBox::new(None, vec![line(), line()]))
                .with_textbox(TextBox::new(None, vec![line()]))
        };
        let doc = TeiConverter::new()
            .convert(PageTree::new(vec![page(), page()]))
            .unwrap();
        let ids: Vec<&str> = doc.lines().map(|l| l.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "line_00001_001_001",
                "line_00001_001_002",
                "line_00001_002_001",
                "line_00002_001_001",
                "line_00002_001_002",
                "line_00002_002_001"
            ]
        );
    }

    #[test]
    fn test_stop_after() {
        let pages = (1..=4)
            .map(|n| one_line_page(word_chars("x", 0.0, 10.0)).with_label(n.to_string()))
            .collect();
        let config = ConversionConfig::new().with_stop_after(Some(2));
        let doc = TeiConverter::new()
            .with_config(config)
            .convert(PageTree::new(pages))
            .unwrap();
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.scan_surfaces.len(), 2);
        assert_eq!(doc.coord_surfaces.len(), 2);
    }

    #[test]
    fn test_word_without_boxes_is_fatal() {
        let chars = vec![TextChar::new("a", "F", 10.0)];
        let err = TeiConverter::new()
            .convert(PageTree::new(vec![one_line_page(chars)]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry { .. }));
    }

    #[test]
    fn test_empty_line_keeps_previous_context() {
        let mut big = word_chars("A", 0.0, 10.0);
        big.extend(word_chars("B", 5.0, 10.0));
        let small: Vec<TextChar> = word_chars("CD", 20.0, 7.0)
            .into_iter()
            .map(|mut c| {
                c.origin = None;
                c.size = 0.0;
                c
            })
            .collect();
        let textbox = TextBox::new(
            None,
            vec![TextLine::new(None, big), TextLine::new(None, small)],
        );
        let doc = TeiConverter::new()
            .convert(PageTree::new(vec![Page::new("1").with_textbox(textbox)]))
            .unwrap();
        // no statistics on the second line: measured against the first
        // line's size 10.0 its size-less capitals count as small caps
        assert_eq!(doc.lines().nth(1).unwrap().text(), "cd");
    }

    #[test]
    fn test_default_font_size_overrides_measured() {
        let chars = word_chars("AB", 0.0, 7.0);
        let config = ConversionConfig::new().with_default_font_size(Some(10.0));
        let doc = TeiConverter::new()
            .with_config(config)
            .convert(PageTree::new(vec![one_line_page(chars)]))
            .unwrap();
        // shrunken capitals against the configured size: small caps, folded
        assert_eq!(doc.lines().next().unwrap().text(), "ab");
        let styles = doc.rendition_styles().unwrap();
        assert!(styles[0].1.smallcaps);
        assert_eq!(styles[0].1.size, 10.0);
    }
}
