//! TEI document model and serialisation.
//!
//! The converter fills a [`TeiDocument`]; [`TeiDocument::to_xml`] renders it
//! with the fixed header skeleton, the two facsimile sections and the body.

use crate::error::Result;
use crate::geometry::ZoneCoords;
use crate::style::Style;
use quick_xml::escape::escape;
use std::io::Write;
use std::path::Path;

/// TEI namespace.
pub const TEI_NS: &str = "http://www.tei-c.org/ns/1.0";

/// Schema referenced by the `xml-model` processing instructions.
pub const TEI_ALL_RNG: &str =
    "http://www.tei-c.org/release/xml/tei/custom/schema/relaxng/tei_all.rng";

const RELAXNG_NS: &str = "http://relaxng.org/ns/structure/1.0";
const SCHEMATRON_NS: &str = "http://purl.oclc.org/dsdl/schematron";

/// One `rendition` record of the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendition {
    /// Style id (`style_N`)
    pub id: String,
    /// CSS declaration list
    pub css: String,
}

/// A facsimile zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    /// `xml:id` of the zone
    pub id: String,
    /// Coordinates, `None` if the element had no box
    pub coords: Option<ZoneCoords>,
}

impl Zone {
    /// Create a zone.
    pub fn new(id: impl Into<String>, coords: Option<ZoneCoords>) -> Self {
        Self {
            id: id.into(),
            coords,
        }
    }
}

/// Surface of the `#facsScan` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSurface {
    /// `xml:id` (`page_NNNNN`)
    pub id: String,
    /// Page id of the input tree (scan number)
    pub sequence_no: String,
    /// Printed page label
    pub native_no: Option<String>,
}

/// Surface of the `#facsCoor` section.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordSurface {
    /// Page id the surface belongs to
    pub page_id: String,
    /// Page coordinates
    pub coords: Option<ZoneCoords>,
    /// Zones of textboxes, words and lines, in emission order
    pub zones: Vec<Zone>,
}

/// A `c` element.
#[derive(Debug, Clone, PartialEq)]
pub struct TeiChar {
    /// Character text
    pub text: String,
    /// Style id without the leading `#`
    pub rendition: String,
}

/// A `seg` element.
#[derive(Debug, Clone, PartialEq)]
pub enum TeiSegment {
    /// `seg[type=space]`
    Space,
    /// `seg[type=alphaNum]`
    Word {
        /// Word id (`wd_…`)
        id: String,
        /// Characters
        chars: Vec<TeiChar>,
    },
}

impl TeiSegment {
    /// Text of the segment.
    pub fn text(&self) -> String {
        match self {
            TeiSegment::Space => " ".to_string(),
            TeiSegment::Word { chars, .. } => chars.iter().map(|c| c.text.as_str()).collect(),
        }
    }
}

/// An `l` element.
#[derive(Debug, Clone, PartialEq)]
pub struct TeiLine {
    /// Line id (`line_…`)
    pub id: String,
    /// Segments
    pub segments: Vec<TeiSegment>,
}

impl TeiLine {
    /// Text of the line.
    pub fn text(&self) -> String {
        self.segments.iter().map(TeiSegment::text).collect()
    }
}

/// A `div[type=textbox]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TeiTextBox {
    /// Textbox id (`tb_…`)
    pub id: String,
    /// Lines
    pub lines: Vec<TeiLine>,
}

/// A `div[type=page]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TeiPage {
    /// Page id (`page_…`)
    pub id: String,
    /// Printed page label (`n`)
    pub label: Option<String>,
    /// Textboxes
    pub textboxes: Vec<TeiTextBox>,
}

/// A converted document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeiDocument {
    /// Style records, in first-use order
    pub renditions: Vec<Rendition>,
    /// `#facsScan` surfaces
    pub scan_surfaces: Vec<ScanSurface>,
    /// `#facsCoor` surfaces
    pub coord_surfaces: Vec<CoordSurface>,
    /// Body pages
    pub pages: Vec<TeiPage>,
}

impl TeiDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines of the body, in document order.
    pub fn lines(&self) -> impl Iterator<Item = &TeiLine> {
        self.pages
            .iter()
            .flat_map(|p| p.textboxes.iter())
            .flat_map(|tb| tb.lines.iter())
    }

    /// Rebuild the styles of the rendition records.
    pub fn rendition_styles(&self) -> Result<Vec<(String, Style)>> {
        self.renditions
            .iter()
            .map(|r| Ok((r.id.clone(), Style::from_css(&r.css)?)))
            .collect()
    }

    /// Write the document to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_xml())?;
        Ok(())
    }

    /// Write the document to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        out.write_all(self.to_xml().as_bytes())?;
        Ok(())
    }

    /// Serialise the document.
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        for schematypens in [RELAXNG_NS, SCHEMATRON_NS] {
            xml.push_str(&format!(
                "<?xml-model href=\"{}\" type=\"application/xml\" schematypens=\"{}\"?>\n",
                TEI_ALL_RNG, schematypens
            ));
        }
        xml.push_str(&format!("<TEI xmlns=\"{}\">\n", TEI_NS));
        self.push_header(&mut xml);
        self.push_scan_facsimile(&mut xml);
        self.push_coord_facsimile(&mut xml);

        xml.push_str("<text>\n<body>\n");
        for page in &self.pages {
            push_page(&mut xml, page);
        }
        xml.push_str("</body>\n</text>\n</TEI>\n");
        xml
    }

    fn push_header(&self, xml: &mut String) {
        xml.push_str(concat!(
            "<teiHeader>\n",
            "<fileDesc>\n",
            "<titleStmt>\n <title></title>\n</titleStmt>\n",
            "<publicationStmt>\n  <p></p>\n</publicationStmt>\n",
            "<sourceDesc>\n  <p></p>\n</sourceDesc>\n",
            "</fileDesc>\n",
            "<encodingDesc>\n",
            "<styleDefDecl scheme=\"css\" schemeVersion=\"2.1\"/>\n",
            "<editorialDecl>\n",
            "<interpretation>\n",
            " <ab>\n",
            "  <interpGrp>\n",
            "   <desc>Facsimile types</desc>\n",
            "   <interp xml:id=\"facsScan\">list of scans</interp>\n",
            "   <interp xml:id=\"facsCoor\">coordinates</interp>\n",
            "  </interpGrp>\n",
            "  <interpGrp>\n",
            "   <desc>Scan labels</desc>\n",
            "   <interp xml:id=\"mgh_ident\">MGH identifier for scan</interp>\n",
            "   <interp xml:id=\"sequenceNo\">scan number</interp>\n",
            "   <interp xml:id=\"nativeNo\">page number</interp>\n",
            "  </interpGrp>\n",
            " </ab>\n",
            "</interpretation>\n",
            "</editorialDecl>\n",
            "<tagsDecl>\n",
        ));
        for rendition in &self.renditions {
            xml.push_str(&format!(
                "<rendition xml:id=\"{}\">{}</rendition>\n",
                escape(&rendition.id),
                escape(&rendition.css)
            ));
        }
        xml.push_str("</tagsDecl>\n</encodingDesc>\n</teiHeader>\n");
    }

    fn push_scan_facsimile(&self, xml: &mut String) {
        xml.push_str("<facsimile ana=\"#facsScan\">\n");
        for surface in &self.scan_surfaces {
            xml.push_str(&format!(" <surface xml:id=\"{}\">\n", escape(&surface.id)));
            xml.push_str("  <desc>\n   <list ana=\"#mgh_ident\">\n");
            xml.push_str("    <label ana=\"#sequenceNo\"/>\n");
            xml.push_str(&format!("    <item>{}</item>\n", escape(&surface.sequence_no)));
            if let Some(ref native) = surface.native_no {
                xml.push_str("    <label ana=\"#nativeNo\"/>\n");
                xml.push_str(&format!("    <item>{}</item>\n", escape(native)));
            }
            xml.push_str("   </list>\n  </desc>\n </surface>\n");
        }
        xml.push_str("</facsimile>\n");
    }

    fn push_coord_facsimile(&self, xml: &mut String) {
        xml.push_str("<facsimile ana=\"#facsCoor\">\n");
        for surface in &self.coord_surfaces {
            xml.push_str(&format!(
                " <surface{} sameAs=\"#{}\">\n",
                coord_attrs(surface.coords.as_ref()),
                escape(&surface.page_id)
            ));
            for zone in &surface.zones {
                xml.push_str(&format!(
                    "  <zone{} xml:id=\"{}\"/>\n",
                    coord_attrs(zone.coords.as_ref()),
                    escape(&zone.id)
                ));
            }
            xml.push_str(" </surface>\n");
        }
        xml.push_str("</facsimile>\n");
    }
}

fn coord_attrs(coords: Option<&ZoneCoords>) -> String {
    match coords {
        Some(c) => format!(
            " ulx=\"{}\" uly=\"{}\" lrx=\"{}\" lry=\"{}\"",
            escape(&c.ulx),
            escape(&c.uly),
            escape(&c.lrx),
            escape(&c.lry)
        ),
        None => String::new(),
    }
}

fn push_page(xml: &mut String, page: &TeiPage) {
    let n = page
        .label
        .as_deref()
        .map(|label| format!(" n=\"{}\"", escape(label)))
        .unwrap_or_default();
    xml.push_str(&format!("<div type=\"page\"{} sameAs=\"#{}\">\n", n, escape(&page.id)));
    for textbox in &page.textboxes {
        xml.push_str(&format!(
            "<div type=\"textbox\" sameAs=\"#{}\">\n",
            escape(&textbox.id)
        ));
        for line in &textbox.lines {
            xml.push_str(&format!("<l sameAs=\"#{}\">\n", escape(&line.id)));
            for segment in &line.segments {
                match segment {
                    TeiSegment::Space => xml.push_str("<seg type=\"space\"> </seg>\n"),
                    TeiSegment::Word { id, chars } => {
                        xml.push_str(&format!(
                            "<seg type=\"alphaNum\" sameAs=\"#{}\">\n",
                            escape(id)
                        ));
                        for ch in chars {
                            xml.push_str(&format!(
                                "<c rendition=\"#{}\">{}</c>",
                                escape(&ch.rendition),
                                escape(&ch.text)
                            ));
                        }
                        xml.push_str("\n</seg>\n");
                    },
                }
            }
            xml.push_str("</l>\n");
        }
        xml.push_str("</div>\n");
    }
    xml.push_str("</div>\n");
}
