//! Converters from page trees to TEI.
//!
//! [`TeiConverter`] turns a [`PageTree`](crate::layout::PageTree) into a
//! [`TeiDocument`], which serialises itself with
//! [`TeiDocument::to_xml`].
//!
//! # Examples
//!
//! ```no_run
//! use pdf_tei::config::ConversionConfig;
//! use pdf_tei::converters::TeiConverter;
//! use pdf_tei::fonts::ReplacementTable;
//! use pdf_tei::layout::read_layout_file;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tree = read_layout_file("edition.xml")?;
//! let converter = TeiConverter::new()
//!     .with_config(ConversionConfig::new().with_stop_after(Some(10)))
//!     .with_replacements(ReplacementTable::from_file("fontindex.htm")?);
//! converter.convert(tree)?.write_to_file("edition_tei.xml")?;
//! # Ok(())
//! # }
//! ```

pub mod tei;
pub mod tei_document;

pub use tei::{line_id, page_id, textbox_id, word_id, TeiConverter};
pub use tei_document::{
    CoordSurface, Rendition, ScanSurface, TeiChar, TeiDocument, TeiLine, TeiPage, TeiSegment,
    TeiTextBox, Zone,
};
