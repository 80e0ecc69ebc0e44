//! Page tree produced by text extraction.
//!
//! This module provides:
//! - the page → textbox → line → character model
//! - a reader for the extractor's layout XML

pub mod pdfminer;
pub mod text_block;

// Re-export main types
pub use pdfminer::{parse_layout_xml, read_layout_file};
pub use text_block::{Page, PageTree, TextBox, TextChar, TextLine};
