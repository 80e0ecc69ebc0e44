//! Error types for the conversion library.
//!
//! This module defines the errors that abort the conversion of a document.
//! Conditions the pipeline can recover from (a font without an enumerable
//! glyph map, an ambiguous small-caps character, an empty text node) are not
//! errors: they are reported through typed outcomes and the `log` facade.

use crate::style::css::CssError;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while correcting fonts or converting a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bounding box or origin string that cannot be parsed
    #[error("Invalid geometry '{value}': {reason}")]
    InvalidGeometry {
        /// The offending attribute value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A correction strategy selected a table that is not part of the table set
    #[error("Correction table '{table}' required for font '{font}' is not available")]
    MissingCorrectionTable {
        /// Name of the missing table
        table: String,
        /// Font that triggered the lookup
        font: String,
    },

    /// Input document does not have the expected shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// XML reading or writing failed
    #[error("XML error: {0}")]
    Xml(String),

    /// Rendition declaration list could not be parsed
    #[error("CSS error: {0}")]
    Css(#[from] CssError),

    /// JSON (de)serialisation of correction tables failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an [`Error::InvalidGeometry`] for `value`.
    pub fn geometry(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidGeometry {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}
