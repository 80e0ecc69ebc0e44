//! Character styles and their deduplication.
//!
//! A [`Style`] describes how a character is set: font family, size, weight,
//! slant, small caps and vertical alignment. Styles compare equal when all
//! flags and the family match and the sizes differ by less than the style's
//! size tolerance. The [`StyleRegistry`] interns styles per document and
//! hands out `style_N` ids.

pub mod css;
pub mod registry;

pub use css::{parse_declarations, CssError, Declaration};
pub use registry::StyleRegistry;

use crate::config::DEFAULT_SIZE_TOLERANCE;
use crate::error::{Error, Result};
use crate::geometry::fmt_coord;
use std::fmt;

/// Vertical alignment relative to the line base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    /// On the base line
    #[default]
    Baseline,
    /// Raised
    Super,
    /// Lowered
    Sub,
}

impl VerticalAlign {
    /// CSS value (`baseline`, `super`, `sub`).
    pub fn as_css(&self) -> &'static str {
        match self {
            VerticalAlign::Baseline => "baseline",
            VerticalAlign::Super => "super",
            VerticalAlign::Sub => "sub",
        }
    }
}

/// Typographic style of one character.
#[derive(Debug, Clone)]
pub struct Style {
    /// Font family (font name without subset prefix and style suffix)
    pub family: String,
    /// Font size in points
    pub size: f64,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Small caps
    pub smallcaps: bool,
    /// Vertical alignment
    pub valign: VerticalAlign,
    size_tolerance: f64,
}

impl Style {
    /// Create a plain style.
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
            smallcaps: false,
            valign: VerticalAlign::Baseline,
            size_tolerance: DEFAULT_SIZE_TOLERANCE,
        }
    }

    /// Set the size tolerance used by equality.
    pub fn with_size_tolerance(mut self, tolerance: f64) -> Self {
        self.size_tolerance = tolerance;
        self
    }

    /// Size tolerance used by equality.
    pub fn size_tolerance(&self) -> f64 {
        self.size_tolerance
    }

    /// Render as a CSS declaration list.
    ///
    /// Only non-default flags are written.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_tei::style::{Style, VerticalAlign};
    ///
    /// let mut style = Style::new("Garamond", 10.0);
    /// style.italic = true;
    /// style.valign = VerticalAlign::Super;
    /// assert_eq!(
    ///     style.to_css(),
    ///     "font-family: 'Garamond'; font-size: 10.0pt; font-style: italic; vertical-align: super"
    /// );
    /// ```
    pub fn to_css(&self) -> String {
        let mut decls = vec![
            format!("font-family: '{}'", self.family),
            format!("font-size: {}pt", fmt_coord(self.size)),
        ];
        if self.bold {
            decls.push("font-weight: bold".to_string());
        }
        if self.italic {
            decls.push("font-style: italic".to_string());
        }
        if self.smallcaps {
            decls.push("font-variant: small-caps".to_string());
        }
        if self.valign != VerticalAlign::Baseline {
            decls.push(format!("vertical-align: {}", self.valign.as_css()));
        }
        decls.join("; ")
    }

    /// Rebuild a style from a declaration list.
    ///
    /// Unknown properties are ignored.
    pub fn from_css(css: &str) -> Result<Self> {
        let mut style = Style::new("", 0.0);
        for (property, value) in parse_declarations(css)? {
            match property.as_str() {
                "font-family" => style.family = value,
                "font-size" => {
                    let number = value.trim_end_matches("pt");
                    style.size = number.parse().map_err(|_| {
                        Error::InvalidInput(format!("bad font-size {:?}", value))
                    })?;
                },
                "font-weight" => style.bold = value == "bold",
                "font-style" => style.italic = value == "italic",
                "font-variant" => style.smallcaps = value == "small-caps",
                "vertical-align" => {
                    style.valign = match value.as_str() {
                        "super" => VerticalAlign::Super,
                        "sub" => VerticalAlign::Sub,
                        _ => VerticalAlign::Baseline,
                    }
                },
                other => log::debug!("Ignoring CSS property {}", other),
            }
        }
        Ok(style)
    }
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family
            && self.bold == other.bold
            && self.italic == other.italic
            && self.smallcaps == other.smallcaps
            && self.valign == other.valign
            && (self.size - other.size).abs() < self.size_tolerance
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
