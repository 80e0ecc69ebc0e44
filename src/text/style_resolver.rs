//! Per-character style resolution.
//!
//! Each character of a word is resolved left to right:
//! 1. a base style is guessed from the font name;
//! 2. a soft hyphen becomes a visible hyphen (nothing else is applied);
//! 3. otherwise a matching replacement-table rule rewrites the text and
//!    merges its style flags;
//! 4. the vertical alignment is derived from the baseline and the rise;
//! 5. a shrunken capital at the base line is taken for small caps;
//! 6. small-caps characters get their case folded and the line size.

use crate::config::ConversionConfig;
use crate::fonts::{ReplacementTable, StyleFlag};
use crate::layout::TextChar;
use crate::style::{Style, VerticalAlign};
use crate::text::small_caps::{
    normalize_case, word_size, CaseFold, SmallCapsSource, WordSize, LOWER_CASE_RATIO,
};

const SOFT_HYPHEN: &str = "\u{00ad}";

/// Reference values of the line a word sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineContext {
    /// Dominant baseline y, `None` if unknown
    pub base: Option<f64>,
    /// Dominant (or configured) font size
    pub size: f64,
}

impl LineContext {
    /// Create a line context.
    pub fn new(base: Option<f64>, size: f64) -> Self {
        Self { base, size }
    }
}

/// A character with its resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedChar {
    /// The character, text and size possibly rewritten
    pub ch: TextChar,
    /// Resolved style
    pub style: Style,
    /// Case decision, for small-caps characters only
    pub case_fold: Option<CaseFold>,
}

/// Guess a style from a full font name.
///
/// The family is the name without its subset prefix (up to the first `+`)
/// and without the suffix after the last `-`.
///
/// # Examples
///
/// ```
/// use pdf_tei::text::style_from_fontname;
///
/// let style = style_from_fontname("ABCDEF+Garamond-BoldItalic", 0.01);
/// assert_eq!(style.family, "Garamond");
/// assert!(style.bold && style.italic && !style.smallcaps);
/// ```
pub fn style_from_fontname(fontname: &str, size_tolerance: f64) -> Style {
    let start = fontname.find('+').map_or(0, |pos| pos + 1);
    let end = match fontname.rfind('-') {
        Some(pos) if pos >= start => pos,
        _ => fontname.len(),
    };
    let lower = fontname.to_lowercase();

    let mut style = Style::new(&fontname[start..end], 0.0).with_size_tolerance(size_tolerance);
    style.smallcaps = fontname.contains("SC");
    style.italic = lower.contains("italic");
    style.bold = lower.contains("bold");
    style
}

/// True if `text` has cased characters and all of them are upper case.
pub fn is_upper(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// Resolves the styles of the characters of a word.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    config: &'a ConversionConfig,
    replacements: Option<&'a ReplacementTable>,
}

impl<'a> StyleResolver<'a> {
    /// Create a resolver without a replacement table.
    pub fn new(config: &'a ConversionConfig) -> Self {
        Self {
            config,
            replacements: None,
        }
    }

    /// Use reviewed replacements.
    pub fn with_replacements(mut self, replacements: &'a ReplacementTable) -> Self {
        self.replacements = Some(replacements);
        self
    }

    /// Resolve all characters of a word.
    ///
    /// The word size is computed once from the unmodified sizes.
    pub fn resolve_word(&self, chars: Vec<TextChar>, line: &LineContext) -> Vec<ResolvedChar> {
        let word = word_size(&chars);
        chars
            .into_iter()
            .map(|ch| self.resolve_char(ch, &word, line))
            .collect()
    }

    /// Resolve one character.
    pub fn resolve_char(
        &self,
        mut ch: TextChar,
        word: &WordSize,
        line: &LineContext,
    ) -> ResolvedChar {
        let mut style = style_from_fontname(&ch.font, self.config.size_tolerance);
        style.size = ch.size;
        let mut source = SmallCapsSource::Heuristic;

        if self.config.replace_soft_hyphen && ch.text == SOFT_HYPHEN {
            ch.text = "-".to_string();
        } else if let Some(rule) = self
            .replacements
            .and_then(|table| table.lookup(&ch.font, ch.text.trim(), ch.cid))
        {
            ch.text = rule.text.clone();
            for flag in &rule.flags {
                match flag {
                    StyleFlag::SmallCaps => {
                        style.smallcaps = true;
                        source = SmallCapsSource::ReplacementTable;
                    },
                    StyleFlag::Bold => style.bold = true,
                    StyleFlag::Italics => style.italic = true,
                    StyleFlag::Unknown(name) => log::warn!(
                        "Unknown style {:?} in replacement for {:?}: font {}, cid {}",
                        name,
                        ch.text,
                        ch.font,
                        ch.cid
                    ),
                }
            }
        }

        style.valign = self.vertical_align(&ch, line);
        if style.valign == VerticalAlign::Baseline
            && ch.size < line.size * LOWER_CASE_RATIO
            && is_upper(&ch.text)
        {
            style.smallcaps = true;
        }

        let case_fold = if style.smallcaps {
            let fold = normalize_case(&mut ch, source, word, line.size);
            style.size = line.size;
            Some(fold)
        } else {
            None
        };

        ResolvedChar {
            ch,
            style,
            case_fold,
        }
    }

    fn vertical_align(&self, ch: &TextChar, line: &LineContext) -> VerticalAlign {
        let tolerance = self.config.baseline_tolerance;
        let offset = match (ch.base(), line.base) {
            (Some(base), Some(line_base)) => base - line_base,
            _ => 0.0,
        };
        if offset > tolerance || ch.rise > tolerance {
            VerticalAlign::Super
        } else if offset < -tolerance || ch.rise < -tolerance {
            VerticalAlign::Sub
        } else {
            VerticalAlign::Baseline
        }
    }
}
