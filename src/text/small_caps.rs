//! Small-caps case normalisation.
//!
//! Small caps are set as shrunken capitals, so the logical case of a
//! small-caps character has to be recovered from its size. Two policies
//! exist, depending on where the small-caps flag came from:
//!
//! | source             | rule                                              | fold  |
//! |--------------------|---------------------------------------------------|-------|
//! | font name/geometry | size < 0.8 × line size                            | lower |
//! |                    | size > 1.2 × line size                            | upper |
//! |                    | font name contains `SC750`                        | upper |
//! |                    | size = line size, word of mixed sizes             | none, warn |
//! | replacement table  | size = word size and size < 0.9 × line size       | lower |
//! |                    | size ≥ line size                                  | upper |
//! |                    | otherwise                                         | lower |
//!
//! A small-caps character always ends up with the line size.

use crate::layout::TextChar;
use crate::text::segmenter::Histogram;

/// Below this share of the line size a character is lower case (and, at the
/// base line, a shrunken capital marks small caps).
pub const LOWER_CASE_RATIO: f64 = 0.8;

/// Below this share of the line size a table-flagged character at word size
/// is lower case.
pub const TABLE_LOWER_CASE_RATIO: f64 = 0.9;

/// Above this share of the line size a character is upper case.
pub const UPPER_CASE_RATIO: f64 = 1.2;

/// Marker of home-made pseudo small-caps fonts whose glyphs are all capitals.
pub const PSEUDO_SMALL_CAPS_MARKER: &str = "SC750";

/// Whether all characters of a word share one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// At least two different sizes
    Mixed,
    /// One size (or none)
    Clean,
}

/// Dominant size of a word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordSize {
    /// Most frequent positive size; ties go to the smaller size
    pub size: f64,
    /// Size classification
    pub class: SizeClass,
}

/// Compute the dominant size of a word.
///
/// # Examples
///
/// ```
/// use pdf_tei::layout::TextChar;
/// use pdf_tei::text::{word_size, SizeClass};
///
/// let word: Vec<TextChar> = [10.0, 7.0, 7.0, 10.0]
///     .iter()
///     .map(|s| TextChar::new("x", "F", *s))
///     .collect();
/// let ws = word_size(&word);
/// assert_eq!(ws.size, 7.0);
/// assert_eq!(ws.class, SizeClass::Mixed);
/// ```
pub fn word_size(chars: &[TextChar]) -> WordSize {
    let mut sizes = Histogram::new();
    for ch in chars.iter().filter(|c| c.size > 0.0) {
        sizes.add(ch.size);
    }
    WordSize {
        size: sizes.mode_prefer_smaller().unwrap_or(0.0),
        class: if sizes.distinct() > 1 {
            SizeClass::Mixed
        } else {
            SizeClass::Clean
        },
    }
}

/// Where a character's small-caps flag came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallCapsSource {
    /// Font name or shrunken-capital geometry
    Heuristic,
    /// A reviewed replacement table
    ReplacementTable,
}

/// Case decision for a small-caps character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFold {
    /// Fold to lower case
    Lower,
    /// Fold to upper case
    Upper,
    /// Leave as is
    Unchanged,
    /// Mixed-size word at line size: left as is, reported
    Ambiguous,
}

/// Decide the case of a small-caps character of size `size`.
pub fn decide_case(
    source: SmallCapsSource,
    size: f64,
    word: &WordSize,
    line_size: f64,
    fontname: &str,
) -> CaseFold {
    match source {
        SmallCapsSource::Heuristic => {
            if size < line_size * LOWER_CASE_RATIO {
                CaseFold::Lower
            } else if size > line_size * UPPER_CASE_RATIO {
                CaseFold::Upper
            } else if fontname.contains(PSEUDO_SMALL_CAPS_MARKER) {
                CaseFold::Upper
            } else if size == line_size && word.class == SizeClass::Mixed {
                CaseFold::Ambiguous
            } else {
                CaseFold::Unchanged
            }
        },
        SmallCapsSource::ReplacementTable => {
            if size == word.size && size < line_size * TABLE_LOWER_CASE_RATIO {
                CaseFold::Lower
            } else if size >= line_size {
                CaseFold::Upper
            } else {
                CaseFold::Lower
            }
        },
    }
}

/// Fold the case of a small-caps character in place and force its size to
/// the line size.
///
/// Ambiguous characters are left unchanged and reported with a warning.
pub fn normalize_case(
    ch: &mut TextChar,
    source: SmallCapsSource,
    word: &WordSize,
    line_size: f64,
) -> CaseFold {
    let fold = decide_case(source, ch.size, word, line_size, &ch.font);
    match fold {
        CaseFold::Lower => ch.text = ch.text.to_lowercase(),
        CaseFold::Upper => ch.text = ch.text.to_uppercase(),
        CaseFold::Ambiguous => log::warn!(
            "Ambiguous small caps, upper case suggested but not applied ({}): \
             font: {}, size: {}, line size: {}, cid: {}",
            ch.text,
            ch.font,
            ch.size,
            line_size,
            ch.cid
        ),
        CaseFold::Unchanged => {},
    }
    ch.size = line_size;
    fold
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN: WordSize = WordSize {
        size: 10.0,
        class: SizeClass::Clean,
    };

    #[test]
    fn test_word_size_empty() {
        let ws = word_size(&[]);
        assert_eq!(ws.size, 0.0);
        assert_eq!(ws.class, SizeClass::Clean);
    }

    #[test]
    fn test_word_size_majority() {
        let word: Vec<TextChar> = [8.0, 10.0, 10.0]
            .iter()
            .map(|s| TextChar::new("a", "F", *s))
            .collect();
        assert_eq!(word_size(&word).size, 10.0);
    }

    #[test]
    fn test_word_size_ignores_unknown_sizes() {
        let word = vec![TextChar::new("a", "F", 0.0), TextChar::new("b", "F", 9.0)];
        assert_eq!(
            word_size(&word),
            WordSize {
                size: 9.0,
                class: SizeClass::Clean
            }
        );
    }

    #[test]
    fn test_heuristic_thresholds() {
        let h = SmallCapsSource::Heuristic;
        assert_eq!(decide_case(h, 7.9, &CLEAN, 10.0, "F"), CaseFold::Lower);
        assert_eq!(decide_case(h, 8.0, &CLEAN, 10.0, "F"), CaseFold::Unchanged);
        assert_eq!(decide_case(h, 12.5, &CLEAN, 10.0, "F"), CaseFold::Upper);
        assert_eq!(decide_case(h, 9.0, &CLEAN, 10.0, "X+Garamond-SC750"), CaseFold::Upper);
    }

    #[test]
    fn test_heuristic_line_size_clean_word_unchanged() {
        let h = SmallCapsSource::Heuristic;
        assert_eq!(decide_case(h, 10.0, &CLEAN, 10.0, "F"), CaseFold::Unchanged);
    }

    #[test]
    fn test_table_policy() {
        let t = SmallCapsSource::ReplacementTable;
        let word = WordSize {
            size: 8.0,
            class: SizeClass::Mixed,
        };
        assert_eq!(decide_case(t, 8.0, &word, 10.0, "F"), CaseFold::Lower);
        assert_eq!(decide_case(t, 9.5, &word, 10.0, "F"), CaseFold::Lower);
        assert_eq!(decide_case(t, 10.0, &word, 10.0, "F"), CaseFold::Upper);
        assert_eq!(decide_case(t, 11.0, &word, 10.0, "F"), CaseFold::Upper);
    }

    #[test]
    fn test_normalize_forces_line_size() {
        let mut ch = TextChar::new("A", "F", 7.0);
        let fold = normalize_case(&mut ch, SmallCapsSource::Heuristic, &CLEAN, 10.0);
        assert_eq!(fold, CaseFold::Lower);
        assert_eq!(ch.text, "a");
        assert_eq!(ch.size, 10.0);
    }

    #[test]
    fn test_normalize_ambiguous_keeps_text() {
        let mixed = WordSize {
            size: 7.0,
            class: SizeClass::Mixed,
        };
        let mut ch = TextChar::new("b", "F", 10.0);
        let fold = normalize_case(&mut ch, SmallCapsSource::Heuristic, &mixed, 10.0);
        assert_eq!(fold, CaseFold::Ambiguous);
        assert_eq!(ch.text, "b");
    }
}
