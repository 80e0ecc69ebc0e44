//! Word segmentation.
//!
//! Splits a line's characters into words and spaces:
//! - whitespace characters form a space segment (a run collapses into one);
//! - a bare `/` is a word of its own and ends the current word;
//! - everything else extends the current word.
//!
//! Characters with empty text are dropped. While scanning, size and baseline
//! histograms are collected for the line's dominant size and base.

use crate::layout::TextChar;
use crate::utils::safe_float_cmp;

/// A segment of a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// One or more whitespace characters, rendered as a single space
    Space,
    /// Characters of one word, left to right
    Word(Vec<TextChar>),
}

impl Segment {
    /// True for [`Segment::Word`].
    pub fn is_word(&self) -> bool {
        matches!(self, Segment::Word(_))
    }

    /// Text of the segment.
    pub fn text(&self) -> String {
        match self {
            Segment::Space => " ".to_string(),
            Segment::Word(chars) => chars.iter().map(|c| c.text.as_str()).collect(),
        }
    }
}

/// Occurrence counts of float values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    counts: Vec<(f64, usize)>,
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `value`.
    pub fn add(&mut self, value: f64) {
        match self.counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((value, 1)),
        }
    }

    /// Number of distinct values.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// True if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Most frequent value; equal counts go to the larger value.
    pub fn mode_prefer_larger(&self) -> Option<f64> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| safe_float_cmp(a.0, b.0)))
            .map(|(v, _)| *v)
    }

    /// Most frequent value; equal counts go to the smaller value.
    pub fn mode_prefer_smaller(&self) -> Option<f64> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| safe_float_cmp(b.0, a.0)))
            .map(|(v, _)| *v)
    }
}

/// Dominant base and size of a line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineMetrics {
    /// Most frequent baseline y, `None` if no character had an origin
    pub base: Option<f64>,
    /// Most frequent positive size, `None` if no character had one
    pub size: Option<f64>,
}

/// A segmented line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentedLine {
    /// Segments, left to right
    pub segments: Vec<Segment>,
    /// Dominant base and size
    pub metrics: LineMetrics,
}

impl SegmentedLine {
    /// Iterate over word segments only.
    pub fn words(&self) -> impl Iterator<Item = &[TextChar]> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Word(chars) => Some(chars.as_slice()),
            Segment::Space => None,
        })
    }
}

/// Segment one line.
///
/// # Examples
///
/// ```
/// use pdf_tei::layout::TextChar;
/// use pdf_tei::text::{segment_line, Segment};
///
/// let chars = ["a", "/", "b", " ", " ", "c"]
///     .iter()
///     .map(|t| TextChar::new(*t, "F", 10.0))
///     .collect();
/// let line = segment_line(chars);
/// let texts: Vec<String> = line.segments.iter().map(Segment::text).collect();
/// assert_eq!(texts, vec!["a", "/", "b", " ", "c"]);
/// assert_eq!(line.metrics.size, Some(10.0));
/// ```
pub fn segment_line(chars: Vec<TextChar>) -> SegmentedLine {
    let mut segments = Vec::new();
    let mut word: Vec<TextChar> = Vec::new();
    let mut sizes = Histogram::new();
    let mut bases = Histogram::new();

    for ch in chars {
        if ch.size > 0.0 {
            sizes.add(ch.size);
        }
        if let Some(base) = ch.base() {
            bases.add(base);
        }

        if ch.text.is_empty() {
            log::warn!(
                "Empty text dropped: font {}, cid {}, size {}",
                ch.font,
                ch.cid,
                ch.size
            );
            continue;
        }

        let trimmed = ch.text.trim();
        if trimmed.is_empty() {
            if !word.is_empty() {
                segments.push(Segment::Word(std::mem::take(&mut word)));
            }
            if segments.last() != Some(&Segment::Space) {
                segments.push(Segment::Space);
            }
        } else if trimmed == "/" {
            if !word.is_empty() {
                segments.push(Segment::Word(std::mem::take(&mut word)));
            }
            segments.push(Segment::Word(vec![ch]));
        } else {
            word.push(ch);
        }
    }
    if !word.is_empty() {
        segments.push(Segment::Word(word));
    }

    SegmentedLine {
        segments,
        metrics: LineMetrics {
            base: bases.mode_prefer_larger(),
            size: sizes.mode_prefer_larger(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn chars(texts: &[&str]) -> Vec<TextChar> {
        texts.iter().map(|t| TextChar::new(*t, "F", 10.0)).collect()
    }

    fn texts(line: &SegmentedLine) -> Vec<String> {
        line.segments.iter().map(Segment::text).collect()
    }

    #[test]
    fn test_words_and_spaces() {
        let line = segment_line(chars(&["a", "b", " ", "c"]));
        assert_eq!(texts(&line), vec!["ab", " ", "c"]);
    }

    #[test]
    fn test_whitespace_run_is_one_space() {
        let line = segment_line(chars(&[" ", "\t", "\n"]));
        assert_eq!(line.segments, vec![Segment::Space]);
    }

    #[test]
    fn test_slash_is_a_word() {
        let line = segment_line(chars(&["a", "/", "/", "b"]));
        assert_eq!(texts(&line), vec!["a", "/", "/", "b"]);
        assert!(line.segments.iter().all(Segment::is_word));
    }

    #[test]
    fn test_padded_slash_is_a_word() {
        let line = segment_line(chars(&["a", " / "]));
        assert_eq!(line.segments.len(), 2);
        assert_eq!(line.words().nth(1).unwrap()[0].text, " / ");
    }

    #[test]
    fn test_empty_text_is_dropped_but_counted() {
        let mut input = chars(&["a", "", "b"]);
        input[1].size = 12.0;
        input.push(TextChar::new("", "F", 12.0));
        let line = segment_line(input);
        assert_eq!(texts(&line), vec!["ab"]);
        // 10.0 twice, 12.0 twice: larger wins the tie
        assert_eq!(line.metrics.size, Some(12.0));
    }

    #[test]
    fn test_dominant_base() {
        let input = vec![
            TextChar::new("a", "F", 10.0).with_origin(Point::new(0.0, 100.0)),
            TextChar::new("b", "F", 10.0).with_origin(Point::new(1.0, 100.0)),
            TextChar::new("c", "F", 7.0).with_origin(Point::new(2.0, 104.0)),
        ];
        let line = segment_line(input);
        assert_eq!(line.metrics.base, Some(100.0));
        assert_eq!(line.metrics.size, Some(10.0));
    }

    #[test]
    fn test_empty_line_has_no_metrics() {
        let line = segment_line(Vec::new());
        assert!(line.segments.is_empty());
        assert_eq!(line.metrics, LineMetrics::default());
    }

    #[test]
    fn test_histogram_ties() {
        let mut h = Histogram::new();
        h.add(8.0);
        h.add(10.0);
        assert_eq!(h.mode_prefer_larger(), Some(10.0));
        assert_eq!(h.mode_prefer_smaller(), Some(8.0));
        h.add(10.0);
        assert_eq!(h.mode_prefer_smaller(), Some(10.0));
        assert_eq!(h.distinct(), 2);
    }
}
