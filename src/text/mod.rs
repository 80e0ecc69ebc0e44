//! Text reconstruction.
//!
//! Lines are split into words and spaces ([`segment_line`]), then each
//! word's characters get a resolved [`Style`](crate::style::Style)
//! ([`StyleResolver`]). Small-caps characters have their logical case
//! recovered from their size ([`normalize_case`]).

pub mod segmenter;
pub mod small_caps;
pub mod style_resolver;

pub use segmenter::{segment_line, Histogram, LineMetrics, Segment, SegmentedLine};
pub use small_caps::{
    decide_case, normalize_case, word_size, CaseFold, SizeClass, SmallCapsSource, WordSize,
};
pub use style_resolver::{is_upper, style_from_fontname, LineContext, ResolvedChar, StyleResolver};
