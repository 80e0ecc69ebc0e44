//! Glyph-id to Unicode maps.
//!
//! A font coming out of the PDF interpreter can expose two maps: its own
//! enumerable glyph-id → Unicode table ([`CMap`]) and a secondary
//! [`UnicodeMap`] built from the font's ToUnicode stream. Font correction
//! rewrites one or both of them.

use regex::Regex;
use std::collections::BTreeMap;

/// A map from glyph ids (character codes) to Unicode strings.
///
/// Ordered by glyph id so that corrected maps print and compare
/// deterministically.
pub type CMap = BTreeMap<u32, String>;

/// Secondary Unicode map attached to a font.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnicodeMap {
    /// Glyph id → Unicode text
    pub cid_to_unichr: CMap,
}

impl UnicodeMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a ToUnicode CMap stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_tei::fonts::UnicodeMap;
    ///
    /// let map = UnicodeMap::from_cmap_stream(b"beginbfchar\n<0041> <0118>\nendbfchar");
    /// assert_eq!(map.get(0x41), Some("\u{118}"));
    /// ```
    pub fn from_cmap_stream(data: &[u8]) -> Self {
        Self {
            cid_to_unichr: parse_tounicode_cmap(data),
        }
    }

    /// Look up a glyph id.
    pub fn get(&self, cid: u32) -> Option<&str> {
        self.cid_to_unichr.get(&cid).map(String::as_str)
    }

    /// Insert or overwrite every entry of `entries`.
    pub fn update<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (u32, String)>,
    {
        self.cid_to_unichr.extend(entries);
    }

    /// Number of mapped glyph ids.
    pub fn len(&self) -> usize {
        self.cid_to_unichr.len()
    }

    /// True if nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.cid_to_unichr.is_empty()
    }
}

impl FromIterator<(u32, String)> for UnicodeMap {
    fn from_iter<T: IntoIterator<Item = (u32, String)>>(iter: T) -> Self {
        Self {
            cid_to_unichr: iter.into_iter().collect(),
        }
    }
}

/// Parse the `bfchar` and `bfrange` sections of a ToUnicode CMap stream.
///
/// ```text
/// beginbfchar
/// <0041> <0041>
/// endbfchar
///
/// beginbfrange
/// <0020> <007E> <0020>
/// <005F> <0061> [<0066> <0069> <006C>]
/// endbfrange
/// ```
///
/// Lines that do not match are skipped; a stream without sections yields an
/// empty map.
pub fn parse_tounicode_cmap(data: &[u8]) -> CMap {
    let mut cmap = CMap::new();
    let content = String::from_utf8_lossy(data);

    for section in extract_sections(&content, "beginbfchar", "endbfchar") {
        for line in section.lines() {
            if let Some((src, dst)) = parse_bfchar_line(line) {
                log::trace!("ToUnicode bfchar: 0x{:02X} -> {:?}", src, dst);
                cmap.insert(src, dst);
            }
        }
    }

    for section in extract_sections(&content, "beginbfrange", "endbfrange") {
        for line in section.lines() {
            for (src, dst) in parse_bfrange_line(line) {
                cmap.insert(src, dst);
            }
        }
    }

    cmap
}

fn extract_sections<'a>(content: &'a str, begin: &str, end: &str) -> Vec<&'a str> {
    let mut sections = Vec::new();
    let mut remaining = content;

    while let Some(begin_pos) = remaining.find(begin) {
        let after_begin = &remaining[begin_pos + begin.len()..];
        if let Some(end_pos) = after_begin.find(end) {
            sections.push(&after_begin[..end_pos]);
            remaining = &after_begin[end_pos + end.len()..];
        } else {
            break;
        }
    }

    sections
}

/// Decode a destination hex string: UTF-16BE code units, surrogate pairs
/// allowed, several code points for ligatures.
fn decode_hex_utf16(hex: &str) -> Option<String> {
    if hex.len() % 4 != 0 {
        let code = u32::from_str_radix(hex, 16).ok()?;
        return char::from_u32(code).map(|c| c.to_string());
    }
    let units: Vec<u16> = (0..hex.len())
        .step_by(4)
        .map(|i| u16::from_str_radix(&hex[i..i + 4], 16))
        .collect::<Result<_, _>>()
        .ok()?;
    let decoded: String = char::decode_utf16(units)
        .filter_map(|r| r.ok())
        .collect();
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

fn parse_bfchar_line(line: &str) -> Option<(u32, String)> {
    lazy_static::lazy_static! {
        static ref RE: Regex = Regex::new(r"<([0-9A-Fa-f]+)>\s*<([0-9A-Fa-f]+)>").unwrap();
    }

    let caps = RE.captures(line)?;
    let src = u32::from_str_radix(&caps[1], 16).ok()?;
    let dst = decode_hex_utf16(&caps[2])?;
    Some((src, dst))
}

fn parse_bfrange_line(line: &str) -> Vec<(u32, String)> {
    lazy_static::lazy_static! {
        static ref RE_SEQ: Regex = Regex::new(
            r"<([0-9A-Fa-f]+)>\s*<([0-9A-Fa-f]+)>\s*<([0-9A-Fa-f]+)>"
        ).unwrap();
        static ref RE_ARRAY: Regex = Regex::new(
            r"<([0-9A-Fa-f]+)>\s*<([0-9A-Fa-f]+)>\s*\[((?:\s*<[0-9A-Fa-f]+>\s*)+)\]"
        ).unwrap();
        static ref RE_HEX: Regex = Regex::new(r"<([0-9A-Fa-f]+)>").unwrap();
    }

    let mut result = Vec::new();

    if let Some(caps) = RE_ARRAY.captures(line) {
        let (Ok(start), Ok(end)) = (
            u32::from_str_radix(&caps[1], 16),
            u32::from_str_radix(&caps[2], 16),
        ) else {
            return result;
        };
        let range_size = end.saturating_sub(start) as usize + 1;
        let dsts: Vec<&str> = RE_HEX
            .captures_iter(&caps[3])
            .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
            .collect();
        if dsts.len() != range_size {
            log::warn!(
                "ToUnicode bfrange array size mismatch: \
                 expected {} entries for range 0x{:X}-0x{:X}, got {}",
                range_size,
                start,
                end,
                dsts.len()
            );
        }
        for (i, dst_hex) in dsts.iter().take(range_size).enumerate() {
            if let Some(dst) = decode_hex_utf16(dst_hex) {
                result.push((start + i as u32, dst));
            }
        }
        return result;
    }

    if let Some(caps) = RE_SEQ.captures(line) {
        let (Ok(start), Ok(end), Ok(dst_start)) = (
            u32::from_str_radix(&caps[1], 16),
            u32::from_str_radix(&caps[2], 16),
            u32::from_str_radix(&caps[3], 16),
        ) else {
            return result;
        };
        let range_size = end.saturating_sub(start).min(10000);
        for i in 0..=range_size {
            if let Some(ch) = char::from_u32(dst_start.wrapping_add(i)) {
                result.push((start.wrapping_add(i), ch.to_string()));
            }
        }
    }

    result
}
