//! Font correction over an already extracted layout tree.
//!
//! The layout tree keeps, for each character, the font name, the glyph id and
//! the text the interpreter decoded. That is enough to rebuild each font's
//! glyph map, run it through a [`FontCorrector`] and write the corrected text
//! back into the characters. A ToUnicode CMap supplied for a font takes the
//! place of the rebuilt glyph map.

use crate::error::Result;
use crate::fonts::cmap::{CMap, UnicodeMap};
use crate::fonts::corrector::{CorrectionReport, FontCorrector};
use crate::fonts::font::{strip_subset_prefix, PdfFont};
use crate::layout::{PageTree, TextChar};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Outcome of [`correct_page_tree`].
#[derive(Debug, Clone)]
pub struct TreeCorrection {
    /// Corrected fonts, in order of first appearance
    pub fonts: Vec<PdfFont>,
    /// One report per font, same order as `fonts`
    pub reports: Vec<CorrectionReport>,
    /// Number of characters whose text changed
    pub changed_chars: usize,
}

/// Correct every font of `tree` and rewrite the text of its characters.
///
/// `to_unicode` maps a font name (with or without subset prefix) to the
/// ToUnicode map of that font. Characters without a glyph id keep their text.
///
/// # Examples
///
/// ```
/// use pdf_tei::fonts::{correct_page_tree, FontCorrector};
/// use pdf_tei::layout::{Page, PageTree, TextBox, TextChar, TextLine};
/// use std::collections::HashMap;
///
/// let chars = vec![TextChar::new("Q", "ABCDEF+Symbol", 10.0).with_cid(81)];
/// let page = Page::new("1").with_textbox(TextBox::new(None, vec![TextLine::new(None, chars)]));
/// let mut tree = PageTree::new(vec![page]);
///
/// let done = correct_page_tree(&mut tree, &FontCorrector::builtin(), &HashMap::new()).unwrap();
/// assert_eq!(done.changed_chars, 1);
/// assert_eq!(tree.pages[0].textboxes[0].lines[0].chars[0].text, "\u{398}");
/// ```
pub fn correct_page_tree(
    tree: &mut PageTree,
    corrector: &FontCorrector,
    to_unicode: &HashMap<String, UnicodeMap>,
) -> Result<TreeCorrection> {
    let mut glyph_maps: IndexMap<String, CMap> = IndexMap::new();
    for ch in chars(tree) {
        if ch.font.is_empty() {
            continue;
        }
        let map = glyph_maps.entry(ch.font.clone()).or_default();
        if ch.cid >= 0 && !ch.text.is_empty() {
            map.entry(ch.cid as u32).or_insert_with(|| ch.text.clone());
        }
    }

    let mut fonts = IndexMap::new();
    let mut reports = Vec::with_capacity(glyph_maps.len());
    for (name, glyph_map) in glyph_maps {
        let supplied = to_unicode
            .get(&name)
            .or_else(|| to_unicode.get(strip_subset_prefix(&name)));
        let mut font = match supplied {
            Some(map) => PdfFont::new(name.clone()).with_unicode_map(map.clone()),
            None => PdfFont::new(name.clone()).with_cid_to_unicode(glyph_map),
        };
        reports.push(corrector.correct(&mut font)?);
        fonts.insert(name, font);
    }

    let mut changed_chars = 0;
    for ch in chars_mut(tree) {
        if ch.cid < 0 {
            continue;
        }
        let Some(font) = fonts.get(&ch.font) else {
            continue;
        };
        if let Some(text) = font.to_unicode(ch.cid as u32) {
            if text != ch.text {
                log::trace!("{} glyph {}: {:?} -> {:?}", ch.font, ch.cid, ch.text, text);
                ch.text = text.to_string();
                changed_chars += 1;
            }
        }
    }
    log::info!(
        "Corrected {} fonts, {} characters changed",
        fonts.len(),
        changed_chars
    );

    Ok(TreeCorrection {
        fonts: fonts.into_values().collect(),
        reports,
        changed_chars,
    })
}

fn chars(tree: &PageTree) -> impl Iterator<Item = &TextChar> {
    tree.pages
        .iter()
        .flat_map(|p| &p.textboxes)
        .flat_map(|tb| &tb.lines)
        .flat_map(|line| &line.chars)
}

fn chars_mut(tree: &mut PageTree) -> impl Iterator<Item = &mut TextChar> {
    tree.pages
        .iter_mut()
        .flat_map(|p| &mut p.textboxes)
        .flat_map(|tb| &mut tb.lines)
        .flat_map(|line| &mut line.chars)
}
