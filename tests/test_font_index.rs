//! Integration tests for writing font indexes and reading them back after review.

use pdf_tei::fonts::{
    correct_page_tree, FontCorrector, FontIndex, ReplacementTable, StyleFlag, UnicodeMap,
};
use pdf_tei::layout::{parse_layout_xml, PageTree};
use std::collections::HashMap;
use std::fs;

const LAYOUT_XML: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<pages>
<page id="1" bbox="0.000,0.000,595.000,842.000">
<textbox id="0" bbox="56.700,690.000,120.000,712.000">
<textline bbox="56.700,700.000,120.000,712.000">
<text font="KFRKEE+Garamond-Roman" size="10.000" cid="101">e</text>
<text font="KFRKEE+Garamond-Roman" size="10.000" cid="69">E</text>
<text font="KFRKEE+Garamond-Roman" size="10.000" cid="200" glyphname="a.sc">a</text>
<text> </text>
<text font="KFRKEE+Garamond-Bold" size="10.000" cid="97">a</text>
<text>
</text>
</textline>
</textbox>
</page>
<page id="2" bbox="0.000,0.000,595.000,842.000">
<textbox id="0" bbox="56.700,690.000,120.000,712.000">
<textline bbox="56.700,700.000,120.000,712.000">
<text font="KFRKEE+Garamond-Roman" size="10.000" cid="101">e</text>
<text font="QWERTY+Symbol" size="10.000" cid="81">Q</text>
</textline>
</textbox>
</page>
</pages>
"#;

fn mock_tree() -> PageTree {
    parse_layout_xml(LAYOUT_XML).unwrap()
}

// ============================================================================
// Writing
// ============================================================================

#[test]
fn test_index_lists_distinct_glyphs_per_font() {
    let index = FontIndex::from_tree(&mock_tree());
    assert_eq!(index.font_count(), 3);
    assert_eq!(index.glyph_count(), 5);

    let html = index.to_html();
    let bold = html.find("<h1 id=\"f0\">KFRKEE+Garamond-Bold</h1>").unwrap();
    let roman = html.find("<h1 id=\"f1\">KFRKEE+Garamond-Roman</h1>").unwrap();
    let symbol = html.find("<h1 id=\"f2\">QWERTY+Symbol</h1>").unwrap();
    assert!(bold < roman && roman < symbol);
    assert!(html.contains("<a href=\"#f1\">KFRKEE+Garamond-Roman</a><br/>"));
    assert!(html.contains("<td class=\"bold\">a</td>"));
    assert!(html.contains("<td class=\"sc\">a</td>"));
    assert!(html.contains("<td class=\"cid\">CID: 69</td>"));
    assert_eq!(html.matches("<td>Scan: 1</td>").count(), 4);
    assert_eq!(html.matches("<td>Scan: 2</td>").count(), 1);
}

// ============================================================================
// Round trip through review
// ============================================================================

#[test]
fn test_written_index_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fontindex.htm");
    FontIndex::from_tree(&mock_tree()).write_to_file(&path).unwrap();

    let table = ReplacementTable::from_file(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert!(table.has_font("KFRKEE+Garamond-Roman"));
    assert!(table.has_font("QWERTY+Symbol"));

    // unreviewed identity rows carry no rule
    assert!(table.lookup("KFRKEE+Garamond-Roman", "e", 101).is_none());
    assert!(table.lookup("QWERTY+Symbol", "Q", 81).is_none());

    // style classes survive as flags
    let sc = table.lookup("KFRKEE+Garamond-Roman", "a", 200).unwrap();
    assert_eq!(sc.text, "a");
    assert_eq!(sc.flags, vec![StyleFlag::SmallCaps]);
    let bold = table.lookup("KFRKEE+Garamond-Bold", "a", 97).unwrap();
    assert_eq!(bold.flags, vec![StyleFlag::Bold]);
}

#[test]
fn test_reviewed_replacement_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fontindex.htm");
    let html = FontIndex::from_tree(&mock_tree()).to_html();

    let row = "<td class=\"\">e</td>\n<td></td>\n<td class=\"\">e</td>";
    assert_eq!(html.matches(row).count(), 1);
    let fixed = "<td class=\"\">e</td>\n<td></td>\n<td class=\"\">\u{119}</td>";
    let reviewed = html.replace(row, fixed);
    fs::write(&path, reviewed).unwrap();

    let table = ReplacementTable::from_file(&path).unwrap();
    let repl = table.lookup("KFRKEE+Garamond-Roman", "e", 101).unwrap();
    assert_eq!(repl.text, "\u{119}");
    assert!(repl.flags.is_empty());
}

#[test]
fn test_index_after_correction_shows_corrected_text() {
    let mut tree = mock_tree();
    let done = correct_page_tree(&mut tree, &FontCorrector::builtin(), &HashMap::new()).unwrap();
    let index = done
        .fonts
        .iter()
        .fold(FontIndex::from_tree(&tree), |index, font| index.with_metrics(font));

    let html = index.to_html();
    assert!(html.contains("<td class=\"\">\u{398}</td>"));
    assert!(!html.contains("<td class=\"\">Q</td>"));
    assert!(html.contains("<p class=\"fontmetrics\">"));
}

#[test]
fn test_tounicode_map_drives_index_text() {
    let mut tree = mock_tree();
    let mut maps = HashMap::new();
    maps.insert(
        "Garamond-Roman".to_string(),
        UnicodeMap::from_cmap_stream(b"beginbfchar\n<0045> <0118>\nendbfchar"),
    );
    correct_page_tree(&mut tree, &FontCorrector::builtin(), &maps).unwrap();

    let html = FontIndex::from_tree(&tree).to_html();
    assert!(html.contains("<td class=\"\">\u{118}</td>"));
    assert!(!html.contains("<td class=\"\">E</td>"));
    assert!(html.contains("<td class=\"\">e</td>"));
}
