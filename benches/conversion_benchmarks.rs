//! Benchmarks for line segmentation and full TEI conversion.
//!
//! Run with: `cargo bench --bench conversion_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pdf_tei::converters::TeiConverter;
use pdf_tei::geometry::{BBox, Point};
use pdf_tei::layout::{Page, PageTree, TextBox, TextChar, TextLine};
use pdf_tei::text::segment_line;

const SENTENCE: &str = "Vgl. die Ausgabe letzter Hand, Bd. 12, S. 217 ff. ";

fn synthetic_line(words: usize, y: f64) -> Vec<TextChar> {
    SENTENCE
        .chars()
        .cycle()
        .take(words * 6)
        .enumerate()
        .map(|(i, c)| {
            let x0 = 50.0 + i as f64 * 5.0;
            let size = if i % 17 == 0 { 7.2 } else { 10.0 };
            TextChar::new(c.to_string(), "KFRKEE+OriginalGaramondBT-Roman", size)
                .with_bbox(BBox::new(x0, y, x0 + 5.0, y + size))
                .with_origin(Point::new(x0, y))
                .with_cid(c as i32)
        })
        .collect()
}

fn synthetic_tree(pages: usize) -> PageTree {
    let pages = (1..=pages)
        .map(|n| {
            let lines = (0..40)
                .map(|l| TextLine::new(None, synthetic_line(12, 780.0 - l as f64 * 14.0)))
                .collect();
            Page::new(n.to_string())
                .with_bbox(BBox::new(0.0, 0.0, 595.0, 842.0))
                .with_textbox(TextBox::new(None, lines))
        })
        .collect();
    PageTree::new(pages)
}

fn bench_segment_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_line");
    for words in [10usize, 100, 1000] {
        let line = synthetic_line(words, 700.0);
        group.throughput(Throughput::Elements(line.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(words), &line, |b, line| {
            b.iter(|| segment_line(black_box(line.clone())))
        });
    }
    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let converter = TeiConverter::new();
    let mut group = c.benchmark_group("convert");
    group.sample_size(20);
    for pages in [1usize, 10] {
        let tree = synthetic_tree(pages);
        group.throughput(Throughput::Elements(tree.char_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pages), &tree, |b, tree| {
            b.iter(|| {
                let doc = converter.convert(black_box(tree.clone())).expect("conversion");
                black_box(doc.to_xml())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segment_line, bench_convert);
criterion_main!(benches);
