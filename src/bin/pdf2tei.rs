//! Convert a PDF layout tree to TEI
//!
//! Reads the character layout XML of a PDF and writes TEI with one styled
//! `c` element per character.
//!
//! Usage:
//!   pdf2tei LAYOUT.xml [-c] [-t TABLES.json] [-u FONT=CMAP]... [-f FONTINDEX.htm]
//!           [-o OUT.xml|-] [-s PAGES] [-b SIZE] [-l]
//!   pdf2tei LAYOUT.xml [-c] [-t TABLES.json] [-u FONT=CMAP]... --write-font-index OUT.htm
//!   pdf2tei --dump-tables TABLES.json
//!
//! Options:
//!   -c        correct legacy font encodings with the built-in tables
//!   -t FILE   correct with the tables in FILE instead (implies -c)
//!   -u F=FILE use the ToUnicode CMap stream in FILE for font F (implies -c)
//!   -f FILE   reviewed font replacements (font index HTML)
//!   -o FILE   output file, `-` for stdout (default: LAYOUT_tei.xml)
//!   -s N      stop after N pages
//!   -b SIZE   assume SIZE as the base font size of every line (0 = measure)
//!   -l        log progress
//!   --write-font-index FILE  write the font index for review and exit

use pdf_tei::config::ConversionConfig;
use pdf_tei::converters::TeiConverter;
use pdf_tei::fonts::{
    correct_page_tree, CorrectionTables, FontCorrector, FontIndex, ReplacementTable, UnicodeMap,
};
use pdf_tei::layout::read_layout_file;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

const USAGE: &str = "Usage: pdf2tei LAYOUT.xml [-c] [-t TABLES.json] [-u FONT=CMAP]... \
                     [-f FONTINDEX.htm] [-o OUT.xml|-] [-s PAGES] [-b SIZE] [-l]
       pdf2tei LAYOUT.xml [-c] [-t TABLES.json] [-u FONT=CMAP]... --write-font-index OUT.htm
       pdf2tei --dump-tables TABLES.json";

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    font_index: Option<PathBuf>,
    output: Option<String>,
    stop_after: Option<usize>,
    base_size: Option<f64>,
    log: bool,
    dump_tables: Option<PathBuf>,
    correct: bool,
    tables: Option<PathBuf>,
    cmaps: Vec<(String, PathBuf)>,
    write_font_index: Option<PathBuf>,
}

impl Args {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut parsed = Args::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-f" => parsed.font_index = Some(PathBuf::from(value(&args, &mut i)?)),
                "-o" => parsed.output = Some(value(&args, &mut i)?.to_string()),
                "-s" => {
                    let v = value(&args, &mut i)?;
                    parsed.stop_after =
                        Some(v.parse().map_err(|_| format!("invalid page count: {}", v))?);
                },
                "-b" => {
                    let v = value(&args, &mut i)?;
                    parsed.base_size = Some(v.parse().map_err(|_| format!("invalid size: {}", v))?);
                },
                "-l" => parsed.log = true,
                "-c" => parsed.correct = true,
                "-t" => {
                    parsed.tables = Some(PathBuf::from(value(&args, &mut i)?));
                    parsed.correct = true;
                },
                "-u" => {
                    let v = value(&args, &mut i)?;
                    let (font, file) = v
                        .split_once('=')
                        .filter(|(font, file)| !font.is_empty() && !file.is_empty())
                        .ok_or_else(|| format!("expected FONT=CMAPFILE, got {}", v))?;
                    parsed.cmaps.push((font.to_string(), PathBuf::from(file)));
                    parsed.correct = true;
                },
                "--write-font-index" => {
                    parsed.write_font_index = Some(PathBuf::from(value(&args, &mut i)?))
                },
                "--dump-tables" => {
                    parsed.dump_tables = Some(PathBuf::from(value(&args, &mut i)?))
                },
                "-h" | "--help" => return Err(USAGE.to_string()),
                other if other.starts_with('-') => return Err(format!("unknown option {}", other)),
                other => {
                    if parsed.input.is_some() {
                        return Err(format!("unexpected argument {}", other));
                    }
                    parsed.input = Some(PathBuf::from(other));
                },
            }
            i += 1;
        }
        Ok(parsed)
    }
}

fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("option {} needs a value", args[*i - 1]))
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}_tei.xml", stem))
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = args.dump_tables {
        std::fs::write(&path, CorrectionTables::builtin().to_json()?)?;
        log::info!("Wrote correction tables to {}", path.display());
        return Ok(());
    }

    let input = args.input.ok_or(USAGE)?;
    let start = Instant::now();

    let mut tree = read_layout_file(&input)?;
    log::info!(
        "Read {} pages, {} characters from {}",
        tree.pages.len(),
        tree.char_count(),
        input.display()
    );

    let mut corrected_fonts = Vec::new();
    if args.correct {
        let corrector = match args.tables {
            Some(ref path) => {
                let json = std::fs::read_to_string(path)?;
                FontCorrector::with_tables(CorrectionTables::from_json(&json)?)
            },
            None => FontCorrector::builtin(),
        };
        let mut to_unicode = HashMap::new();
        for (font, path) in &args.cmaps {
            to_unicode.insert(font.clone(), UnicodeMap::from_cmap_stream(&std::fs::read(path)?));
        }
        let done = correct_page_tree(&mut tree, &corrector, &to_unicode)?;
        for report in done.reports.iter().filter(|r| r.selection.is_none()) {
            log::debug!("No correction table for font {}", report.fontname);
        }
        corrected_fonts = done.fonts;
    }

    if let Some(path) = args.write_font_index {
        let index = corrected_fonts
            .iter()
            .fold(FontIndex::from_tree(&tree), |index, font| index.with_metrics(font));
        index.write_to_file(&path)?;
        log::info!(
            "Wrote {} glyphs of {} fonts to {}",
            index.glyph_count(),
            index.font_count(),
            path.display()
        );
        return Ok(());
    }

    let config = ConversionConfig::new()
        .with_stop_after(args.stop_after)
        .with_default_font_size(args.base_size);
    let mut converter = TeiConverter::new().with_config(config);
    if let Some(ref path) = args.font_index {
        let table = ReplacementTable::from_file(path)?;
        log::info!(
            "Loaded {} replacements for {} fonts from {}",
            table.rule_count(),
            table.len(),
            path.display()
        );
        converter = converter.with_replacements(table);
    }

    let doc = converter.convert(tree)?;

    match args.output.as_deref() {
        Some("-") => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            doc.write_to(&mut out)?;
            out.flush()?;
        },
        Some(path) => doc.write_to_file(path)?,
        None => {
            let path = default_output(&input);
            doc.write_to_file(&path)?;
            log::info!("Wrote {}", path.display());
        },
    }

    log::info!("Done in {:.2?}", start.elapsed());
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::from_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        },
    };

    let level = if args.log { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
