//! hpgl2svg - Convert HP Graphics Language plots to SVG
//!
//! Reads a whole HPGL file, decodes it and writes an SVG document next to
//! it (or to the given output path).

use clap::{ArgAction, Parser};
use hpgl_core::api::{HpglOptions, hpgl_to_svg_to_fp};
use hpgl_core::error::Result;
use hpgl_core::font::{GlyphTable, StickFont};
use log::LevelFilter;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Convert an HPGL plot file to SVG.
#[derive(Parser, Debug)]
#[command(name = "hpgl2svg")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input HPGL file
    input: PathBuf,

    /// Output SVG file (defaults to the input name with ".svg" appended)
    output: Option<PathBuf>,

    /// Margin around the drawing, in plotter units
    #[arg(short = 'b', long, default_value = "10")]
    border: f64,

    /// JSON glyph table to use instead of the built-in stick font
    #[arg(short = 'f', long)]
    font: Option<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn default_output(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".svg");
    PathBuf::from(name)
}

fn process_file(input: &Path, output: &Path, args: &Args) -> Result<()> {
    let loaded;
    let glyphs: &dyn GlyphTable = match &args.font {
        Some(path) => {
            info!("Loading glyph table '{}'", path.display());
            loaded = StickFont::from_json(BufReader::new(File::open(path)?))?;
            &loaded
        }
        None => StickFont::builtin(),
    };

    let options = HpglOptions {
        border: args.border,
        ..HpglOptions::default()
    };

    info!("Opening input HPGL file '{}'", input.display());
    let data = std::fs::read(input)?;

    info!("Parsing HPGL and writing SVG file '{}'", output.display());
    let mut svg = Vec::new();
    hpgl_to_svg_to_fp(&data, &mut svg, &options, glyphs)?;
    let mut outfp = BufWriter::new(File::create(output)?);
    outfp.write_all(&svg)?;
    outfp.flush()?;

    info!("Done");
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input));

    if let Err(e) = process_file(&args.input, &output, &args) {
        eprintln!("Error processing {}: {}", args.input.display(), e);
        std::process::exit(1);
    }

    Ok(())
}
