//! hprtl2bmp - Convert HP Raster Transfer Language images to BMP
//!
//! Decodes the first raster section of an HP RTL file into a 24-bit BMP.

use clap::{ArgAction, Parser};
use hpgl_core::api::hprtl_to_bmp;
use hpgl_core::error::Result;
use log::LevelFilter;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

/// Convert an HP RTL raster file to BMP.
#[derive(Parser, Debug)]
#[command(name = "hprtl2bmp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input HP RTL file
    input: PathBuf,

    /// Output BMP file (defaults to the input name with ".bmp" appended)
    output: Option<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn default_output(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".bmp");
    PathBuf::from(name)
}

fn process_file(input: &Path, output: &Path) -> Result<()> {
    info!("Opening input HPRTL file '{}'", input.display());
    let data = std::fs::read(input)?;

    info!("Parsing RTL");
    let bmp = hprtl_to_bmp(&data)?;

    info!("Writing BMP file '{}'", output.display());
    std::fs::write(output, bmp)?;

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

    if let Err(e) = process_file(&args.input, &output) {
        eprintln!("Error processing {}: {}", args.input.display(), e);
        std::process::exit(1);
    }

    Ok(())
}
