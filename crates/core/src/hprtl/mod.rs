//! HP Raster Transfer Language (HP RTL) decoding.
//!
//! - `command` - `ESC *` class/subclass table
//! - `state` - color mode and raster state
//! - `palette` - bounds-checked color table
//! - `planes` - per-plane rows and the plane combiner
//! - `interpreter` - command scanning and dispatch

pub mod command;
pub mod interpreter;
pub mod palette;
pub mod planes;
pub mod state;

pub use command::RasterCommand;
pub use interpreter::{HprtlInterpreter, RasterToken};
pub use palette::{Palette, Rgb};
pub use planes::{PixelGrid, PlaneBuffer};
pub use state::{ColorMode, MAX_RASTER_WIDTH, RasterState};

use crate::error::Result;

/// Decode a complete HP RTL stream into a pixel grid.
///
/// Only the first raster section of the stream is captured. A stream
/// without any captured rows yields an empty grid.
pub fn parse_hprtl(data: &[u8]) -> Result<PixelGrid> {
    HprtlInterpreter::new(data).run()
}
