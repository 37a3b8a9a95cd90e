//! hpgl-core - decoders for HP plotter and printer streams.
//!
//! Two stateful stream interpreters:
//! - HPGL (vector): two-letter commands to a path list and canvas size
//! - HP RTL (raster): escape-sequence commands and compressed bit-plane
//!   rows to an RGB pixel grid
//!
//! plus SVG and BMP writers for their results.

pub mod api;
pub mod codec;
pub mod error;
pub mod font;
pub mod hpgl;
pub mod hprtl;
pub mod parser;
pub mod render;

// Re-export high_level for convenience
pub use api::high_level;

pub use font::{GlyphTable, StickFont};
pub use hpgl::{HpglOptions, VectorPlot, parse_hpgl};
pub use hprtl::{PixelGrid, Rgb, parse_hprtl};

pub use error::{PlotError, Result};
