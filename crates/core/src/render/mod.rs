//! Output serialization.
//!
//! - `svg`: vector plots as SVG 1.1
//! - `bmp`: pixel grids as 24-bit BMP

pub mod bmp;
pub mod svg;

pub use bmp::{BmpWriter, write_bmp};
pub use svg::{PEN_COLORS, SvgWriter, pen_color};
