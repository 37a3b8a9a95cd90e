//! High-level conversion API.
//!
//! # Example
//!
//! ```no_run
//! use hpgl_core::api::{HpglOptions, hpgl_to_svg, hprtl_to_bmp};
//! use hpgl_core::font::StickFont;
//!
//! let plot = std::fs::read("drawing.plt")?;
//! let svg = hpgl_to_svg(&plot, &HpglOptions::default(), StickFont::builtin())?;
//!
//! let raster = std::fs::read("scan.rtl")?;
//! let bmp = hprtl_to_bmp(&raster)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod high_level;

// Re-export for convenience
pub use crate::hpgl::HpglOptions;
pub use high_level::{hpgl_to_svg, hpgl_to_svg_to_fp, hprtl_to_bmp, hprtl_to_bmp_to_fp};
