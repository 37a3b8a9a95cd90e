//! HP Graphics Language (HPGL) vector decoding.
//!
//! - `command` - two-letter mnemonic table
//! - `state` - plotting state and canvas-relative measures
//! - `transform` - user-to-device window mapping
//! - `interpreter` - command dispatch
//! - `plot` - path list and end-of-stream post-pass
//! - `text` - stroke-font label layout

pub mod command;
pub mod interpreter;
pub mod plot;
pub mod state;
pub mod text;
pub mod transform;

pub use command::Mnemonic;
pub use interpreter::HpglInterpreter;
pub use plot::{Drawing, LabelPlacement, PathSegment, PlotSegment, VectorPlot};
pub use state::{CharSize, FontSlot, Measure, PlotPoint, PlottingState, Point};
pub use transform::{CoordinateTransform, Scaling};

use crate::error::Result;
use crate::font::GlyphTable;

/// Decoding parameters for HPGL streams.
#[derive(Debug, Clone, PartialEq)]
pub struct HpglOptions {
    /// Margin added on every side of the canvas, in plotter units
    pub border: f64,
    /// Page used for `IR` percentages and the default P2
    pub page_size: Point,
    /// Stroke width of plotted segments
    pub pen_width: f64,
}

impl Default for HpglOptions {
    fn default() -> Self {
        Self {
            border: 10.0,
            page_size: (10_365.0, 7_962.0),
            pen_width: 1.0,
        }
    }
}

/// Decode a complete HPGL stream into a vector plot.
///
/// # Example
///
/// ```
/// use hpgl_core::font::StickFont;
/// use hpgl_core::hpgl::{HpglOptions, parse_hpgl};
///
/// let plot = parse_hpgl(
///     b"PA100,100;PD;PA200,100;PU;",
///     &HpglOptions::default(),
///     StickFont::builtin(),
/// )
/// .unwrap();
/// assert_eq!(plot.segments[0].points[0], (110.0, 10.0));
/// ```
pub fn parse_hpgl(
    data: &[u8],
    options: &HpglOptions,
    glyphs: &dyn GlyphTable,
) -> Result<VectorPlot> {
    let drawing = HpglInterpreter::new(data, options).run()?;
    Ok(drawing.finish(options.border, glyphs))
}
