//! Path list produced by the HPGL interpreter and its end-of-stream
//! post-pass.
//!
//! During interpretation points may still carry a fraction of the final
//! canvas (relative character sizes move the pen by a share of a canvas
//! that is not known yet). [`Drawing::finish`] sizes the canvas, lays out
//! label text, then flips the y axis and adds the border.

use tracing::{debug, warn};

use super::state::{FontSlot, Measure, PlotPoint, Point};
use super::text;
use crate::font::GlyphTable;

/// A path segment before canvas resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSegment {
    pub pen: u32,
    pub width: f64,
    pub points: Vec<PlotPoint>,
}

/// One label character waiting for the canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    /// Lower-left corner of the character box
    pub anchor: PlotPoint,
    pub width: Measure,
    pub height: Measure,
    pub pen: u32,
    pub font: FontSlot,
    pub character_set: u32,
    pub ch: char,
    pub stroke_weight: f64,
    pub pen_width: f64,
}

/// Everything collected from one HPGL stream.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    pub segments: Vec<PlotSegment>,
    pub labels: Vec<LabelPlacement>,
}

/// A stroked path in final device space (y down, border applied).
///
/// A single point is a dot, drawn as a filled square of side `width`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub pen: u32,
    pub width: f64,
    pub points: Vec<Point>,
}

impl PathSegment {
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }
}

/// Decoded vector plot: paths plus the canvas they were laid out on.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPlot {
    pub segments: Vec<PathSegment>,
    pub width: f64,
    pub height: f64,
}

/// Running maximum of required canvas extents.
#[derive(Debug, Default)]
struct Extent {
    x: f64,
    y: f64,
}

impl Extent {
    fn include(&mut self, p: PlotPoint) {
        match p.x.required_extent() {
            Some(e) => self.x = self.x.max(e),
            None => warn!(rel = p.x.rel, "horizontal extent grows with the canvas, ignored"),
        }
        match p.y.required_extent() {
            Some(e) => self.y = self.y.max(e),
            None => warn!(rel = p.y.rel, "vertical extent grows with the canvas, ignored"),
        }
    }
}

impl Drawing {
    /// Size of the drawing area before the border is added.
    pub fn canvas_size(&self) -> Point {
        let mut extent = Extent::default();
        for p in self.segments.iter().flat_map(|s| s.points.iter()) {
            extent.include(*p);
        }
        for label in &self.labels {
            extent.include(PlotPoint {
                x: label.anchor.x + label.width,
                y: label.anchor.y + label.height,
            });
        }
        (extent.x.ceil().max(0.0), extent.y.ceil().max(0.0))
    }

    /// Resolve every point, render labels and move into output space.
    pub fn finish(self, border: f64, glyphs: &dyn GlyphTable) -> VectorPlot {
        let canvas = self.canvas_size();
        let width = canvas.0 + 2.0 * border;
        let height = canvas.1 + 2.0 * border;
        let flip = |(x, y): Point| (x + border, height - y - border);

        let mut segments: Vec<PathSegment> = self
            .segments
            .into_iter()
            .map(|s| PathSegment {
                pen: s.pen,
                width: s.width,
                points: s.points.into_iter().map(|p| flip(p.resolve(canvas))).collect(),
            })
            .collect();

        for label in &self.labels {
            for mut stroke in text::layout_label(label, canvas, glyphs) {
                stroke.points.iter_mut().for_each(|p| *p = flip(*p));
                segments.push(stroke);
            }
        }

        debug!(
            segments = segments.len(),
            width, height, "vector plot resolved"
        );
        VectorPlot {
            segments,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StickFont;

    fn segment(points: &[Point]) -> PlotSegment {
        PlotSegment {
            pen: 1,
            width: 1.0,
            points: points.iter().copied().map(PlotPoint::absolute).collect(),
        }
    }

    #[test]
    fn test_canvas_rounds_up() {
        let drawing = Drawing {
            segments: vec![segment(&[(0.0, 0.0), (99.2, 10.0)])],
            labels: vec![],
        };
        assert_eq!(drawing.canvas_size(), (100.0, 10.0));
    }

    #[test]
    fn test_canvas_never_negative() {
        let drawing = Drawing {
            segments: vec![segment(&[(-50.0, -20.0), (-10.0, -5.0)])],
            labels: vec![],
        };
        assert_eq!(drawing.canvas_size(), (0.0, 0.0));
    }

    #[test]
    fn test_relative_label_extent_solved() {
        let label = LabelPlacement {
            anchor: PlotPoint::absolute((90.0, 0.0)),
            width: Measure::relative(0.1),
            height: Measure::relative(0.5),
            pen: 1,
            font: FontSlot::Standard,
            character_set: 0,
            ch: 'A',
            stroke_weight: 0.0,
            pen_width: 1.0,
        };
        let drawing = Drawing {
            segments: vec![segment(&[(0.0, 0.0), (0.0, 10.0)])],
            labels: vec![label],
        };
        // 90 + 0.1 * 100 == 100
        assert_eq!(drawing.canvas_size(), (100.0, 10.0));
    }

    #[test]
    fn test_finish_flips_and_borders() {
        let drawing = Drawing {
            segments: vec![segment(&[(100.0, 100.0), (200.0, 100.0)])],
            labels: vec![],
        };
        let plot = drawing.finish(10.0, StickFont::builtin());
        assert_eq!(plot.width, 220.0);
        assert_eq!(plot.height, 120.0);
        assert_eq!(plot.segments[0].points, vec![(110.0, 10.0), (210.0, 10.0)]);
        assert!(!plot.segments[0].is_dot());
    }
}
