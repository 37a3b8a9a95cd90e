//! Stroke-font text layout for label characters.

use super::plot::{LabelPlacement, PathSegment};
use super::state::Point;
use crate::font::{GLYPH_GRID, GlyphTable};

/// Stroke weights at or above this use the plain pen width.
pub const STROKE_WEIGHT_SATURATION: f64 = 9999.0;

/// Line width for text drawn in a `width` x `height` character box.
pub fn stroke_width(width: f64, height: f64, stroke_weight: f64, pen_width: f64) -> f64 {
    if stroke_weight < STROKE_WEIGHT_SATURATION {
        0.1 * height.min(1.5 * width) * 1.13f64.powf(stroke_weight)
    } else {
        pen_width
    }
}

/// Expand one label character into strokes on a resolved canvas.
///
/// Characters missing from `glyphs` produce nothing.
pub fn layout_label(
    label: &LabelPlacement,
    canvas: Point,
    glyphs: &dyn GlyphTable,
) -> Vec<PathSegment> {
    let Some(strokes) = glyphs.glyph(label.ch) else {
        return Vec::new();
    };

    let (x, y) = label.anchor.resolve(canvas);
    let width = label.width.resolve(canvas.0);
    let height = label.height.resolve(canvas.1);
    let line_width = stroke_width(width, height, label.stroke_weight, label.pen_width);

    strokes
        .iter()
        .filter(|stroke| !stroke.is_empty())
        .map(|stroke| PathSegment {
            pen: label.pen,
            width: line_width,
            points: stroke
                .iter()
                .map(|&(gx, gy)| {
                    (
                        gx / GLYPH_GRID.0 * width + x,
                        gy / GLYPH_GRID.1 * height + y,
                    )
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StickFont;
    use crate::hpgl::state::{FontSlot, Measure, PlotPoint};

    fn label(ch: char, width: Measure, height: Measure) -> LabelPlacement {
        LabelPlacement {
            anchor: PlotPoint::absolute((100.0, 50.0)),
            width,
            height,
            pen: 2,
            font: FontSlot::Standard,
            character_set: 0,
            ch,
            stroke_weight: 0.0,
            pen_width: 1.0,
        }
    }

    #[test]
    fn test_stroke_width_formula() {
        assert!((stroke_width(40.0, 80.0, 0.0, 1.0) - 6.0).abs() < 1e-9);
        assert!((stroke_width(80.0, 40.0, 0.0, 1.0) - 4.0).abs() < 1e-9);
        assert!((stroke_width(80.0, 40.0, 1.0, 1.0) - 4.52).abs() < 1e-9);
        assert_eq!(stroke_width(80.0, 40.0, 9999.0, 3.0), 3.0);
    }

    #[test]
    fn test_glyph_scaled_into_box() {
        let l = label('-', Measure::absolute(40.0), Measure::absolute(80.0));
        let strokes = layout_label(&l, (1000.0, 1000.0), StickFont::builtin());
        assert_eq!(strokes.len(), 1);
        let stroke = &strokes[0];
        assert_eq!(stroke.pen, 2);
        // '-' spans the grid at mid height
        assert_eq!(stroke.points, vec![(100.0, 90.0), (140.0, 90.0)]);
    }

    #[test]
    fn test_relative_box_resolves_against_canvas() {
        let l = label('-', Measure::relative(0.01), Measure::relative(0.02));
        let strokes = layout_label(&l, (4000.0, 4000.0), StickFont::builtin());
        assert_eq!(strokes[0].points, vec![(100.0, 90.0), (140.0, 90.0)]);
    }

    #[test]
    fn test_missing_glyph_is_skipped() {
        let l = label('\u{7f}', Measure::absolute(40.0), Measure::absolute(80.0));
        assert!(layout_label(&l, (1000.0, 1000.0), StickFont::builtin()).is_empty());
        let l = label(' ', Measure::absolute(40.0), Measure::absolute(80.0));
        assert!(layout_label(&l, (1000.0, 1000.0), StickFont::builtin()).is_empty());
    }
}
