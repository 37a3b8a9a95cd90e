//! SVG output for decoded vector plots.

use std::io::Write;

use itertools::Itertools;

use crate::error::Result;
use crate::hpgl::{PathSegment, VectorPlot};

/// Stroke colors for pens 0-7. Pen 0 is "no pen".
pub const PEN_COLORS: [&str; 8] = [
    "none", "black", "blue", "green", "yellow", "red", "magenta", "cyan",
];

/// Color for a pen number; numbers past 7 wrap around.
pub fn pen_color(pen: u32) -> &'static str {
    PEN_COLORS[pen as usize % PEN_COLORS.len()]
}

/// SVG writer.
pub struct SvgWriter<W: Write> {
    /// Output writer
    outfp: W,
}

impl<W: Write> SvgWriter<W> {
    pub fn new(outfp: W) -> Self {
        Self { outfp }
    }

    /// Write a complete SVG document for `plot`.
    pub fn write_plot(&mut self, plot: &VectorPlot) -> Result<()> {
        self.write_header(plot.width, plot.height)?;
        for segment in &plot.segments {
            self.write_segment(segment)?;
        }
        self.write_footer()
    }

    fn write_header(&mut self, width: f64, height: f64) -> Result<()> {
        writeln!(
            self.outfp,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
        )?;
        writeln!(
            self.outfp,
            r#"<svg width="{:.0}" height="{:.0}" xmlns="http://www.w3.org/2000/svg" version="1.1">"#,
            width, height
        )?;
        writeln!(
            self.outfp,
            "<style>path {{fill: none; stroke-linecap: round; stroke-linejoin: round;}}</style>"
        )?;
        Ok(())
    }

    /// Write one segment: a square for a dot, a path otherwise.
    pub fn write_segment(&mut self, segment: &PathSegment) -> Result<()> {
        let color = pen_color(segment.pen);
        let width = segment.width;

        if let [(x, y)] = segment.points.as_slice() {
            // centred on the dot, not cornered at it
            writeln!(
                self.outfp,
                r#"<rect x="{:.1}" y="{:.1}" width="{}" height="{}" fill="{}" />"#,
                x - width / 2.0,
                y - width / 2.0,
                width,
                width,
                color
            )?;
            return Ok(());
        }

        let data = segment
            .points
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .join(" L");
        writeln!(
            self.outfp,
            r#"<path fill="none" stroke="{}" stroke-width="{}" d="M{}" />"#,
            color, width, data
        )?;
        Ok(())
    }

    fn write_footer(&mut self) -> Result<()> {
        writeln!(self.outfp, "</svg>")?;
        self.outfp.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.outfp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(plot: &VectorPlot) -> String {
        let mut writer = SvgWriter::new(Vec::new());
        writer.write_plot(plot).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_path_and_dot() {
        let plot = VectorPlot {
            segments: vec![
                PathSegment {
                    pen: 1,
                    width: 1.0,
                    points: vec![(110.0, 10.0), (210.0, 10.24)],
                },
                PathSegment {
                    pen: 5,
                    width: 2.0,
                    points: vec![(50.0, 60.0)],
                },
            ],
            width: 220.0,
            height: 120.0,
        };
        let svg = render(&plot);
        assert!(svg.contains(r#"<svg width="220" height="120""#));
        assert!(svg.contains(r#"stroke="black" stroke-width="1" d="M110.0,10.0 L210.0,10.2""#));
        assert!(svg.contains(r#"<rect x="49.0" y="59.0" width="2" height="2" fill="red" />"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_pen_colors_wrap() {
        assert_eq!(pen_color(0), "none");
        assert_eq!(pen_color(7), "cyan");
        assert_eq!(pen_color(9), "black");
    }
}
