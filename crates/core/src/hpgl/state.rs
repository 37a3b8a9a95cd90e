//! HPGL plotting state.

use std::ops::{Add, Mul, Sub};

use super::HpglOptions;
use super::transform::CoordinateTransform;

/// A 2D point (x, y) in plotter units.
pub type Point = (f64, f64);

/// Plotter units per centimetre.
pub const UNITS_PER_CM: f64 = 400.0;

/// Default label terminator (ASCII ETX).
pub const DEFAULT_TERMINATOR: u8 = 0x03;

/// Default relative character box, as a fraction of the canvas.
pub const DEFAULT_RELATIVE_SIZE: (f64, f64) = (0.0075, 0.0075);

/// Default absolute character box in centimetres.
pub const DEFAULT_ABSOLUTE_SIZE: (f64, f64) = (0.19, 0.27);

/// A length made of absolute plotter units plus a fraction of the final
/// canvas extent along the same axis.
///
/// Relative character sizes cannot be resolved until the whole stream has
/// been read, so text positions carry both parts until the post-pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measure {
    pub abs: f64,
    pub rel: f64,
}

impl Measure {
    pub const fn absolute(abs: f64) -> Self {
        Self { abs, rel: 0.0 }
    }

    pub const fn relative(rel: f64) -> Self {
        Self { abs: 0.0, rel }
    }

    /// Value in plotter units once the canvas extent is known.
    pub fn resolve(self, extent: f64) -> f64 {
        self.abs + self.rel * extent
    }

    /// Smallest canvas extent `e` with `resolve(e) <= e`.
    ///
    /// Returns None when the relative part is 1 or more, since no canvas
    /// can contain a length that grows at least as fast as the canvas.
    pub fn required_extent(self) -> Option<f64> {
        if self.rel >= 1.0 {
            None
        } else {
            Some(self.abs / (1.0 - self.rel))
        }
    }
}

impl Add for Measure {
    type Output = Measure;

    fn add(self, rhs: Measure) -> Measure {
        Measure {
            abs: self.abs + rhs.abs,
            rel: self.rel + rhs.rel,
        }
    }
}

impl Sub for Measure {
    type Output = Measure;

    fn sub(self, rhs: Measure) -> Measure {
        Measure {
            abs: self.abs - rhs.abs,
            rel: self.rel - rhs.rel,
        }
    }
}

impl Mul<f64> for Measure {
    type Output = Measure;

    fn mul(self, rhs: f64) -> Measure {
        Measure {
            abs: self.abs * rhs,
            rel: self.rel * rhs,
        }
    }
}

/// A device-space point whose coordinates may still carry a canvas fraction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlotPoint {
    pub x: Measure,
    pub y: Measure,
}

impl PlotPoint {
    pub const fn absolute(p: Point) -> Self {
        Self {
            x: Measure::absolute(p.0),
            y: Measure::absolute(p.1),
        }
    }

    /// Resolve against the final canvas size.
    pub fn resolve(self, canvas: Point) -> Point {
        (self.x.resolve(canvas.0), self.y.resolve(canvas.1))
    }
}

/// Character box size. The two modes are mutually exclusive; selecting
/// one discards the other's values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CharSize {
    /// Fractions of the canvas width and height (`SR`).
    Relative { width: f64, height: f64 },
    /// Plotter units (`SI`).
    Absolute { width: f64, height: f64 },
}

impl CharSize {
    pub const fn default_relative() -> Self {
        CharSize::Relative {
            width: DEFAULT_RELATIVE_SIZE.0,
            height: DEFAULT_RELATIVE_SIZE.1,
        }
    }

    pub const fn default_absolute() -> Self {
        CharSize::Absolute {
            width: DEFAULT_ABSOLUTE_SIZE.0 * UNITS_PER_CM,
            height: DEFAULT_ABSOLUTE_SIZE.1 * UNITS_PER_CM,
        }
    }

    /// Character box as (width, height) measures.
    pub fn measures(&self) -> (Measure, Measure) {
        match *self {
            CharSize::Relative { width, height } => {
                (Measure::relative(width), Measure::relative(height))
            }
            CharSize::Absolute { width, height } => {
                (Measure::absolute(width), Measure::absolute(height))
            }
        }
    }
}

impl Default for CharSize {
    fn default() -> Self {
        CharSize::default_relative()
    }
}

/// Character set slot selected by `SS` / `SA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSlot {
    #[default]
    Standard,
    Alternate,
}

/// Mutable state threaded through one HPGL decode.
#[derive(Debug, Clone)]
pub struct PlottingState {
    /// Current pen position in device space
    pub pen_position: PlotPoint,
    pub pen_down: bool,
    /// Whether anything was drawn since the last pen-down
    pub drawn: bool,
    pub pen: u32,
    pub font: FontSlot,
    /// Character set number designated by `CS`
    pub standard_set: u32,
    /// Character set number designated by `CA`
    pub alternate_set: u32,
    pub char_size: CharSize,
    pub stroke_weight: f64,
    pub pen_width: f64,
    pub label_terminator: u8,
    /// Print the terminator as a character before ending the label
    pub terminator_printed: bool,
    pub transform: CoordinateTransform,
}

impl PlottingState {
    pub fn new(options: &HpglOptions) -> Self {
        Self {
            pen_position: PlotPoint::default(),
            pen_down: false,
            drawn: true,
            pen: 1,
            font: FontSlot::Standard,
            standard_set: 0,
            alternate_set: 0,
            char_size: CharSize::default(),
            stroke_weight: 0.0,
            pen_width: options.pen_width,
            label_terminator: DEFAULT_TERMINATOR,
            terminator_printed: false,
            transform: CoordinateTransform::new(options.page_size),
        }
    }

    /// Reset every field to protocol defaults (`IN`, `DF`).
    pub fn reset(&mut self, options: &HpglOptions) {
        *self = Self::new(options);
    }

    /// Character set number of the active slot.
    pub fn character_set(&self) -> u32 {
        match self.font {
            FontSlot::Standard => self.standard_set,
            FontSlot::Alternate => self.alternate_set,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_required_extent() {
        let m = Measure { abs: 90.0, rel: 0.1 };
        let extent = m.required_extent().unwrap();
        assert!((extent - 100.0).abs() < 1e-9);
        assert!((m.resolve(extent) - extent).abs() < 1e-9);
        assert_eq!(Measure::relative(1.0).required_extent(), None);
    }

    #[test]
    fn test_measure_arithmetic() {
        let a = Measure { abs: 10.0, rel: 0.5 };
        let b = Measure::relative(0.25) * 2.0;
        assert_eq!(a + b, Measure { abs: 10.0, rel: 1.0 });
        assert_eq!(a - b, Measure { abs: 10.0, rel: 0.0 });
    }

    #[test]
    fn test_char_size_modes() {
        let (w, h) = CharSize::default().measures();
        assert_eq!(w, Measure::relative(0.0075));
        assert_eq!(h, Measure::relative(0.0075));

        let (w, h) = CharSize::default_absolute().measures();
        assert!((w.abs - 76.0).abs() < 1e-9);
        assert!((h.abs - 108.0).abs() < 1e-9);
        assert_eq!(w.rel, 0.0);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let options = HpglOptions::default();
        let mut state = PlottingState::new(&options);
        state.pen = 4;
        state.pen_down = true;
        state.font = FontSlot::Alternate;
        state.label_terminator = b'@';
        state.pen_position = PlotPoint::absolute((5.0, 6.0));
        state.reset(&options);
        assert_eq!(state.pen, 1);
        assert!(!state.pen_down);
        assert_eq!(state.font, FontSlot::Standard);
        assert_eq!(state.label_terminator, DEFAULT_TERMINATOR);
        assert_eq!(state.pen_position, PlotPoint::default());
    }
}
