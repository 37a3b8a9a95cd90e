//! User-to-device coordinate mapping (`SC`, `IP`, `IR`).
//!
//! The scaling points P1 and P2 are always held in device units. When
//! user scaling is on, the user window given to `SC` is mapped onto the
//! P1-P2 rectangle; moving P1/P2 afterwards re-derives the mapping from
//! the stored `SC` parameters.

use super::state::Point;

/// User scaling policy selected by `SC`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scaling {
    /// No user scaling: user units are device units.
    Off,
    /// Independent x/y mapping of the window onto P1-P2.
    Anisotropic {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },
    /// One uniform scale; the under-filled axis is placed inside P1-P2 by
    /// the `left` / `bottom` fractions (0.5 centers it).
    Isotropic {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        left: f64,
        bottom: f64,
    },
    /// `(xmin, ymin)` maps to P1 and one user unit is `factor` device units.
    PointFactor {
        xmin: f64,
        xfactor: f64,
        ymin: f64,
        yfactor: f64,
    },
}

/// Affine per-axis mapping `device = user * scale + offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateTransform {
    p1: Point,
    p2: Point,
    page_size: Point,
    scaling: Scaling,
    scale: Point,
    offset: Point,
}

impl CoordinateTransform {
    /// Identity mapping with P1 at the origin and P2 at the page corner.
    pub fn new(page_size: Point) -> Self {
        Self {
            p1: (0.0, 0.0),
            p2: page_size,
            page_size,
            scaling: Scaling::Off,
            scale: (1.0, 1.0),
            offset: (0.0, 0.0),
        }
    }

    /// Map a user-space point into device space.
    pub fn apply(&self, p: Point) -> Point {
        (
            p.0 * self.scale.0 + self.offset.0,
            p.1 * self.scale.1 + self.offset.1,
        )
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn page_size(&self) -> Point {
        self.page_size
    }

    pub fn scaling(&self) -> Scaling {
        self.scaling
    }

    pub fn scale(&self) -> Point {
        self.scale
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn set_scaling(&mut self, scaling: Scaling) {
        self.scaling = scaling;
        self.derive();
    }

    /// Set both scaling points directly.
    pub fn set_corners(&mut self, p1: Point, p2: Point) {
        self.p1 = p1;
        self.p2 = p2;
        self.derive();
    }

    /// Move P1, carrying P2 along so the P1-P2 offset is preserved.
    pub fn move_p1(&mut self, p1: Point) {
        let dx = self.p2.0 - self.p1.0;
        let dy = self.p2.1 - self.p1.1;
        self.set_corners(p1, (p1.0 + dx, p1.1 + dy));
    }

    /// Restore P1 = origin and P2 = page corner.
    pub fn reset_corners(&mut self) {
        self.set_corners((0.0, 0.0), self.page_size);
    }

    /// Convert a percentage of the page into device units.
    pub fn page_percent(&self, px: f64, py: f64) -> Point {
        (px * self.page_size.0 / 100.0, py * self.page_size.1 / 100.0)
    }

    fn derive(&mut self) {
        let (p1, p2) = (self.p1, self.p2);
        match self.scaling {
            Scaling::Off => {
                self.scale = (1.0, 1.0);
                self.offset = (0.0, 0.0);
            }
            Scaling::Anisotropic {
                xmin,
                xmax,
                ymin,
                ymax,
            } => {
                let sx = (p2.0 - p1.0) / (xmax - xmin);
                let sy = (p2.1 - p1.1) / (ymax - ymin);
                self.scale = (sx, sy);
                self.offset = (p1.0 - xmin * sx, p1.1 - ymin * sy);
            }
            Scaling::Isotropic {
                xmin,
                xmax,
                ymin,
                ymax,
                left,
                bottom,
            } => {
                let sx = (p2.0 - p1.0) / (xmax - xmin);
                let sy = (p2.1 - p1.1) / (ymax - ymin);
                let s = sx.abs().min(sy.abs());
                let sx = s.copysign(sx);
                let sy = s.copysign(sy);
                let spare_x = (p2.0 - p1.0) - (xmax - xmin) * sx;
                let spare_y = (p2.1 - p1.1) - (ymax - ymin) * sy;
                self.scale = (sx, sy);
                self.offset = (
                    p1.0 + spare_x * left - xmin * sx,
                    p1.1 + spare_y * bottom - ymin * sy,
                );
            }
            Scaling::PointFactor {
                xmin,
                xfactor,
                ymin,
                yfactor,
            } => {
                self.scale = (xfactor, yfactor);
                self.offset = (p1.0 - xmin * xfactor, p1.1 - ymin * yfactor);
            }
        }
    }
}
