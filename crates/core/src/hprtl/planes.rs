//! Per-plane row storage and recombination into pixels.

use tracing::warn;

use super::palette::{Palette, Rgb};
use crate::error::{PlotError, Result};

/// Decoded rows, one list per plane.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaneBuffer {
    planes: Vec<Vec<Vec<u8>>>,
    rows: usize,
}

impl PlaneBuffer {
    pub fn new(plane_count: usize) -> Self {
        Self {
            planes: vec![Vec::new(); plane_count],
            rows: 0,
        }
    }

    /// Row count, advanced only by plane 0.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    pub fn plane(&self, index: usize) -> Option<&[Vec<u8>]> {
        self.planes.get(index).map(Vec::as_slice)
    }

    /// Append a row to `plane`, growing the plane list if a later mode
    /// switch raised the plane count.
    pub fn push_row(&mut self, plane: usize, row: Vec<u8>) {
        if plane >= self.planes.len() {
            self.planes.resize_with(plane + 1, Vec::new);
        }
        if plane == 0 {
            self.rows += 1;
        }
        self.planes[plane].push(row);
    }

    /// Combine the first `plane_count` planes into palette indices, crop to
    /// `width` pixels and resolve each index through `palette`.
    pub fn combine(
        &self,
        plane_count: usize,
        width: usize,
        palette: &Palette,
    ) -> Result<PixelGrid> {
        let height = self.rows;
        if height == 0 {
            return Ok(PixelGrid::default());
        }
        let cells = width
            .checked_mul(height)
            .ok_or(PlotError::RasterTooLarge { width, height })?;
        let mut indices = vec![0i64; cells];

        for plane in 0..plane_count {
            let rows = self.plane(plane).unwrap_or_default();
            if rows.len() > height {
                return Err(PlotError::PlaneMismatch {
                    plane,
                    rows: rows.len(),
                    expected: height,
                });
            }
            if rows.len() < height {
                warn!(
                    plane,
                    rows = rows.len(),
                    expected = height,
                    "plane is short, padding with zero rows"
                );
            }

            for (row, cells) in rows.iter().zip(indices.chunks_exact_mut(width.max(1))) {
                for (x, cell) in cells.iter_mut().enumerate() {
                    let bit = row.get(x / 8).map_or(0, |b| (b >> (7 - x % 8)) & 1);
                    *cell |= i64::from(bit) << plane;
                }
            }
        }

        let pixels = indices
            .into_iter()
            .map(|index| palette.get(index))
            .collect::<Result<Vec<_>>>()?;

        Ok(PixelGrid {
            width,
            height,
            pixels,
        })
    }
}

/// Row-major, top-to-bottom RGB image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelGrid {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Rgb>,
}

impl PixelGrid {
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn row(&self, y: usize) -> Option<&[Rgb]> {
        if y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width..(y + 1) * self.width)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width {
            return None;
        }
        self.row(y)?.get(x).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        (0..self.height).filter_map(move |y| self.row(y))
    }
}
