//! Bounds-checked raster color table.

use crate::error::{PlotError, Result};

/// An RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

const K_TABLE: [Rgb; 2] = [Rgb::WHITE, Rgb::BLACK];

const RGB_TABLE: [Rgb; 8] = [
    Rgb(0, 0, 0),
    Rgb(255, 0, 0),
    Rgb(0, 255, 0),
    Rgb(255, 255, 0),
    Rgb(0, 0, 255),
    Rgb(255, 0, 255),
    Rgb(0, 255, 255),
    Rgb(255, 255, 255),
];

const CMY_TABLE: [Rgb; 8] = [
    Rgb(255, 255, 255),
    Rgb(0, 255, 255),
    Rgb(255, 0, 255),
    Rgb(0, 0, 255),
    Rgb(255, 255, 0),
    Rgb(0, 255, 0),
    Rgb(255, 0, 0),
    Rgb(0, 0, 0),
];

// dark/bright pairs of each primary
const INDEXED_RGB_TABLE: [Rgb; 16] = [
    Rgb(0, 0, 0),
    Rgb(0, 0, 0),
    Rgb(127, 0, 0),
    Rgb(255, 0, 0),
    Rgb(0, 127, 0),
    Rgb(0, 255, 0),
    Rgb(127, 127, 0),
    Rgb(255, 255, 0),
    Rgb(0, 0, 127),
    Rgb(0, 0, 255),
    Rgb(127, 0, 127),
    Rgb(255, 0, 255),
    Rgb(0, 127, 127),
    Rgb(0, 255, 255),
    Rgb(127, 127, 127),
    Rgb(255, 255, 255),
];

const KCMY_TABLE: [Rgb; 16] = [
    Rgb(255, 255, 255),
    Rgb(127, 127, 127),
    Rgb(0, 255, 255),
    Rgb(0, 127, 127),
    Rgb(255, 0, 255),
    Rgb(127, 0, 127),
    Rgb(0, 0, 255),
    Rgb(0, 0, 127),
    Rgb(255, 255, 0),
    Rgb(127, 127, 0),
    Rgb(0, 255, 0),
    Rgb(0, 127, 0),
    Rgb(255, 0, 0),
    Rgb(127, 0, 0),
    Rgb(63, 63, 63),
    Rgb(0, 0, 0),
];

/// Index-addressable color table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<Rgb>,
}

impl Palette {
    pub fn new(entries: Vec<Rgb>) -> Self {
        Self { entries }
    }

    /// White / black.
    pub fn monochrome() -> Self {
        Self::new(K_TABLE.to_vec())
    }

    pub fn rgb() -> Self {
        Self::new(RGB_TABLE.to_vec())
    }

    pub fn cmy() -> Self {
        Self::new(CMY_TABLE.to_vec())
    }

    pub fn indexed_rgb() -> Self {
        Self::new(INDEXED_RGB_TABLE.to_vec())
    }

    pub fn kcmy() -> Self {
        Self::new(KCMY_TABLE.to_vec())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }

    fn slot(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.entries.len())
            .ok_or(PlotError::PaletteIndex {
                index,
                len: self.entries.len(),
            })
    }

    pub fn get(&self, index: i64) -> Result<Rgb> {
        Ok(self.entries[self.slot(index)?])
    }

    pub fn set(&mut self, index: i64, color: Rgb) -> Result<()> {
        let slot = self.slot(index)?;
        self.entries[slot] = color;
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::monochrome()
    }
}
