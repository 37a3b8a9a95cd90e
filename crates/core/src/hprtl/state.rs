//! HP RTL raster state.

use super::palette::Palette;
use crate::error::{PlotError, Result};

/// Widest raster accepted from `*r#S`, in pixels.
pub const MAX_RASTER_WIDTH: usize = 1 << 16;

/// Color mode selected by `*r#U`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Black and white, one plane
    #[default]
    K,
    /// Three planes of red/green/blue
    Rgb,
    /// Three planes of cyan/magenta/yellow
    Cmy,
    /// Four planes indexing dark/bright primaries
    IndexedRgb,
    /// Four planes of black/cyan/magenta/yellow
    Kcmy,
}

impl ColorMode {
    pub fn from_code(code: i64, pos: usize) -> Result<Self> {
        match code {
            1 => Ok(ColorMode::K),
            3 => Ok(ColorMode::Rgb),
            -3 => Ok(ColorMode::Cmy),
            4 => Ok(ColorMode::IndexedRgb),
            -4 => Ok(ColorMode::Kcmy),
            mode => Err(PlotError::UnsupportedColorMode { mode, pos }),
        }
    }

    pub const fn plane_count(self) -> usize {
        match self {
            ColorMode::K => 1,
            ColorMode::Rgb | ColorMode::Cmy => 3,
            ColorMode::IndexedRgb | ColorMode::Kcmy => 4,
        }
    }

    pub fn default_palette(self) -> Palette {
        match self {
            ColorMode::K => Palette::monochrome(),
            ColorMode::Rgb => Palette::rgb(),
            ColorMode::Cmy => Palette::cmy(),
            ColorMode::IndexedRgb => Palette::indexed_rgb(),
            ColorMode::Kcmy => Palette::kcmy(),
        }
    }
}

/// Mutable state threaded through one raster decode.
#[derive(Debug, Clone, Default)]
pub struct RasterState {
    pub color_mode: ColorMode,
    pub palette: Palette,
    /// Raster width in pixels; 0 until declared or inferred
    pub width: usize,
    /// Bytes per decoded row
    pub byte_width: usize,
    /// Compression id from `*b#M`, validated when a row is decoded
    pub compression: i64,
    pub resolution: i64,
    pub in_raster: bool,
    pub current_plane: usize,
    /// Pending (red, green, blue) for the next `*v#I`
    pub pending: (u8, u8, u8),
}

impl RasterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plane_count(&self) -> usize {
        self.color_mode.plane_count()
    }

    /// Switch color mode, replacing the palette wholesale.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
        self.palette = mode.default_palette();
    }

    /// Set width in pixels and the derived byte width.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.byte_width = width.div_ceil(8);
    }

    /// Step to the next plane. `all_planes` rows (`*b#W`) always return to
    /// plane 0.
    pub fn advance_plane(&mut self, all_planes: bool) {
        self.current_plane += 1;
        if all_planes || self.current_plane >= self.plane_count() {
            self.current_plane = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_codes() {
        assert_eq!(ColorMode::from_code(-4, 0).unwrap(), ColorMode::Kcmy);
        assert_eq!(ColorMode::from_code(3, 0).unwrap().plane_count(), 3);
        assert!(matches!(
            ColorMode::from_code(2, 9),
            Err(PlotError::UnsupportedColorMode { mode: 2, pos: 9 })
        ));
    }

    #[test]
    fn test_mode_switch_replaces_palette() {
        let mut state = RasterState::new();
        assert_eq!(state.plane_count(), 1);
        state.set_color_mode(ColorMode::IndexedRgb);
        assert_eq!(state.plane_count(), 4);
        assert_eq!(state.palette.len(), 16);
        state.set_color_mode(ColorMode::K);
        assert_eq!(state.palette.len(), 2);
    }

    #[test]
    fn test_width_rounds_up_to_bytes() {
        let mut state = RasterState::new();
        state.set_width(9);
        assert_eq!(state.byte_width, 2);
        state.set_width(16);
        assert_eq!(state.byte_width, 2);
    }

    #[test]
    fn test_plane_wrap() {
        let mut state = RasterState::new();
        state.set_color_mode(ColorMode::Rgb);
        state.advance_plane(false);
        state.advance_plane(false);
        assert_eq!(state.current_plane, 2);
        state.advance_plane(false);
        assert_eq!(state.current_plane, 0);
        state.advance_plane(false);
        state.advance_plane(true);
        assert_eq!(state.current_plane, 0);
    }
}
