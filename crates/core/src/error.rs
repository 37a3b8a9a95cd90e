//! Error types for the HPGL / HP RTL decoders.

use thiserror::Error;

/// Primary error type for stream decoding.
///
/// Every variant is fatal: a decode call either returns a complete
/// result or one of these, never a partial path list or pixel grid.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("unknown command {command:?} at position {pos}")]
    UnknownCommand { command: String, pos: usize },

    #[error("unsupported color mode {mode} at position {pos}")]
    UnsupportedColorMode { mode: i64, pos: usize },

    #[error("unsupported compression mode {mode}")]
    UnsupportedCompression { mode: i64 },

    #[error("malformed argument for {command} at position {pos}: {msg}")]
    MalformedArgument {
        command: String,
        pos: usize,
        msg: String,
    },

    #[error("stream truncated inside {command} at position {pos}")]
    UnexpectedEof { command: String, pos: usize },

    #[error("color index {index} outside palette of {len} entries")]
    PaletteIndex { index: i64, len: usize },

    #[error("plane {plane} holds {rows} rows but plane 0 holds {expected}")]
    PlaneMismatch {
        plane: usize,
        rows: usize,
        expected: usize,
    },

    #[error("raster of {width} x {height} pixels is too large")]
    RasterTooLarge { width: usize, height: usize },

    #[error("invalid glyph table: {0}")]
    InvalidGlyphTable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Shorthand for a malformed-argument error.
    pub(crate) fn malformed(
        command: impl Into<String>,
        pos: usize,
        msg: impl Into<String>,
    ) -> Self {
        PlotError::MalformedArgument {
            command: command.into(),
            pos,
            msg: msg.into(),
        }
    }

    /// Shorthand for a truncated-stream error.
    pub(crate) fn eof(command: impl Into<String>, pos: usize) -> Self {
        PlotError::UnexpectedEof {
            command: command.into(),
            pos,
        }
    }
}

/// Convenience Result type alias for PlotError.
pub type Result<T> = std::result::Result<T, PlotError>;
