//! Row codecs for HP RTL raster transfer.
//!
//! This module contains:
//! - `packbits`: TIFF 4.0 PackBits decoding (mode 2)
//! - `rle`: plain run-length decoding (mode 1)
//!
//! Mode 0 rows are copied verbatim.

pub mod packbits;
pub mod rle;

pub use packbits::unpack_bits;
pub use rle::run_length_decode;

use crate::error::{PlotError, Result};

/// Row compression scheme selected by `ESC*b#M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Unencoded rows.
    None,
    /// `(count, value)` pairs.
    RunLength,
    /// TIFF 4.0 PackBits.
    PackBits,
}

impl Compression {
    /// Map a protocol compression id to a scheme.
    pub fn from_id(id: i64) -> Result<Self> {
        match id {
            0 => Ok(Compression::None),
            1 => Ok(Compression::RunLength),
            2 => Ok(Compression::PackBits),
            _ => Err(PlotError::UnsupportedCompression { mode: id }),
        }
    }

    /// Decode one raw row payload.
    pub fn decode(self, payload: &[u8]) -> Vec<u8> {
        match self {
            Compression::None => payload.to_vec(),
            Compression::RunLength => run_length_decode(payload),
            Compression::PackBits => unpack_bits(payload),
        }
    }
}

/// Decode a row payload and fit it to exactly `byte_width` bytes.
///
/// Short rows are zero-padded and long rows truncated. The compression id
/// is validated here rather than when it is selected, so an unsupported
/// mode that never carries a row is harmless.
pub fn decode_row(compression_id: i64, payload: &[u8], byte_width: usize) -> Result<Vec<u8>> {
    let mut row = Compression::from_id(compression_id)?.decode(payload);
    row.resize(byte_width, 0);
    Ok(row)
}
