//! 24-bit uncompressed BMP output for decoded raster images.

use std::io::{Seek, SeekFrom, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{PlotError, Result};
use crate::hprtl::{PixelGrid, Rgb};

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

/// Align a row length to a 32-bit boundary.
const fn align32(x: u32) -> u32 {
    x.div_ceil(4) * 4
}

/// BMP file writer.
///
/// The header is written up front; scanlines can then be written in any
/// order since each one is placed by seeking.
pub struct BmpWriter {
    linesize: u32,
    pos1: u64,
}

impl BmpWriter {
    /// Write the BMP headers for a `width` x `height` 24-bit image.
    pub fn new<W: Write + Seek>(fp: &mut W, width: usize, height: usize) -> Result<Self> {
        let too_large = || {
            PlotError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("image of {}x{} pixels is too large for BMP", width, height),
            ))
        };
        let w = u32::try_from(width).map_err(|_| too_large())?;
        let h = u32::try_from(height).map_err(|_| too_large())?;

        let linesize = align32(w.checked_mul(3).ok_or_else(too_large)?);
        let datasize = linesize.checked_mul(h).ok_or_else(too_large)?;
        let headersize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

        // BITMAPFILEHEADER
        fp.write_all(b"BM")?;
        fp.write_u32::<LittleEndian>(headersize + datasize)?; // bfSize
        fp.write_u16::<LittleEndian>(0)?; // bfReserved1
        fp.write_u16::<LittleEndian>(0)?; // bfReserved2
        fp.write_u32::<LittleEndian>(headersize)?; // bfOffBits

        // BITMAPINFOHEADER
        fp.write_u32::<LittleEndian>(INFO_HEADER_SIZE)?; // biSize
        fp.write_i32::<LittleEndian>(w as i32)?; // biWidth
        fp.write_i32::<LittleEndian>(h as i32)?; // biHeight, positive = bottom-up
        fp.write_u16::<LittleEndian>(1)?; // biPlanes
        fp.write_u16::<LittleEndian>(BITS_PER_PIXEL)?; // biBitCount
        fp.write_u32::<LittleEndian>(0)?; // biCompression
        fp.write_u32::<LittleEndian>(datasize)?; // biSizeImage
        fp.write_i32::<LittleEndian>(1)?; // biXPelsPerMeter
        fp.write_i32::<LittleEndian>(1)?; // biYPelsPerMeter
        fp.write_u32::<LittleEndian>(0)?; // biClrUsed
        fp.write_u32::<LittleEndian>(0)?; // biClrImportant

        let pos0 = fp.stream_position()?;
        let pos1 = pos0 + u64::from(datasize);

        Ok(Self { linesize, pos1 })
    }

    pub fn linesize(&self) -> usize {
        self.linesize as usize
    }

    /// Write one scanline of RGB pixels.
    ///
    /// `y` counts from the top of the image; rows are stored bottom-up, so
    /// row 0 is the last one in the file.
    pub fn write_line<W: Write + Seek>(
        &mut self,
        fp: &mut W,
        y: usize,
        pixels: &[Rgb],
    ) -> Result<()> {
        let mut line = Vec::with_capacity(self.linesize as usize);
        for &Rgb(r, g, b) in pixels {
            line.extend_from_slice(&[b, g, r]);
        }
        line.resize(self.linesize as usize, 0);

        let seek_pos = self.pos1 - (y as u64 + 1) * u64::from(self.linesize);
        fp.seek(SeekFrom::Start(seek_pos))?;
        fp.write_all(&line)?;
        Ok(())
    }
}

/// Write a whole pixel grid as a BMP file.
pub fn write_bmp<W: Write + Seek>(fp: &mut W, grid: &PixelGrid) -> Result<()> {
    let mut writer = BmpWriter::new(fp, grid.width, grid.height)?;
    for (y, row) in grid.rows().enumerate() {
        writer.write_line(fp, y, row)?;
    }
    Ok(())
}
