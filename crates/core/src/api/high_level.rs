//! Decode-then-serialize entry points used by the command line tools.
//!
//! - `hpgl_to_svg()` / `hpgl_to_svg_to_fp()` - HPGL stream to SVG
//! - `hprtl_to_bmp()` / `hprtl_to_bmp_to_fp()` - HP RTL stream to BMP
//!
//! Each call decodes the entire stream before any output is written; a
//! decode error leaves the writer untouched.

use std::io::{Cursor, Seek, Write};

use crate::error::Result;
use crate::font::GlyphTable;
use crate::hpgl::{HpglOptions, parse_hpgl};
use crate::hprtl::parse_hprtl;
use crate::render::{SvgWriter, write_bmp};

/// Convert an HPGL stream to an SVG document.
pub fn hpgl_to_svg(
    data: &[u8],
    options: &HpglOptions,
    glyphs: &dyn GlyphTable,
) -> Result<String> {
    let mut out = Vec::new();
    hpgl_to_svg_to_fp(data, &mut out, options, glyphs)?;
    String::from_utf8(out)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

/// Convert an HPGL stream and write the SVG to `outfp`.
pub fn hpgl_to_svg_to_fp<W: Write>(
    data: &[u8],
    outfp: W,
    options: &HpglOptions,
    glyphs: &dyn GlyphTable,
) -> Result<()> {
    let plot = parse_hpgl(data, options, glyphs)?;
    SvgWriter::new(outfp).write_plot(&plot)
}

/// Convert an HP RTL stream to BMP file bytes.
pub fn hprtl_to_bmp(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    hprtl_to_bmp_to_fp(data, &mut out)?;
    Ok(out.into_inner())
}

/// Convert an HP RTL stream and write the BMP to `outfp`.
pub fn hprtl_to_bmp_to_fp<W: Write + Seek>(data: &[u8], outfp: &mut W) -> Result<()> {
    let grid = parse_hprtl(data)?;
    write_bmp(outfp, &grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StickFont;

    #[test]
    fn test_hpgl_to_svg_document() {
        let svg = hpgl_to_svg(
            b"IN;SP2;PA0,0;PD;PA100,50;PU;",
            &HpglOptions::default(),
            StickFont::builtin(),
        )
        .unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="120" height="70""#));
        assert!(svg.contains(r#"stroke="blue""#));
        assert!(svg.contains("d=\"M10.0,60.0 L110.0,10.0\""));
    }

    #[test]
    fn test_failed_decode_writes_nothing() {
        let mut out = Vec::new();
        let result = hpgl_to_svg_to_fp(
            b"PD;PA1,1;ZZ;",
            &mut out,
            &HpglOptions::default(),
            StickFont::builtin(),
        );
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_hprtl_to_bmp_bytes() {
        let bmp = hprtl_to_bmp(b"\x1b*r1U\x1b*r8S\x1b*rA\x1b*b1W\x80\x1b*rC").unwrap();
        assert_eq!(&bmp[0..2], b"BM");
        // 8 pixels * 3 bytes = 24, already aligned
        assert_eq!(bmp.len(), 54 + 24);
        assert_eq!(&bmp[54..57], &[0, 0, 0]);
        assert_eq!(&bmp[57..60], &[255, 255, 255]);
    }
}
