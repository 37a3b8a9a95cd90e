//! Glyph tables for label rendering.
//!
//! A glyph is a list of strokes, each an open polyline on a normalized
//! grid [`GLYPH_GRID`] units wide and tall, origin at the lower left.

mod stick;

use std::collections::HashMap;
use std::io::Read;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{PlotError, Result};

/// Width and height of the normalized glyph grid.
pub const GLYPH_GRID: (f64, f64) = (4.0, 8.0);

/// One polyline of a glyph, in grid units.
pub type Stroke = Vec<(f64, f64)>;

/// Read-only mapping from character to strokes.
pub trait GlyphTable {
    /// Strokes for `c`, or None when the table has no such glyph.
    fn glyph(&self, c: char) -> Option<&[Stroke]>;
}

/// In-memory stick font.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickFont {
    glyphs: HashMap<char, Vec<Stroke>>,
}

static BUILTIN: Lazy<StickFont> = Lazy::new(|| {
    let mut font = StickFont::default();
    for (ch, strokes) in stick::GLYPHS {
        let strokes = strokes
            .iter()
            .map(|stroke| {
                stroke
                    .iter()
                    .map(|&(x, y)| (f64::from(x), f64::from(y)))
                    .collect::<Stroke>()
            })
            .collect();
        font.insert(*ch, strokes);
    }
    font
});

#[derive(Deserialize)]
#[serde(transparent)]
struct GlyphFile(HashMap<String, Vec<Stroke>>);

impl StickFont {
    /// The font compiled into the library.
    pub fn builtin() -> &'static StickFont {
        &BUILTIN
    }

    /// Load a table of the form `{ "A": [[[x, y], ...], ...], ... }`.
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let file: GlyphFile = serde_json::from_reader(reader)
            .map_err(|e| PlotError::InvalidGlyphTable(e.to_string()))?;

        let mut font = StickFont::default();
        for (key, strokes) in file.0 {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(PlotError::InvalidGlyphTable(format!(
                    "key {:?} is not a single character",
                    key
                )));
            };
            font.insert(ch, strokes);
        }
        Ok(font)
    }

    pub fn insert(&mut self, ch: char, strokes: Vec<Stroke>) {
        self.glyphs.insert(ch, strokes);
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl GlyphTable for StickFont {
    fn glyph(&self, c: char) -> Option<&[Stroke]> {
        self.glyphs.get(&c).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_coverage() {
        let font = StickFont::builtin();
        for c in ('A'..='Z').chain('0'..='9').chain(" .,-+:/()=".chars()) {
            assert!(font.glyph(c).is_some(), "missing glyph {:?}", c);
        }
        assert!(font.glyph(' ').unwrap().is_empty());
        assert!(font.glyph('\u{1}').is_none());
    }

    #[test]
    fn test_builtin_stays_on_grid() {
        for c in ('A'..='Z').chain('0'..='9') {
            for stroke in StickFont::builtin().glyph(c).unwrap() {
                assert!(stroke.len() >= 2);
                for &(x, y) in stroke {
                    assert!((0.0..=GLYPH_GRID.0).contains(&x), "{:?} x={}", c, x);
                    assert!((0.0..=GLYPH_GRID.1).contains(&y), "{:?} y={}", c, y);
                }
            }
        }
    }

    #[test]
    fn test_from_json() {
        let json = br#"{ "a": [[[0, 0], [4, 8]]], "b": [] }"#;
        let font = StickFont::from_json(&json[..]).unwrap();
        assert_eq!(font.len(), 2);
        assert_eq!(font.glyph('a').unwrap(), &[vec![(0.0, 0.0), (4.0, 8.0)]]);
        assert!(font.glyph('b').unwrap().is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_tables() {
        assert!(matches!(
            StickFont::from_json(&br#"{ "ab": [] }"#[..]),
            Err(PlotError::InvalidGlyphTable(_))
        ));
        assert!(matches!(
            StickFont::from_json(&b"[1, 2]"[..]),
            Err(PlotError::InvalidGlyphTable(_))
        ));
    }
}
