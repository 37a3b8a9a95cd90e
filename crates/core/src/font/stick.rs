//! Built-in stick font on the 4 x 8 grid.
//!
//! Descenders dip to y = -1.

type Glyph = &'static [&'static [(i8, i8)]];

#[rustfmt::skip]
pub(super) static GLYPHS: &[(char, Glyph)] = &[
    (' ', &[]),
    ('!', &[&[(2, 8), (2, 2)], &[(2, 0), (2, 1)]]),
    ('"', &[&[(1, 8), (1, 6)], &[(3, 8), (3, 6)]]),
    ('#', &[&[(1, 0), (1, 8)], &[(3, 0), (3, 8)], &[(0, 3), (4, 3)], &[(0, 5), (4, 5)]]),
    ('%', &[&[(0, 0), (4, 8)], &[(0, 8), (1, 8), (1, 7), (0, 7), (0, 8)], &[(3, 1), (4, 1), (4, 0), (3, 0), (3, 1)]]),
    ('\'', &[&[(2, 8), (2, 6)]]),
    ('(', &[&[(3, 8), (1, 6), (1, 2), (3, 0)]]),
    (')', &[&[(1, 8), (3, 6), (3, 2), (1, 0)]]),
    ('*', &[&[(2, 2), (2, 6)], &[(0, 3), (4, 5)], &[(0, 5), (4, 3)]]),
    ('+', &[&[(2, 2), (2, 6)], &[(0, 4), (4, 4)]]),
    (',', &[&[(2, 1), (1, -1)]]),
    ('-', &[&[(0, 4), (4, 4)]]),
    ('.', &[&[(2, 0), (2, 1)]]),
    ('/', &[&[(0, 0), (4, 8)]]),
    ('0', &[&[(0, 0), (4, 0), (4, 8), (0, 8), (0, 0), (4, 8)]]),
    ('1', &[&[(1, 6), (2, 8), (2, 0)], &[(1, 0), (3, 0)]]),
    ('2', &[&[(0, 7), (1, 8), (3, 8), (4, 7), (4, 5), (0, 0), (4, 0)]]),
    ('3', &[&[(0, 8), (4, 8), (2, 5), (3, 5), (4, 4), (4, 1), (3, 0), (1, 0), (0, 1)]]),
    ('4', &[&[(3, 0), (3, 8), (0, 2), (4, 2)]]),
    ('5', &[&[(4, 8), (0, 8), (0, 5), (3, 5), (4, 4), (4, 1), (3, 0), (0, 0)]]),
    ('6', &[&[(4, 8), (1, 8), (0, 7), (0, 1), (1, 0), (3, 0), (4, 1), (4, 3), (3, 4), (0, 4)]]),
    ('7', &[&[(0, 8), (4, 8), (1, 0)]]),
    ('8', &[&[(1, 4), (0, 5), (0, 7), (1, 8), (3, 8), (4, 7), (4, 5), (3, 4), (1, 4), (0, 3), (0, 1), (1, 0), (3, 0), (4, 1), (4, 3), (3, 4)]]),
    ('9', &[&[(4, 4), (1, 4), (0, 5), (0, 7), (1, 8), (3, 8), (4, 7), (4, 1), (3, 0), (0, 0)]]),
    (':', &[&[(2, 5), (2, 6)], &[(2, 1), (2, 2)]]),
    (';', &[&[(2, 5), (2, 6)], &[(2, 1), (1, -1)]]),
    ('<', &[&[(4, 7), (0, 4), (4, 1)]]),
    ('=', &[&[(0, 3), (4, 3)], &[(0, 5), (4, 5)]]),
    ('>', &[&[(0, 7), (4, 4), (0, 1)]]),
    ('?', &[&[(0, 7), (1, 8), (3, 8), (4, 7), (4, 5), (2, 4), (2, 2)], &[(2, 0), (2, 1)]]),
    ('A', &[&[(0, 0), (0, 6), (2, 8), (4, 6), (4, 0)], &[(0, 4), (4, 4)]]),
    ('B', &[&[(0, 0), (0, 8), (3, 8), (4, 7), (4, 5), (3, 4), (0, 4)], &[(3, 4), (4, 3), (4, 1), (3, 0), (0, 0)]]),
    ('C', &[&[(4, 7), (3, 8), (1, 8), (0, 7), (0, 1), (1, 0), (3, 0), (4, 1)]]),
    ('D', &[&[(0, 0), (0, 8), (2, 8), (4, 6), (4, 2), (2, 0), (0, 0)]]),
    ('E', &[&[(4, 8), (0, 8), (0, 0), (4, 0)], &[(0, 4), (3, 4)]]),
    ('F', &[&[(4, 8), (0, 8), (0, 0)], &[(0, 4), (3, 4)]]),
    ('G', &[&[(4, 7), (3, 8), (1, 8), (0, 7), (0, 1), (1, 0), (3, 0), (4, 1), (4, 4), (2, 4)]]),
    ('H', &[&[(0, 0), (0, 8)], &[(4, 0), (4, 8)], &[(0, 4), (4, 4)]]),
    ('I', &[&[(1, 8), (3, 8)], &[(2, 8), (2, 0)], &[(1, 0), (3, 0)]]),
    ('J', &[&[(4, 8), (4, 1), (3, 0), (1, 0), (0, 1), (0, 2)]]),
    ('K', &[&[(0, 0), (0, 8)], &[(4, 8), (0, 3)], &[(1, 4), (4, 0)]]),
    ('L', &[&[(0, 8), (0, 0), (4, 0)]]),
    ('M', &[&[(0, 0), (0, 8), (2, 4), (4, 8), (4, 0)]]),
    ('N', &[&[(0, 0), (0, 8), (4, 0), (4, 8)]]),
    ('O', &[&[(1, 0), (0, 1), (0, 7), (1, 8), (3, 8), (4, 7), (4, 1), (3, 0), (1, 0)]]),
    ('P', &[&[(0, 0), (0, 8), (3, 8), (4, 7), (4, 5), (3, 4), (0, 4)]]),
    ('Q', &[&[(1, 0), (0, 1), (0, 7), (1, 8), (3, 8), (4, 7), (4, 1), (3, 0), (1, 0)], &[(2, 2), (4, 0)]]),
    ('R', &[&[(0, 0), (0, 8), (3, 8), (4, 7), (4, 5), (3, 4), (0, 4)], &[(2, 4), (4, 0)]]),
    ('S', &[&[(4, 7), (3, 8), (1, 8), (0, 7), (0, 5), (1, 4), (3, 4), (4, 3), (4, 1), (3, 0), (1, 0), (0, 1)]]),
    ('T', &[&[(0, 8), (4, 8)], &[(2, 8), (2, 0)]]),
    ('U', &[&[(0, 8), (0, 1), (1, 0), (3, 0), (4, 1), (4, 8)]]),
    ('V', &[&[(0, 8), (2, 0), (4, 8)]]),
    ('W', &[&[(0, 8), (1, 0), (2, 4), (3, 0), (4, 8)]]),
    ('X', &[&[(0, 0), (4, 8)], &[(0, 8), (4, 0)]]),
    ('Y', &[&[(0, 8), (2, 4), (4, 8)], &[(2, 4), (2, 0)]]),
    ('Z', &[&[(0, 8), (4, 8), (0, 0), (4, 0)]]),
    ('[', &[&[(3, 8), (1, 8), (1, 0), (3, 0)]]),
    ('\\', &[&[(0, 8), (4, 0)]]),
    (']', &[&[(1, 8), (3, 8), (3, 0), (1, 0)]]),
    ('_', &[&[(0, -1), (4, -1)]]),
];
