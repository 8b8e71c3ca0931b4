//! Glyph Bitmaps
//!
//! A glyph is a stack of row bytes, one byte per horizontal pixel line.
//! The most significant bit is the leftmost pixel.

pub mod catalog;

use crate::error::{Error, Result};

/// Native glyph width in pixels (one row byte)
pub const GLYPH_WIDTH: usize = 8;
/// Native glyph height in pixels
pub const GLYPH_HEIGHT: usize = 16;

/// Row data for one full-size glyph
pub type Rows = [u8; GLYPH_HEIGHT];

/// Build a glyph from runs of repeated row bytes.
///
/// `stack(&[(0x00, 7), (0xFF, 2), (0x00, 7)])` is a two-pixel horizontal
/// bar through the middle of the cell. Fails to compile when the runs do
/// not add up to exactly [`GLYPH_HEIGHT`] rows.
pub const fn stack(runs: &[(u8, usize)]) -> Rows {
    let mut rows = [0u8; GLYPH_HEIGHT];
    let mut filled = 0;
    let mut i = 0;
    while i < runs.len() {
        let (byte, count) = runs[i];
        let mut n = 0;
        while n < count {
            assert!(filled < GLYPH_HEIGHT, "glyph runs exceed 16 rows");
            rows[filled] = byte;
            filled += 1;
            n += 1;
        }
        i += 1;
    }
    assert!(filled == GLYPH_HEIGHT, "glyph runs must cover 16 rows");
    rows
}

/// Build a glyph by repeating a row pattern down the whole cell.
pub const fn tile(pattern: &[u8]) -> Rows {
    assert!(
        !pattern.is_empty() && GLYPH_HEIGHT % pattern.len() == 0,
        "pattern length must divide 16"
    );
    let mut rows = [0u8; GLYPH_HEIGHT];
    let mut i = 0;
    while i < GLYPH_HEIGHT {
        rows[i] = pattern[i % pattern.len()];
        i += 1;
    }
    rows
}

/// A borrowed glyph bitmap with an explicit pixel width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap<'a> {
    rows: &'a [u8],
    width: usize,
}

impl<'a> Bitmap<'a> {
    /// Full-width (8 pixel) bitmap
    pub const fn new(rows: &'a [u8]) -> Self {
        Self {
            rows,
            width: GLYPH_WIDTH,
        }
    }

    /// Bitmap using only the leftmost `width` bits of each row
    pub fn with_width(rows: &'a [u8], width: usize) -> Result<Self> {
        if width == 0 || width > GLYPH_WIDTH {
            return Err(Error::GlyphWidth(width));
        }
        Ok(Self { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the pixel at (col, row) is foreground
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        col < self.width
            && self
                .rows
                .get(row)
                .is_some_and(|bits| bits & (0x80 >> col) != 0)
    }

    /// Iterate the (col, row) of every foreground pixel, row-major
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + 'a {
        let bitmap = *self;
        (0..bitmap.height()).flat_map(move |row| {
            (0..bitmap.width)
                .filter(move |&col| bitmap.is_set(col, row))
                .map(move |col| (col, row))
        })
    }

    /// Number of foreground pixels
    pub fn lit_count(&self) -> usize {
        let mask = u8::MAX << (GLYPH_WIDTH - self.width);
        self.rows
            .iter()
            .map(|bits| (bits & mask).count_ones() as usize)
            .sum()
    }
}

/// A labelled glyph, positioned in the grid by its index in the entry list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphEntry<'a> {
    pub label: &'a str,
    pub bitmap: Bitmap<'a>,
}

impl<'a> GlyphEntry<'a> {
    pub const fn new(label: &'a str, rows: &'a [u8]) -> Self {
        Self {
            label,
            bitmap: Bitmap::new(rows),
        }
    }
}
