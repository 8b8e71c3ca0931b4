//! Grid Geometry
//!
//! All layout arithmetic for the glyph grid. Every position is a pure
//! function of the entry index (or entry count) and these constants.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Layout constants for a glyph grid, in output pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridGeometry {
    /// Output pixels per glyph pixel
    pub scale: usize,
    /// Glyph width in glyph pixels
    pub glyph_width: usize,
    /// Glyph height in glyph pixels
    pub glyph_height: usize,
    /// Glyphs per grid row
    pub columns: usize,
    /// Horizontal gap between glyph cells
    pub gap_x: usize,
    /// Vertical gap between grid rows
    pub gap_y: usize,
    /// Height reserved for the label under each glyph
    pub label_height: usize,
    /// Outer margin
    pub margin: usize,
    /// Height reserved above the grid for title and subtitle
    pub title_band: usize,
    /// Height reserved below the grid for the footer
    pub footer_band: usize,
    /// Offset of the first grid row below the margin
    pub grid_top: usize,
    /// Title baseline below the margin
    pub title_baseline: usize,
    /// Subtitle baseline below the margin
    pub subtitle_baseline: usize,
    /// Label baseline below the bottom of the glyph cell
    pub label_baseline: usize,
    /// Footer baseline below the last grid row
    pub footer_offset: usize,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            scale: 4,
            glyph_width: GLYPH_WIDTH,
            glyph_height: GLYPH_HEIGHT,
            columns: 8,
            gap_x: 12,
            gap_y: 24,
            label_height: 16,
            margin: 20,
            title_band: 60,
            footer_band: 40,
            grid_top: 50,
            title_baseline: 18,
            subtitle_baseline: 36,
            label_baseline: 14,
            footer_offset: 10,
        }
    }
}

impl GridGeometry {
    /// Check that the geometry can lay out glyphs
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(Error::Geometry("columns must be at least 1".to_string()));
        }
        if self.scale == 0 {
            return Err(Error::Geometry("scale must be at least 1".to_string()));
        }
        if self.glyph_width == 0 || self.glyph_width > GLYPH_WIDTH {
            return Err(Error::Geometry(format!(
                "glyph width {} outside 1..={}",
                self.glyph_width, GLYPH_WIDTH
            )));
        }
        if self.glyph_height == 0 {
            return Err(Error::Geometry("glyph height must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Scaled glyph cell width
    pub fn cell_width(&self) -> usize {
        self.glyph_width * self.scale
    }

    /// Scaled glyph cell height
    pub fn cell_height(&self) -> usize {
        self.glyph_height * self.scale
    }

    /// Horizontal distance between neighbouring glyph origins
    pub fn pitch_x(&self) -> usize {
        self.cell_width() + self.gap_x
    }

    /// Vertical distance between neighbouring grid rows
    pub fn pitch_y(&self) -> usize {
        self.cell_height() + self.gap_y + self.label_height
    }

    /// Number of grid rows needed for `count` entries
    pub fn grid_rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// (row, col) of the entry at `index`, row-major
    pub fn grid_position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Top-left output coordinate of the entry at `index`
    pub fn glyph_origin(&self, index: usize) -> (usize, usize) {
        let (row, col) = self.grid_position(index);
        (
            self.margin + col * self.pitch_x(),
            self.margin + self.grid_top + row * self.pitch_y(),
        )
    }

    /// Label baseline for a glyph whose origin is at `origin_y`
    pub fn label_y(&self, origin_y: usize) -> usize {
        origin_y + self.cell_height() + self.label_baseline
    }

    /// Canvas (width, height) for `count` entries
    pub fn canvas_size(&self, count: usize) -> (usize, usize) {
        let width = self.margin * 2 + self.columns * self.pitch_x();
        let height =
            self.margin + self.title_band + self.grid_rows(count) * self.pitch_y() + self.footer_band;
        (width, height)
    }

    /// Footer baseline for `count` entries
    pub fn footer_y(&self, count: usize) -> usize {
        self.margin + self.grid_top + self.grid_rows(count) * self.pitch_y() + self.footer_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_rejects_degenerate_geometry() {
        let base = GridGeometry::default();
        assert!(base.validate().is_ok());

        let broken = [
            GridGeometry { columns: 0, ..base },
            GridGeometry { scale: 0, ..base },
            GridGeometry { glyph_width: 0, ..base },
            GridGeometry { glyph_width: 9, ..base },
            GridGeometry { glyph_height: 0, ..base },
        ];
        for geometry in broken {
            assert!(
                matches!(geometry.validate(), Err(Error::Geometry(_))),
                "{geometry:?} should be rejected"
            );
        }

        assert!(GridGeometry { glyph_width: 1, columns: 1, ..base }
            .validate()
            .is_ok());
    }

    #[test]
    fn test_default_cell_dimensions() {
        let geometry = GridGeometry::default();
        assert_eq!(geometry.cell_width(), 32);
        assert_eq!(geometry.cell_height(), 64);
        assert_eq!(geometry.pitch_x(), 44);
        assert_eq!(geometry.pitch_y(), 104);
    }

    #[test]
    fn test_grid_rows_rounds_up() {
        let geometry = GridGeometry::default();
        assert_eq!(geometry.grid_rows(0), 0);
        assert_eq!(geometry.grid_rows(1), 1);
        assert_eq!(geometry.grid_rows(8), 1);
        assert_eq!(geometry.grid_rows(9), 2);
        assert_eq!(geometry.grid_rows(16), 2);
        assert_eq!(geometry.grid_rows(17), 3);
    }

    #[test]
    fn test_first_row_shares_row_and_ninth_wraps() {
        let geometry = GridGeometry::default();
        for i in 0..8 {
            assert_eq!(geometry.grid_position(i), (0, i));
        }
        assert_eq!(geometry.grid_position(8), (1, 0));
        assert_eq!(geometry.glyph_origin(0), (20, 70));
        assert_eq!(geometry.glyph_origin(7), (20 + 7 * 44, 70));
        assert_eq!(geometry.glyph_origin(8), (20, 174));
    }

    #[test]
    fn test_canvas_size() {
        let geometry = GridGeometry::default();
        assert_eq!(geometry.canvas_size(8), (392, 20 + 60 + 104 + 40));
        assert_eq!(geometry.canvas_size(9), (392, 20 + 60 + 2 * 104 + 40));
        assert_eq!(geometry.canvas_size(41), (392, 744));
    }

    #[test]
    fn test_label_and_footer_baselines() {
        let geometry = GridGeometry::default();
        let (_, oy) = geometry.glyph_origin(0);
        assert_eq!(geometry.label_y(oy), 70 + 64 + 14);
        assert_eq!(geometry.footer_y(9), 20 + 50 + 2 * 104 + 10);
    }

    proptest! {
        #[test]
        fn prop_grid_position_is_row_major(index in 0usize..10_000) {
            let geometry = GridGeometry::default();
            let (row, col) = geometry.grid_position(index);
            prop_assert_eq!(row, index / 8);
            prop_assert_eq!(col, index % 8);
            prop_assert_eq!(row * geometry.columns + col, index);
        }

        #[test]
        fn prop_every_glyph_fits_the_canvas(count in 1usize..500) {
            let geometry = GridGeometry::default();
            let (width, height) = geometry.canvas_size(count);
            let (ox, oy) = geometry.glyph_origin(count - 1);
            prop_assert!(ox + geometry.cell_width() <= width);
            prop_assert!(geometry.label_y(oy) < geometry.footer_y(count));
            prop_assert!(geometry.footer_y(count) < height);
        }
    }
}
