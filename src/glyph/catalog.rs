//! Glyph Catalog
//!
//! The 8x16 bitmaps shown on the comparison grids, grouped by theme.
//! Letters, digits, blocks, arrows and symbols are shared by every
//! direction; the box-drawing sets and the last two groups are specific
//! to one direction.

use super::{stack, tile, Rows};

/// Upper- and lowercase letters with distinctive widths
pub mod letters {
    use super::Rows;

    pub const A: Rows = [0x00, 0x18, 0x3C, 0x66, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const B: Rows = [0x00, 0x7C, 0x66, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const C: Rows = [0x00, 0x3C, 0x66, 0x60, 0x60, 0x60, 0x60, 0x60, 0x66, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const M: Rows = [0x00, 0xC3, 0xE7, 0xFF, 0xDB, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const W: Rows = [0x00, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xDB, 0xFF, 0xE7, 0xC3, 0xC3, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const A_LOWER: Rows = [0x00, 0x00, 0x00, 0x00, 0x3C, 0x06, 0x3E, 0x66, 0x66, 0x66, 0x3E, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const B_LOWER: Rows = [0x00, 0x60, 0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const C_LOWER: Rows = [0x00, 0x00, 0x00, 0x00, 0x3C, 0x66, 0x60, 0x60, 0x60, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const M_LOWER: Rows = [0x00, 0x00, 0x00, 0x00, 0xE6, 0xFF, 0xDB, 0xDB, 0xC3, 0xC3, 0xC3, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const W_LOWER: Rows = [0x00, 0x00, 0x00, 0x00, 0xC3, 0xC3, 0xC3, 0xDB, 0xFF, 0xE7, 0xC3, 0x00, 0x00, 0x00, 0x00, 0x00];
}

pub mod numbers {
    use super::Rows;

    pub const ZERO: Rows = [0x00, 0x3C, 0x66, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const ONE: Rows = [0x00, 0x18, 0x38, 0x78, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const EIGHT: Rows = [0x00, 0x3C, 0x66, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00];
}

/// Single-line box drawing, shared by both box sets
pub mod box_light {
    use super::{stack, Rows};

    /// ┌
    pub const TL: Rows = stack(&[(0x00, 7), (0x1F, 2), (0x18, 7)]);
    /// ─
    pub const H: Rows = stack(&[(0x00, 7), (0xFF, 2), (0x00, 7)]);
    /// ┐
    pub const TR: Rows = stack(&[(0x00, 7), (0xF8, 2), (0x18, 7)]);
    /// │
    pub const V: Rows = stack(&[(0x18, 16)]);
    /// └
    pub const BL: Rows = stack(&[(0x18, 7), (0x1F, 2), (0x00, 7)]);
    /// ┘
    pub const BR: Rows = stack(&[(0x18, 7), (0xF8, 2), (0x00, 7)]);
    /// ├
    pub const LT: Rows = stack(&[(0x18, 7), (0x1F, 2), (0x18, 7)]);
    /// ┤
    pub const RT: Rows = stack(&[(0x18, 7), (0xF8, 2), (0x18, 7)]);
}

/// Sharp-cornered box drawing with heavy strokes
pub mod box_sharp {
    use super::{stack, Rows};

    pub use super::box_light::{BL, BR, H, LT, RT, TL, TR, V};

    /// ┃ (3px wide)
    pub const HV: Rows = stack(&[(0x3C, 16)]);
    /// ━
    pub const HH: Rows = stack(&[(0x00, 6), (0xFF, 4), (0x00, 6)]);
}

/// CP437 box drawing with double-line strokes
pub mod box_cp437 {
    use super::{stack, Rows};

    pub use super::box_light::{BL, BR, H, LT, RT, TL, TR, V};

    /// ═
    pub const DH: Rows = stack(&[(0x00, 6), (0xFF, 1), (0x00, 1), (0xFF, 1), (0x00, 7)]);
    /// ║
    pub const DV: Rows = stack(&[(0x24, 16)]);
    /// ╔
    pub const DTL: Rows = stack(&[(0x00, 6), (0x1F, 1), (0x10, 1), (0x17, 1), (0x24, 7)]);
    /// ╗
    pub const DTR: Rows = stack(&[(0x00, 6), (0xF8, 1), (0x08, 1), (0xE8, 1), (0x24, 7)]);
}

pub mod blocks {
    use super::{stack, tile, Rows};

    /// █
    pub const FULL: Rows = stack(&[(0xFF, 16)]);
    /// ▀
    pub const UHALF: Rows = stack(&[(0xFF, 8), (0x00, 8)]);
    /// ▄
    pub const LHALF: Rows = stack(&[(0x00, 8), (0xFF, 8)]);
    /// ▌
    pub const LHBLK: Rows = stack(&[(0xF0, 16)]);
    /// ▐
    pub const RHBLK: Rows = stack(&[(0x0F, 16)]);
    /// Upper-left quarter
    pub const QTR: Rows = stack(&[(0xF0, 8), (0x00, 8)]);
    /// ░
    pub const LIGHT: Rows = tile(&[0x22, 0x00, 0x88, 0x00]);
    /// ▒
    pub const MED: Rows = tile(&[0xAA, 0x55]);
    /// ▓
    pub const DARK: Rows = tile(&[0xDD, 0xFF, 0x77, 0xFF]);
}

pub mod arrows {
    use super::Rows;

    pub const LEFT: Rows = [0x00, 0x00, 0x00, 0x00, 0x20, 0x60, 0xFF, 0xFF, 0x60, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const RIGHT: Rows = [0x00, 0x00, 0x00, 0x00, 0x04, 0x06, 0xFF, 0xFF, 0x06, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const UP: Rows = [0x00, 0x18, 0x3C, 0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const DOWN: Rows = [0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x3C, 0x18, 0x00, 0x00, 0x00];
}

pub mod symbols {
    use super::Rows;

    pub const BULLET: Rows = [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x3C, 0x3C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const DEGREE: Rows = [0x00, 0x38, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const HEART: Rows = [0x00, 0x00, 0x00, 0x66, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    pub const DIAMOND: Rows = [0x00, 0x00, 0x18, 0x3C, 0x7E, 0xFF, 0x7E, 0x3C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
}

/// ATASCII-inspired glyphs unique to the Atari direction
pub mod atascii {
    use super::Rows;

    /// Right-pointing triangle
    pub const TRI_R: Rows = [0x00, 0x40, 0x60, 0x70, 0x78, 0x7C, 0x7E, 0x7F, 0x7E, 0x7C, 0x78, 0x70, 0x60, 0x40, 0x00, 0x00];
    /// Angular slash pattern
    pub const DIAG_B: Rows = [0x00, 0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0x00, 0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0];
    /// Crosshair
    pub const XHAIR: Rows = [0x00, 0x18, 0x18, 0x18, 0xDB, 0xFF, 0xDB, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
}

/// CP437-inspired glyphs unique to the CP437 direction
pub mod cp437 {
    use super::Rows;

    /// π
    pub const PI: Rows = [0x00, 0x00, 0x00, 0x00, 0x7E, 0x24, 0x24, 0x24, 0x24, 0x24, 0x64, 0x00, 0x00, 0x00, 0x00, 0x00];
    /// ⌂
    pub const HOUSE: Rows = [0x00, 0x18, 0x3C, 0x7E, 0xFF, 0xC3, 0xDB, 0xDB, 0xDB, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    /// §
    pub const SECT: Rows = [0x00, 0x3C, 0x66, 0x30, 0x3C, 0x66, 0x66, 0x3C, 0x0C, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00];
}
