//! Character Grid Generator Library
//!
//! Renders 8x16 bitmap glyphs as scaled-up SVG grids so that candidate
//! character-set designs can be compared side by side.
//!
//! - `glyph`: Bitmap model and the static glyph catalog
//! - `direction`: The design directions and their glyph selections
//! - `render`: Grid geometry and the SVG document renderer
//! - `config`: Command-line configuration

pub mod config;
pub mod direction;
pub mod error;
pub mod glyph;
pub mod render;

pub use direction::{Direction, Summary};
pub use error::{Error, Result};
pub use glyph::{Bitmap, GlyphEntry};
pub use render::{render_grid, write_grid, GridGeometry, RenderStats, Rendered, Sheet, Style};
