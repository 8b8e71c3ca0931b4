//! Error types for grid rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Grid rendering error type
#[derive(Error, Debug)]
pub enum Error {
    /// The output document could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bitmap width outside the 1..=8 bits a row byte can hold
    #[error("Invalid glyph width {0} (must be 1..=8)")]
    GlyphWidth(usize),

    /// Bitmap does not fit the geometry's glyph cell
    #[error(
        "Glyph '{label}' is {width}x{height}, expected at most {expected_width} wide and exactly {expected_height} tall"
    )]
    GlyphSize {
        label: String,
        width: usize,
        height: usize,
        expected_width: usize,
        expected_height: usize,
    },

    /// Grid geometry cannot lay out any glyph
    #[error("Invalid grid geometry: {0}")]
    Geometry(String),

    /// Summary serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for grid rendering
pub type Result<T> = std::result::Result<T, Error>;
