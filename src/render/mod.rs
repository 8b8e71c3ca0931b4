//! Glyph Grid Renderer
//!
//! Lays glyph entries out row-major in a fixed-column grid and emits one
//! square per foreground pixel, a label per glyph, and title, subtitle and
//! footer text. Output is deterministic: the same entries and sheet always
//! produce the same bytes.

pub mod geometry;
pub mod svg;

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

pub use geometry::GridGeometry;
pub use svg::SvgBuilder;

use crate::error::{Error, Result};
use crate::glyph::GlyphEntry;

/// Fill colors for one sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style<'a> {
    /// Canvas fill
    pub background: &'a str,
    /// Pixel and text fill
    pub foreground: &'a str,
}

impl Style<'_> {
    fn stylesheet(&self) -> [String; 5] {
        let bg = self.background;
        let fg = self.foreground;
        [
            format!(".bg {{ fill: {bg}; }}"),
            format!(".px {{ fill: {fg}; }}"),
            format!(".lbl {{ fill: {fg}; font-family: monospace; font-size: 11px; opacity: 0.7; }}"),
            format!(".title {{ fill: {fg}; font-family: monospace; font-size: 18px; }}"),
            format!(".sub {{ fill: {fg}; font-family: monospace; font-size: 12px; opacity: 0.6; }}"),
        ]
    }
}

/// Text and colors surrounding the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sheet<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub footer: &'a str,
    pub style: Style<'a>,
}

/// Figures describing a rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    /// Number of glyphs placed
    pub glyphs: usize,
    /// Number of grid rows
    pub rows: usize,
    /// Number of pixel rectangles emitted
    pub pixels: usize,
    /// Canvas width
    pub width: usize,
    /// Canvas height
    pub height: usize,
}

/// A rendered SVG document
#[derive(Debug, Clone)]
pub struct Rendered {
    pub document: String,
    pub stats: RenderStats,
}

/// Render `entries` into an SVG grid document.
///
/// Every bitmap must be exactly `geometry.glyph_height` rows tall and at
/// most `geometry.glyph_width` pixels wide.
pub fn render_grid(
    entries: &[GlyphEntry<'_>],
    sheet: &Sheet<'_>,
    geometry: &GridGeometry,
) -> Result<Rendered> {
    geometry.validate()?;

    for entry in entries {
        let bitmap = &entry.bitmap;
        if bitmap.height() != geometry.glyph_height || bitmap.width() > geometry.glyph_width {
            return Err(Error::GlyphSize {
                label: entry.label.to_string(),
                width: bitmap.width(),
                height: bitmap.height(),
                expected_width: geometry.glyph_width,
                expected_height: geometry.glyph_height,
            });
        }
    }

    let (width, height) = geometry.canvas_size(entries.len());
    let scale = geometry.scale;

    let mut svg = SvgBuilder::new(width, height);
    svg.title(sheet.title);
    svg.stylesheet(sheet.style.stylesheet());
    svg.backdrop("bg", width, height);
    svg.text(
        "title",
        geometry.margin,
        geometry.margin + geometry.title_baseline,
        sheet.title,
    );
    svg.text(
        "sub",
        geometry.margin,
        geometry.margin + geometry.subtitle_baseline,
        sheet.subtitle,
    );

    svg.open_group("px");
    let mut pixels = 0;
    for (index, entry) in entries.iter().enumerate() {
        let (ox, oy) = geometry.glyph_origin(index);
        let (row, col) = geometry.grid_position(index);
        debug!(index, row, col, label = entry.label, "placing glyph");

        for (px, py) in entry.bitmap.pixels() {
            svg.pixel(ox + px * scale, oy + py * scale, scale);
            pixels += 1;
        }
        svg.text("lbl", ox, geometry.label_y(oy), entry.label);
    }
    svg.close_group();

    svg.text(
        "sub",
        geometry.margin,
        geometry.footer_y(entries.len()),
        sheet.footer,
    );

    Ok(Rendered {
        document: svg.finish(),
        stats: RenderStats {
            glyphs: entries.len(),
            rows: geometry.grid_rows(entries.len()),
            pixels,
            width,
            height,
        },
    })
}

/// Render `entries` and write the document to `destination`, replacing
/// any existing file. Missing parent directories are created.
pub fn write_grid(
    entries: &[GlyphEntry<'_>],
    sheet: &Sheet<'_>,
    geometry: &GridGeometry,
    destination: &Path,
) -> Result<RenderStats> {
    let rendered = render_grid(entries, sheet, geometry)?;

    let write_err = |source: io::Error| Error::Write {
        path: destination.to_path_buf(),
        source,
    };
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(destination, rendered.document.as_bytes()).map_err(write_err)?;

    info!(
        path = %destination.display(),
        glyphs = rendered.stats.glyphs,
        pixels = rendered.stats.pixels,
        "wrote character grid"
    );
    Ok(rendered.stats)
}
