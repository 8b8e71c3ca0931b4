//! Design Directions
//!
//! Each direction is a themed selection of catalog glyphs plus the text and
//! colors of its sheet. Both share letters, digits, blocks and arrows; they
//! differ in box-drawing style, symbols, and a trio of signature glyphs.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;
use crate::glyph::catalog::{
    arrows, atascii, blocks, box_cp437, box_sharp, cp437, letters, numbers, symbols,
};
use crate::glyph::{GlyphEntry, Rows};
use crate::render::{write_grid, GridGeometry, RenderStats, Sheet, Style};

const BACKGROUND: &str = "#1a1a2e";

const LETTERS: &[(&str, &Rows)] = &[
    ("A", &letters::A),
    ("B", &letters::B),
    ("C", &letters::C),
    ("M", &letters::M),
    ("W", &letters::W),
    ("a", &letters::A_LOWER),
    ("b", &letters::B_LOWER),
    ("c", &letters::C_LOWER),
    ("m", &letters::M_LOWER),
    ("w", &letters::W_LOWER),
];

const NUMBERS: &[(&str, &Rows)] = &[
    ("0", &numbers::ZERO),
    ("1", &numbers::ONE),
    ("8", &numbers::EIGHT),
];

const BLOCKS: &[(&str, &Rows)] = &[
    ("█ full", &blocks::FULL),
    ("▀ top", &blocks::UHALF),
    ("▄ btm", &blocks::LHALF),
    ("▌ left", &blocks::LHBLK),
    ("▐ right", &blocks::RHBLK),
    ("qtr", &blocks::QTR),
    ("░ lite", &blocks::LIGHT),
    ("▒ med", &blocks::MED),
    ("▓ dark", &blocks::DARK),
];

const ARROWS: &[(&str, &Rows)] = &[
    ("←", &arrows::LEFT),
    ("→", &arrows::RIGHT),
    ("↑", &arrows::UP),
    ("↓", &arrows::DOWN),
];

const BOX_SHARP: &[(&str, &Rows)] = &[
    ("┌ TL", &box_sharp::TL),
    ("─ H", &box_sharp::H),
    ("┐ TR", &box_sharp::TR),
    ("│ V", &box_sharp::V),
    ("└ BL", &box_sharp::BL),
    ("┘ BR", &box_sharp::BR),
    ("├ LT", &box_sharp::LT),
    ("┤ RT", &box_sharp::RT),
    ("┃ hvy", &box_sharp::HV),
    ("━ hvy", &box_sharp::HH),
];

const BOX_CP437: &[(&str, &Rows)] = &[
    ("┌ TL", &box_cp437::TL),
    ("─ H", &box_cp437::H),
    ("┐ TR", &box_cp437::TR),
    ("│ V", &box_cp437::V),
    ("└ BL", &box_cp437::BL),
    ("┘ BR", &box_cp437::BR),
    ("├ LT", &box_cp437::LT),
    ("┤ RT", &box_cp437::RT),
    ("═ dbl", &box_cp437::DH),
    ("║ dbl", &box_cp437::DV),
    ("╔ dbl", &box_cp437::DTL),
    ("╗ dbl", &box_cp437::DTR),
];

const SYMBOLS_ATARI: &[(&str, &Rows)] = &[
    ("• bullet", &symbols::BULLET),
    ("° degree", &symbols::DEGREE),
];

const SYMBOLS_CP437: &[(&str, &Rows)] = &[
    ("• bullet", &symbols::BULLET),
    ("° degree", &symbols::DEGREE),
    ("♥", &symbols::HEART),
    ("◆", &symbols::DIAMOND),
];

const ATASCII_UNIQUE: &[(&str, &Rows)] = &[
    ("▶ tri", &atascii::TRI_R),
    ("diag B", &atascii::DIAG_B),
    ("xhair B", &atascii::XHAIR),
];

const CP437_UNIQUE: &[(&str, &Rows)] = &[
    ("π pi", &cp437::PI),
    ("⌂ house", &cp437::HOUSE),
    ("§ sect", &cp437::SECT),
];

/// A character-set design direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Direction B: "Atari Technical"
    #[value(name = "b")]
    AtariTechnical,
    /// Direction C: "CP437 Utility"
    #[value(name = "c")]
    Cp437Utility,
}

impl Direction {
    /// All directions, in render order
    pub const ALL: [Direction; 2] = [Direction::AtariTechnical, Direction::Cp437Utility];

    /// Short key used on the command line and in file names
    pub fn key(self) -> &'static str {
        match self {
            Direction::AtariTechnical => "b",
            Direction::Cp437Utility => "c",
        }
    }

    pub fn file_name(self) -> String {
        format!("dir_{}_chars.svg", self.key())
    }

    /// Glyph groups in grid order
    fn groups(self) -> [&'static [(&'static str, &'static Rows)]; 7] {
        match self {
            Direction::AtariTechnical => [
                LETTERS,
                NUMBERS,
                BOX_SHARP,
                BLOCKS,
                ARROWS,
                SYMBOLS_ATARI,
                ATASCII_UNIQUE,
            ],
            Direction::Cp437Utility => [
                LETTERS,
                NUMBERS,
                BOX_CP437,
                BLOCKS,
                ARROWS,
                SYMBOLS_CP437,
                CP437_UNIQUE,
            ],
        }
    }

    /// Ordered glyph entries for this direction's grid
    pub fn entries(self) -> Vec<GlyphEntry<'static>> {
        self.groups()
            .into_iter()
            .flatten()
            .map(|&(label, rows)| GlyphEntry::new(label, rows))
            .collect()
    }

    pub fn sheet(self) -> Sheet<'static> {
        match self {
            Direction::AtariTechnical => Sheet {
                title: "Direction B: \"Atari Technical\" — Character Grid",
                subtitle: "8×16 pixel characters · 4× zoom · Sharp corners, angular precision, maximum contrast",
                footer: "Key traits: Sharp 90° corners · Angular geometric shapes · Precise line work · ATASCII reticle + triangle + diagonal",
                style: Style {
                    background: BACKGROUND,
                    foreground: "#ffaa00",
                },
            },
            Direction::Cp437Utility => Sheet {
                title: "Direction C: \"CP437 Utility\" — Character Grid",
                subtitle: "8×16 pixel characters · 4× zoom · Clean lines, balanced readability, proven CP437 proportions",
                footer: "Key traits: Clean professional lines · Double-line box drawing · Information density · CP437 pi + house + section",
                style: Style {
                    background: BACKGROUND,
                    foreground: "#cccccc",
                },
            },
        }
    }

    /// Render this direction's grid into `out_dir`
    pub fn generate(self, out_dir: &Path, geometry: &GridGeometry) -> Result<Summary> {
        let path = out_dir.join(self.file_name());
        let stats = write_grid(&self.entries(), &self.sheet(), geometry, &path)?;
        Ok(Summary {
            direction: self,
            path,
            geometry: *geometry,
            stats,
        })
    }
}

/// Outcome of generating one direction
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub direction: Direction,
    pub path: PathBuf,
    /// Layout the grid was rendered with
    pub geometry: GridGeometry,
    pub stats: RenderStats,
}
