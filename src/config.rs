//! Command-line configuration
//!
//! With no arguments every direction is generated into `docs/charset`.

use std::path::PathBuf;

use clap::Parser;

use crate::direction::Direction;

/// CLI arguments for the character grid generator
#[derive(Parser, Debug, Clone)]
#[command(name = "gen-chargrids")]
#[command(version)]
#[command(about = "Render 8x16 character-set design directions as SVG grids", long_about = None)]
pub struct CliArgs {
    /// Directory the SVG files are written to
    #[arg(short, long, value_name = "DIR", default_value = "docs/charset")]
    pub out_dir: PathBuf,

    /// Direction to generate (repeatable; default: all)
    #[arg(short, long, value_enum, value_name = "DIRECTION")]
    pub direction: Vec<Direction>,

    /// Print a JSON summary of the generated files
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Directions to render, in render order and without duplicates
    pub fn directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.direction.is_empty() || self.direction.contains(d))
            .collect()
    }
}
