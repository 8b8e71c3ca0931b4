//! Character Grid Generator
//!
//! Writes one SVG character grid per design direction.

use std::io;
use std::process::ExitCode;

use chargrid::config::CliArgs;
use chargrid::{GridGeometry, Result, Summary};
use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let geometry = GridGeometry::default();
    let mut summaries: Vec<Summary> = Vec::new();

    for direction in args.directions() {
        let summary = direction.generate(&args.out_dir, &geometry)?;
        if !args.json {
            println!(
                "Generated {} ({} characters)",
                summary.path.display(),
                summary.stats.glyphs
            );
        }
        summaries.push(summary);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        println!("\nAll character grids generated.");
    }

    Ok(())
}
