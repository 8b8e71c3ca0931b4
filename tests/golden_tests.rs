//! Golden tests for the generated character grids
//!
//! These tests render both directions end to end and check the documents
//! against properties that must hold for every grid: one rectangle per lit
//! pixel, labels in entry order, geometry from the entry count, and
//! byte-identical output across runs.

use std::fs;
use std::process::Command;

use chargrid::{render_grid, Direction, GridGeometry};

fn pixel_rects(document: &str) -> usize {
    document
        .lines()
        .filter(|line| line.starts_with("    <rect "))
        .count()
}

#[test]
fn test_pixel_rects_match_lit_pixels() {
    let geometry = GridGeometry::default();
    for direction in Direction::ALL {
        let entries = direction.entries();
        let expected: usize = entries.iter().map(|e| e.bitmap.lit_count()).sum();

        let rendered = render_grid(&entries, &direction.sheet(), &geometry).unwrap();
        assert_eq!(pixel_rects(&rendered.document), expected);
        assert_eq!(rendered.stats.pixels, expected);
    }
}

#[test]
fn test_labels_in_entry_order() {
    let direction = Direction::Cp437Utility;
    let entries = direction.entries();
    let rendered = render_grid(&entries, &direction.sheet(), &GridGeometry::default()).unwrap();

    let mut cursor = 0;
    for entry in &entries {
        let needle = format!(">{}</text>", entry.label);
        let found = rendered.document[cursor..]
            .find(&needle)
            .unwrap_or_else(|| panic!("label {:?} missing or out of order", entry.label));
        cursor += found + needle.len();
    }
}

#[test]
fn test_canvas_geometry() {
    let rendered = render_grid(
        &Direction::AtariTechnical.entries(),
        &Direction::AtariTechnical.sheet(),
        &GridGeometry::default(),
    )
    .unwrap();

    assert_eq!(rendered.stats.glyphs, 41);
    assert_eq!(rendered.stats.rows, 6);
    assert_eq!((rendered.stats.width, rendered.stats.height), (392, 744));
    assert!(rendered
        .document
        .starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="392" height="744" viewBox="0 0 392 744">"#));
    assert!(rendered
        .document
        .ends_with("  </g>\n  <text class=\"sub\" x=\"20\" y=\"704\">Key traits: Sharp 90° corners · Angular geometric shapes · Precise line work · ATASCII reticle + triangle + diagonal</text>\n</svg>"));
}

#[test]
fn test_direction_styles() {
    let geometry = GridGeometry::default();
    let b = render_grid(
        &Direction::AtariTechnical.entries(),
        &Direction::AtariTechnical.sheet(),
        &geometry,
    )
    .unwrap();
    let c = render_grid(
        &Direction::Cp437Utility.entries(),
        &Direction::Cp437Utility.sheet(),
        &geometry,
    )
    .unwrap();

    assert!(b.document.contains("    .bg { fill: #1a1a2e; }"));
    assert!(b.document.contains("    .px { fill: #ffaa00; }"));
    assert!(c.document.contains("    .px { fill: #cccccc; }"));
    assert!(b
        .document
        .contains("<title>Direction B: \"Atari Technical\" — Character Grid</title>"));
    assert!(c.document.contains(">╔ dbl</text>"));
    assert!(!b.document.contains(">╔ dbl</text>"));
}

#[test]
fn test_generation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let geometry = GridGeometry::default();

    let first: Vec<_> = Direction::ALL
        .iter()
        .map(|d| {
            let summary = d.generate(dir.path(), &geometry).unwrap();
            fs::read(&summary.path).unwrap()
        })
        .collect();
    let second: Vec<_> = Direction::ALL
        .iter()
        .map(|d| {
            let summary = d.generate(dir.path(), &geometry).unwrap();
            fs::read(&summary.path).unwrap()
        })
        .collect();

    assert_eq!(first, second);
    assert_ne!(first[0], first[1]);
}

#[test]
fn test_cli_generates_both_directions() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("charset");

    let run = || {
        Command::new(env!("CARGO_BIN_EXE_gen-chargrids"))
            .arg("--out-dir")
            .arg(&out_dir)
            .output()
            .expect("failed to run gen-chargrids")
    };

    let output = run();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Generated ") && lines[0].ends_with("dir_b_chars.svg (41 characters)"));
    assert!(lines[1].ends_with("dir_c_chars.svg (45 characters)"));
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "All character grids generated.");

    let b = fs::read(out_dir.join("dir_b_chars.svg")).unwrap();
    let c = fs::read(out_dir.join("dir_c_chars.svg")).unwrap();

    assert!(run().status.success());
    assert_eq!(fs::read(out_dir.join("dir_b_chars.svg")).unwrap(), b);
    assert_eq!(fs::read(out_dir.join("dir_c_chars.svg")).unwrap(), c);
}

#[test]
fn test_cli_json_summary() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_gen-chargrids"))
        .arg("--out-dir")
        .arg(dir.path())
        .args(["--direction", "b", "--json"])
        .output()
        .expect("failed to run gen-chargrids");
    assert!(output.status.success());

    let summaries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let summaries = summaries.as_array().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0]["direction"], "atari-technical");
    assert_eq!(summaries[0]["stats"]["glyphs"], 41);
    assert_eq!(summaries[0]["stats"]["height"], 744);
    assert_eq!(summaries[0]["geometry"]["columns"], 8);
    assert_eq!(summaries[0]["geometry"]["scale"], 4);
    assert!(dir.path().join("dir_b_chars.svg").exists());
    assert!(!dir.path().join("dir_c_chars.svg").exists());
}

#[test]
fn test_cli_fails_when_output_is_unwritable() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"occupied").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_gen-chargrids"))
        .arg("--out-dir")
        .arg(&blocker)
        .output()
        .expect("failed to run gen-chargrids");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write"), "stderr was: {stderr}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("All character grids generated."));
    assert_eq!(fs::read(&blocker).unwrap(), b"occupied");
}
