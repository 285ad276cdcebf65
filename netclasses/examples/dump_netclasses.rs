//! Dump the net classes of a project file, one class per line with its nets.

use netclasses::prelude::*;
use netclasses::{normalize_label, parse_project};
use std::path::Path;

fn main() -> Result<(), ExtractError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/legacy_classes.kicad_pro".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example dump_netclasses [path/to/project.kicad_pro]");
        std::process::exit(1);
    }

    let project = parse_project(path)?;

    println!("Net classes in: {}", path.display());
    for class in project.classes() {
        println!(
            "  {} ({}): {}",
            normalize_label(&class.name),
            class.name,
            class.nets().join(", ")
        );
    }
    Ok(())
}
