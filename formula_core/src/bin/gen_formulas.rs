//! Generate FORMULAS.md from the formula registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-formulas
//! ```
//!
//! The generated file is written to `formula_core/FORMULAS.md`, or to the
//! path given as the first argument.

use std::fs;
use std::path::PathBuf;

use formula_core::registry::{formula_count, generate_formulas_markdown};

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("formula_core/FORMULAS.md"));

    println!("Generating reference for {} formulas...", formula_count());
    let markdown = generate_formulas_markdown();

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!("Wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}
