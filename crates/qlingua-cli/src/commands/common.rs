//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::format::{AnyCircuit, Format};

/// Load a circuit of `format` from a file.
pub fn load_circuit(path: &str, format: Format) -> Result<AnyCircuit> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    AnyCircuit::read(format, &source)
        .with_context(|| format!("Failed to load {format} circuit from {path}"))
}

/// Write `contents` to `path`, or to stdout when no path is given.
pub fn write_output(contents: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, contents).with_context(|| format!("Failed to write file: {path}"))
        }
        None => {
            print!("{contents}");
            Ok(())
        }
    }
}
