//! Convert command implementation.

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use super::common::{load_circuit, write_output};
use crate::config::OutputConfig;
use crate::format::{AnyCircuit, Format};

/// Load `input` as `from` and convert it to `to`.
pub fn convert_file(input: &str, from: Format, to: Format) -> Result<AnyCircuit> {
    let circuit = load_circuit(input, from)?;
    let converted = circuit
        .convert(to)
        .with_context(|| format!("Failed to convert {from} circuit to {to}"))?;
    info!(%from, %to, "converted {input}");
    Ok(converted)
}

/// Execute the convert command.
///
/// With no output file the converted circuit goes to stdout and nothing
/// else is printed there.
pub fn execute(
    input: &str,
    from: Format,
    to: Format,
    output_path: Option<&str>,
    output: &OutputConfig,
) -> Result<()> {
    let converted = convert_file(input, from, to)?;
    let rendered = converted.render(output.pretty)?;
    write_output(&rendered, output_path)?;

    if let Some(path) = output_path {
        println!(
            "{} Converted {} ({}) to {} ({})",
            style("✓").green().bold(),
            style(input).green(),
            from,
            style(path).green(),
            style(to).yellow()
        );
    }
    Ok(())
}
