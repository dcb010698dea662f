//! Parse command implementation.

use anyhow::Result;
use console::style;
use qlingua::GateRecord;

use super::common::load_circuit;
use crate::config::OutputConfig;
use crate::format::{AnyCircuit, Format};

/// Parse a canonical circuit file into gate records.
pub fn parse_file(input: &str) -> Result<Vec<GateRecord>> {
    match load_circuit(input, Format::Canonical)? {
        AnyCircuit::Canonical(circuit) => Ok(circuit.gates()?),
        other => anyhow::bail!("Expected a canonical circuit, got {}", other.format()),
    }
}

/// Render one record as a table row.
pub fn describe(index: usize, record: &GateRecord, precision: usize) -> String {
    let qubits = record
        .qubits
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if record.params.is_empty() {
        format!("{index:>4}  {:<5} qubits [{qubits}]", record.name.name())
    } else {
        let params = record
            .params
            .iter()
            .map(|p| format!("{p:.precision$}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{index:>4}  {:<5} qubits [{qubits}]  params [{params}]",
            record.name.name()
        )
    }
}

/// Execute the parse command.
pub fn execute(input: &str, output: &OutputConfig) -> Result<()> {
    println!("{} Parsing {}", style("→").cyan().bold(), style(input).green());

    let records = parse_file(input)?;
    for (i, record) in records.iter().enumerate() {
        println!("{}", describe(i, record, output.precision));
    }

    let num_qubits = qlingua::ir::implied_qubit_count(records.iter().flat_map(|r| r.qubits.iter()));
    println!(
        "{} {} gates on {} qubits",
        style("✓").green().bold(),
        records.len(),
        num_qubits
    );
    Ok(())
}
