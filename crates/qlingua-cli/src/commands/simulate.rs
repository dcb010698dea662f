//! Simulate command implementation.

use anyhow::{Context, Result};
use console::style;
use qlingua::sim::bitstring;
use serde::Serialize;

use super::common::{load_circuit, write_output};
use crate::config::OutputConfig;
use crate::format::{AnyCircuit, Format};

/// Measurement distribution of a circuit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub format: String,
    pub num_qubits: usize,
    /// Outcomes above the threshold, in state-index order.
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// Measured bits, qubit 0 first.
    pub bitstring: String,
    pub probability: f64,
}

/// Run `circuit` on the statevector engine and keep outcomes whose
/// probability exceeds `threshold`.
pub fn distribution(circuit: &AnyCircuit, threshold: f64) -> Result<Distribution> {
    let probs = circuit
        .probabilities()
        .with_context(|| format!("Failed to simulate {} circuit", circuit.format()))?;
    let num_qubits = probs.len().trailing_zeros() as usize;

    let outcomes = probs
        .iter()
        .enumerate()
        .filter(|(_, p)| **p > threshold)
        .map(|(index, p)| Outcome {
            bitstring: if num_qubits == 0 {
                String::new()
            } else {
                bitstring(index, num_qubits)
            },
            probability: *p,
        })
        .collect();

    Ok(Distribution {
        format: circuit.format().to_string(),
        num_qubits,
        outcomes,
    })
}

/// Execute the simulate command.
pub fn execute(input: &str, format: Format, json: bool, output: &OutputConfig) -> Result<()> {
    let circuit = load_circuit(input, format)?;
    let dist = distribution(&circuit, output.threshold)?;

    if json {
        let mut rendered = if output.pretty {
            serde_json::to_string_pretty(&dist)?
        } else {
            serde_json::to_string(&dist)?
        };
        rendered.push('\n');
        return write_output(&rendered, None);
    }

    println!(
        "{} Simulating {} ({}, {} qubits)",
        style("→").cyan().bold(),
        style(input).green(),
        style(format).yellow(),
        dist.num_qubits
    );
    let precision = output.precision;
    for outcome in &dist.outcomes {
        println!(
            "  |{}⟩  {:.precision$}",
            style(&outcome.bitstring).cyan(),
            outcome.probability
        );
    }
    println!(
        "{} {} outcomes above {}",
        style("✓").green().bold(),
        dist.outcomes.len(),
        output.threshold
    );
    Ok(())
}
