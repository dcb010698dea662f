//! Circuit file formats understood by the CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use qlingua::sim::{SimResult, Simulate};
use qlingua::{
    Adapter, Canonical, CanonicalCircuit, ConvertResult, MomentAdapter, MomentCircuit,
    RegisterAdapter, RegisterCircuit, TimedAdapter, TimedCircuit,
};
use serde::Serialize;

/// A circuit representation the CLI can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Gate tokens, one per line
    Canonical,
    /// Moment-structured toolkit circuit (JSON)
    Moment,
    /// Register toolkit circuit (JSON)
    Register,
    /// Time-keyed toolkit circuit (JSON)
    Timed,
}

impl Format {
    pub const ALL: [Format; 4] = [
        Format::Canonical,
        Format::Moment,
        Format::Register,
        Format::Timed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Format::Canonical => Canonical::NAME,
            Format::Moment => MomentAdapter::NAME,
            Format::Register => RegisterAdapter::NAME,
            Format::Timed => TimedAdapter::NAME,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Format::Canonical => "gate tokens, one per line (`//` comments allowed)",
            Format::Moment => "moments of operations on line qubits, rotations as half-turns",
            Format::Register => "flat instruction list, qubit 0 least significant",
            Format::Timed => "gates keyed by (time, qubits), rotations as half-angles",
        }
    }

    /// Encoding used on disk.
    pub fn encoding(self) -> &'static str {
        match self {
            Format::Canonical => "text",
            Format::Moment | Format::Register | Format::Timed => "json",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A circuit in any of the supported formats.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyCircuit {
    Canonical(CanonicalCircuit),
    Moment(MomentCircuit),
    Register(RegisterCircuit),
    Timed(TimedCircuit),
}

impl AnyCircuit {
    /// Read a circuit of the given format from file contents.
    ///
    /// Canonical circuits are accepted both as line text and as a JSON list
    /// of tokens.
    pub fn read(format: Format, source: &str) -> Result<Self> {
        let circuit = match format {
            Format::Canonical => {
                let circuit = if source.trim_start().starts_with('[') {
                    let circuit: CanonicalCircuit = serde_json::from_str(source)
                        .context("Invalid canonical JSON: expected a list of gate tokens")?;
                    circuit.validate()?;
                    circuit
                } else {
                    CanonicalCircuit::parse_lines(source)?
                };
                AnyCircuit::Canonical(circuit)
            }
            Format::Moment => AnyCircuit::Moment(
                serde_json::from_str(source).context("Invalid moment circuit JSON")?,
            ),
            Format::Register => AnyCircuit::Register(
                serde_json::from_str(source).context("Invalid register circuit JSON")?,
            ),
            Format::Timed => AnyCircuit::Timed(
                serde_json::from_str(source).context("Invalid timed circuit JSON")?,
            ),
        };
        Ok(circuit)
    }

    pub fn format(&self) -> Format {
        match self {
            AnyCircuit::Canonical(_) => Format::Canonical,
            AnyCircuit::Moment(_) => Format::Moment,
            AnyCircuit::Register(_) => Format::Register,
            AnyCircuit::Timed(_) => Format::Timed,
        }
    }

    /// Convert to the canonical form through the matching adapter.
    pub fn to_canonical(&self) -> ConvertResult<CanonicalCircuit> {
        match self {
            AnyCircuit::Canonical(c) => Canonical::to_canonical(c),
            AnyCircuit::Moment(c) => MomentAdapter::to_canonical(c),
            AnyCircuit::Register(c) => RegisterAdapter::to_canonical(c),
            AnyCircuit::Timed(c) => TimedAdapter::to_canonical(c),
        }
    }

    /// Build a circuit of `format` from the canonical form.
    pub fn from_canonical(format: Format, circuit: &CanonicalCircuit) -> ConvertResult<Self> {
        Ok(match format {
            Format::Canonical => AnyCircuit::Canonical(Canonical::from_canonical(circuit)?),
            Format::Moment => AnyCircuit::Moment(MomentAdapter::from_canonical(circuit)?),
            Format::Register => AnyCircuit::Register(RegisterAdapter::from_canonical(circuit)?),
            Format::Timed => AnyCircuit::Timed(TimedAdapter::from_canonical(circuit)?),
        })
    }

    /// Convert to `format`, passing through the canonical form.
    pub fn convert(&self, format: Format) -> ConvertResult<Self> {
        Self::from_canonical(format, &self.to_canonical()?)
    }

    /// Render for writing to a file or stdout.
    pub fn render(&self, pretty: bool) -> Result<String> {
        match self {
            AnyCircuit::Canonical(c) => Ok(c.to_string()),
            AnyCircuit::Moment(c) => to_json(c, pretty),
            AnyCircuit::Register(c) => to_json(c, pretty),
            AnyCircuit::Timed(c) => to_json(c, pretty),
        }
    }

    /// Measurement probabilities, indexed with canonical qubit 0 as the
    /// most significant bit.
    pub fn probabilities(&self) -> SimResult<Vec<f64>> {
        match self {
            AnyCircuit::Canonical(c) => c.probabilities(),
            AnyCircuit::Moment(c) => c.probabilities(),
            AnyCircuit::Register(c) => c.probabilities(),
            AnyCircuit::Timed(c) => c.probabilities(),
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');
    Ok(json)
}
