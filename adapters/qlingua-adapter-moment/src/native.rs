//! Moment-structured circuit model.
//!
//! A [`MomentCircuit`] is a list of [`Moment`]s; each moment holds
//! operations on disjoint qubits. Appending an operation places it in the
//! earliest moment after the last one that touches any of its qubits.

use std::f64::consts::PI;
use std::fmt;

use qlingua_convert::{ConvertError, ConvertResult};
use qlingua_sim::{BitOrder, Op, SimResult, Simulate, Statevector, run};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::ADAPTER_NAME;

/// A qubit on a line, identified by its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineQubit(pub u32);

impl fmt::Display for LineQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q({})", self.0)
    }
}

/// Gates of the moment toolkit.
///
/// Rotations store a half-turn exponent: `Rx { exponent: 0.5 }` rotates by
/// `π/2` radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MomentGate {
    I,
    H,
    X,
    Y,
    Z,
    S,
    T,
    #[serde(rename = "CNOT")]
    Cnot,
    #[serde(rename = "CZ")]
    Cz,
    #[serde(rename = "SWAP")]
    Swap,
    #[serde(rename = "TOFFOLI")]
    Toffoli,
    #[serde(rename = "ISWAP")]
    ISwap,
    Rx {
        exponent: f64,
    },
    Ry {
        exponent: f64,
    },
    Rz {
        exponent: f64,
    },
    #[serde(rename = "measure")]
    Measure {
        #[serde(default)]
        key: String,
    },
}

impl MomentGate {
    /// X rotation by `radians`.
    pub fn rx(radians: f64) -> Self {
        MomentGate::Rx {
            exponent: radians / PI,
        }
    }

    /// Y rotation by `radians`.
    pub fn ry(radians: f64) -> Self {
        MomentGate::Ry {
            exponent: radians / PI,
        }
    }

    /// Z rotation by `radians`.
    pub fn rz(radians: f64) -> Self {
        MomentGate::Rz {
            exponent: radians / PI,
        }
    }

    /// Measurement under `key`.
    pub fn measure(key: impl Into<String>) -> Self {
        MomentGate::Measure { key: key.into() }
    }

    /// The toolkit's spelling of the gate.
    pub fn name(&self) -> &'static str {
        match self {
            MomentGate::I => "I",
            MomentGate::H => "H",
            MomentGate::X => "X",
            MomentGate::Y => "Y",
            MomentGate::Z => "Z",
            MomentGate::S => "S",
            MomentGate::T => "T",
            MomentGate::Cnot => "CNOT",
            MomentGate::Cz => "CZ",
            MomentGate::Swap => "SWAP",
            MomentGate::Toffoli => "TOFFOLI",
            MomentGate::ISwap => "ISWAP",
            MomentGate::Rx { .. } => "Rx",
            MomentGate::Ry { .. } => "Ry",
            MomentGate::Rz { .. } => "Rz",
            MomentGate::Measure { .. } => "measure",
        }
    }

    /// Number of qubits, or `None` for measurements (which take any number).
    pub fn num_qubits(&self) -> Option<usize> {
        match self {
            MomentGate::Measure { .. } => None,
            MomentGate::Cnot | MomentGate::Cz | MomentGate::Swap | MomentGate::ISwap => Some(2),
            MomentGate::Toffoli => Some(3),
            _ => Some(1),
        }
    }

    /// Whether this is a measurement.
    pub fn is_measurement(&self) -> bool {
        matches!(self, MomentGate::Measure { .. })
    }

    /// Apply the gate to `qubits`.
    pub fn on(self, qubits: impl IntoIterator<Item = LineQubit>) -> MomentOperation {
        MomentOperation {
            gate: self,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Engine operation, or `None` for gates with no state action.
    fn sim_op(&self) -> Option<Op> {
        Some(match self {
            MomentGate::I => Op::I,
            MomentGate::H => Op::H,
            MomentGate::X => Op::X,
            MomentGate::Y => Op::Y,
            MomentGate::Z => Op::Z,
            MomentGate::S => Op::Phase(PI / 2.0),
            MomentGate::T => Op::Phase(PI / 4.0),
            MomentGate::Cnot => Op::Cx,
            MomentGate::Cz => Op::Cz,
            MomentGate::Swap => Op::Swap,
            MomentGate::Toffoli => Op::Ccx,
            MomentGate::ISwap => Op::ISwap,
            MomentGate::Rx { exponent } => Op::Rx(exponent * PI),
            MomentGate::Ry { exponent } => Op::Ry(exponent * PI),
            MomentGate::Rz { exponent } => Op::Rz(exponent * PI),
            MomentGate::Measure { .. } => return None,
        })
    }
}

impl fmt::Display for MomentGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MomentGate::Rx { exponent } | MomentGate::Ry { exponent } | MomentGate::Rz { exponent } => {
                write!(f, "{}({exponent}π)", self.name())
            }
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// A gate applied to specific qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentOperation {
    pub gate: MomentGate,
    pub qubits: Vec<LineQubit>,
}

impl MomentOperation {
    pub(crate) fn validate(&self) -> ConvertResult<()> {
        if let Some(expected) = self.gate.num_qubits() {
            if expected != self.qubits.len() {
                return Err(ConvertError::invalid_native(
                    ADAPTER_NAME,
                    format!(
                        "{} acts on {expected} qubit(s), got {}",
                        self.gate.name(),
                        self.qubits.len()
                    ),
                ));
            }
        }
        let mut seen = FxHashSet::default();
        for q in &self.qubits {
            if !seen.insert(*q) {
                return Err(ConvertError::invalid_native(
                    ADAPTER_NAME,
                    format!("{} uses {q} more than once", self.gate.name()),
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Display for MomentOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qubits = self
            .qubits
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({qubits})", self.gate)
    }
}

/// Operations that happen at the same time, on disjoint qubits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    pub operations: Vec<MomentOperation>,
}

impl Moment {
    /// Whether any operation in this moment touches one of `qubits`.
    pub fn operates_on(&self, qubits: &[LineQubit]) -> bool {
        self.operations
            .iter()
            .any(|op| op.qubits.iter().any(|q| qubits.contains(q)))
    }
}

/// A circuit organized in moments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MomentCircuit {
    pub moments: Vec<Moment>,
}

impl MomentCircuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation using the earliest-moment strategy.
    pub fn append(&mut self, operation: MomentOperation) -> ConvertResult<()> {
        operation.validate()?;
        let index = self
            .moments
            .iter()
            .rposition(|m| m.operates_on(&operation.qubits))
            .map_or(0, |last| last + 1);
        if index == self.moments.len() {
            self.moments.push(Moment::default());
        }
        self.moments[index].operations.push(operation);
        Ok(())
    }

    /// Append a gate on `qubits`.
    pub fn push(
        &mut self,
        gate: MomentGate,
        qubits: impl IntoIterator<Item = u32>,
    ) -> ConvertResult<()> {
        self.append(gate.on(qubits.into_iter().map(LineQubit)))
    }

    /// All operations in application order.
    pub fn all_operations(&self) -> impl Iterator<Item = &MomentOperation> {
        self.moments.iter().flat_map(|m| m.operations.iter())
    }

    /// Distinct qubits touched by any operation.
    pub fn all_qubits(&self) -> FxHashSet<LineQubit> {
        self.all_operations()
            .flat_map(|op| op.qubits.iter().copied())
            .collect()
    }

    /// One past the largest qubit index, or 0 for an empty circuit.
    pub fn num_qubits(&self) -> u32 {
        self.all_qubits().iter().map(|q| q.0.saturating_add(1)).max().unwrap_or(0)
    }

    /// Number of moments.
    pub fn depth(&self) -> usize {
        self.moments.len()
    }
}

/// Line qubit `i` is bit `n-1-i` of the state index. Measurements are
/// skipped and do not count towards `n`.
impl Simulate for MomentCircuit {
    fn statevector(&self) -> SimResult<Statevector> {
        let ops: Vec<(Op, Vec<u32>)> = self
            .all_operations()
            .filter_map(|op| {
                op.gate
                    .sim_op()
                    .map(|sim| (sim, op.qubits.iter().map(|q| q.0).collect()))
            })
            .collect();
        let num_qubits = ops
            .iter()
            .flat_map(|(_, qubits)| qubits.iter())
            .map(|&q| q as usize + 1)
            .max()
            .unwrap_or(0);
        run(num_qubits, BitOrder::BigEndian, ops)
    }
}
