//! The closed canonical gate vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical gate names.
///
/// The vocabulary is fixed: every token either names one of these gates or
/// fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateName {
    // Single-qubit gates
    /// Identity gate.
    I,
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,

    // Three-qubit gates
    /// Toffoli (CCX) gate.
    CCX,

    // Rotation gates
    /// Rotation around X axis.
    RX,
    /// Rotation around Y axis.
    RY,
    /// Rotation around Z axis.
    RZ,
}

/// Gates addressed by qubits only.
pub static PARAMETER_FREE_GATES: &[GateName] = &[
    GateName::I,
    GateName::H,
    GateName::X,
    GateName::Y,
    GateName::Z,
    GateName::S,
    GateName::T,
    GateName::CX,
    GateName::CZ,
    GateName::Swap,
    GateName::CCX,
];

/// Gates that take a parameter list before their qubit list.
pub static PARAMETER_GATES: &[GateName] = &[GateName::RX, GateName::RY, GateName::RZ];

impl GateName {
    /// Every gate in the vocabulary, parameter-free gates first.
    pub fn all() -> impl Iterator<Item = GateName> {
        PARAMETER_FREE_GATES
            .iter()
            .chain(PARAMETER_GATES.iter())
            .copied()
    }

    /// Upper-case canonical spelling.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GateName::I => "I",
            GateName::H => "H",
            GateName::X => "X",
            GateName::Y => "Y",
            GateName::Z => "Z",
            GateName::S => "S",
            GateName::T => "T",
            GateName::CX => "CX",
            GateName::CZ => "CZ",
            GateName::Swap => "SWAP",
            GateName::CCX => "CCX",
            GateName::RX => "RX",
            GateName::RY => "RY",
            GateName::RZ => "RZ",
        }
    }

    /// Whether tokens for this gate carry a parameter group.
    #[inline]
    pub fn is_parameterized(self) -> bool {
        matches!(self, GateName::RX | GateName::RY | GateName::RZ)
    }

    /// Number of qubits this gate acts on.
    #[inline]
    pub fn num_qubits(self) -> usize {
        match self {
            GateName::I
            | GateName::H
            | GateName::X
            | GateName::Y
            | GateName::Z
            | GateName::S
            | GateName::T
            | GateName::RX
            | GateName::RY
            | GateName::RZ => 1,

            GateName::CX | GateName::CZ | GateName::Swap => 2,

            GateName::CCX => 3,
        }
    }

    /// Number of real parameters this gate takes.
    #[inline]
    pub fn num_params(self) -> usize {
        usize::from(self.is_parameterized())
    }
}

impl fmt::Display for GateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name is outside the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is not recognized")]
pub struct UnknownGateName(pub String);

impl FromStr for GateName {
    type Err = UnknownGateName;

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        GateName::all()
            .find(|g| g.name() == upper)
            .ok_or(UnknownGateName(upper))
    }
}
