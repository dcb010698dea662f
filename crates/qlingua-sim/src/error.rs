//! Error types for simulation.

use qlingua_ir::IrError;
use qlingua_token::TokenError;
use thiserror::Error;

/// Errors that can occur while simulating a circuit.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The circuit could not be parsed.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// A gate record is ill-formed.
    #[error(transparent)]
    Ir(#[from] IrError),

    /// The gate has no statevector action.
    #[error("Cannot simulate gate '{0}'")]
    UnsupportedGate(String),

    /// A gate was given the wrong number of qubits or bits.
    #[error("Operation {op} acts on {expected} qubit(s), got {got}")]
    ArityMismatch {
        op: String,
        expected: usize,
        got: usize,
    },

    /// A gate targets a bit beyond the register.
    #[error("Qubit {qubit} out of range for {num_qubits}-qubit state")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    /// A gate names the same qubit twice.
    #[error("Operation {op} uses qubit {qubit} more than once")]
    DuplicateQubit { op: String, qubit: usize },

    /// The state would not fit in memory.
    #[error("Too many qubits: {requested} (max {max})")]
    TooManyQubits { requested: usize, max: usize },
}

/// Result type for simulation.
pub type SimResult<T> = Result<T, SimError>;
