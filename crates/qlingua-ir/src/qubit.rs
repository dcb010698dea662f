//! Qubit identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// Index of a qubit in canonical order.
///
/// Canonical indices form a dense-but-not-necessarily-contiguous space; a
/// circuit's qubit count is `max(index) + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(pub u32);

impl QubitId {
    /// Get the raw index.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }

    /// Mirror this index inside a register of `num_qubits` qubits (`i ↦ n-1-i`).
    pub fn reversed(self, num_qubits: u32) -> IrResult<QubitId> {
        if self.0 >= num_qubits {
            return Err(IrError::QubitOutOfRange {
                qubit: self,
                num_qubits,
            });
        }
        Ok(QubitId(num_qubits - 1 - self.0))
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl From<QubitId> for u32 {
    fn from(id: QubitId) -> Self {
        id.0
    }
}

/// Number of qubits implied by a set of indices (`max + 1`, or 0 when empty).
pub fn implied_qubit_count<'a>(qubits: impl IntoIterator<Item = &'a QubitId>) -> u32 {
    qubits.into_iter().map(|q| q.0.saturating_add(1)).max().unwrap_or(0)
}
