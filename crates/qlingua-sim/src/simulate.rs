//! Running circuits on the statevector engine.

use std::f64::consts::PI;

use qlingua_ir::{GateName, GateRecord, implied_qubit_count};
use qlingua_token::CanonicalCircuit;
use tracing::trace;

use crate::error::{SimError, SimResult};
use crate::statevector::{Op, Statevector};

/// How a toolkit's qubit indices map onto bit positions of the state index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    /// Qubit 0 is the most significant bit.
    BigEndian,
    /// Qubit 0 is the least significant bit.
    LittleEndian,
}

impl BitOrder {
    /// Bit position of `qubit` in an `num_qubits`-qubit state.
    pub fn bit(self, qubit: u32, num_qubits: usize) -> SimResult<usize> {
        let q = qubit as usize;
        if q >= num_qubits {
            return Err(SimError::QubitOutOfRange {
                qubit: q,
                num_qubits,
            });
        }
        Ok(match self {
            BitOrder::BigEndian => num_qubits - 1 - q,
            BitOrder::LittleEndian => q,
        })
    }
}

/// A circuit representation that can be executed on the statevector engine.
pub trait Simulate {
    /// Final state after applying every gate to |0...0⟩.
    fn statevector(&self) -> SimResult<Statevector>;

    /// Measurement probabilities of the final state.
    fn probabilities(&self) -> SimResult<Vec<f64>> {
        Ok(self.statevector()?.probabilities())
    }
}

/// Apply `ops` in order to a fresh state.
///
/// Each entry pairs an operation with the toolkit qubit indices it acts on;
/// `order` maps those indices to bit positions.
pub fn run<I, Q>(num_qubits: usize, order: BitOrder, ops: I) -> SimResult<Statevector>
where
    I: IntoIterator<Item = (Op, Q)>,
    Q: AsRef<[u32]>,
{
    let mut state = Statevector::new(num_qubits)?;
    let mut bits = Vec::with_capacity(3);
    for (op, qubits) in ops {
        bits.clear();
        for &q in qubits.as_ref() {
            bits.push(order.bit(q, num_qubits)?);
        }
        trace!(%op, ?bits, "apply");
        state.apply(op, &bits)?;
    }
    Ok(state)
}

/// The engine operation for a canonical gate.
pub fn canonical_op(record: &GateRecord) -> SimResult<Op> {
    record.check_arity()?;
    Ok(match record.name {
        GateName::I => Op::I,
        GateName::H => Op::H,
        GateName::X => Op::X,
        GateName::Y => Op::Y,
        GateName::Z => Op::Z,
        GateName::S => Op::Phase(PI / 2.0),
        GateName::T => Op::Phase(PI / 4.0),
        GateName::CX => Op::Cx,
        GateName::CZ => Op::Cz,
        GateName::Swap => Op::Swap,
        GateName::CCX => Op::Ccx,
        GateName::RX => Op::Rx(record.angle()?),
        GateName::RY => Op::Ry(record.angle()?),
        GateName::RZ => Op::Rz(record.angle()?),
    })
}

/// Canonical circuits are big-endian over their implied qubit count.
impl Simulate for CanonicalCircuit {
    fn statevector(&self) -> SimResult<Statevector> {
        let gates = self.gates()?;
        let num_qubits = implied_qubit_count(gates.iter().flat_map(|g| g.qubits.iter())) as usize;
        let ops = gates
            .iter()
            .map(|g| Ok((canonical_op(g)?, g.qubits.iter().map(|q| q.0).collect::<Vec<_>>())))
            .collect::<SimResult<Vec<_>>>()?;
        run(num_qubits, BitOrder::BigEndian, ops)
    }
}

/// Render a state index as a bitstring, qubit 0 first.
///
/// Assumes the big-endian layout, so the result reads in canonical qubit
/// order.
pub fn bitstring(index: usize, num_qubits: usize) -> String {
    format!("{index:0num_qubits$b}")
}

/// Whether two distributions agree entry by entry within `tolerance`.
pub fn same_distribution(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_order() {
        assert_eq!(BitOrder::BigEndian.bit(0, 3).unwrap(), 2);
        assert_eq!(BitOrder::LittleEndian.bit(0, 3).unwrap(), 0);
        assert!(BitOrder::BigEndian.bit(3, 3).is_err());
    }

    #[test]
    fn test_canonical_x_on_first_qubit() {
        let circuit = CanonicalCircuit::from_tokens(["X(0)", "I(1)"]);
        let probs = circuit.probabilities().unwrap();
        // |10⟩ in qubit order
        assert!((probs[0b10] - 1.0).abs() < 1e-12);
        assert_eq!(bitstring(0b10, 2), "10");
    }

    #[test]
    fn test_canonical_bell() {
        let circuit = CanonicalCircuit::from_tokens(["H(0)", "CX(0, 1)"]);
        let probs = circuit.probabilities().unwrap();
        assert!(same_distribution(&probs, &[0.5, 0.0, 0.0, 0.5], 1e-12));
    }

    #[test]
    fn test_canonical_arity_is_checked() {
        let circuit = CanonicalCircuit::from_tokens(["CX(0)"]);
        assert!(matches!(circuit.statevector(), Err(SimError::Ir(_))));
    }

    #[test]
    fn test_empty_circuit() {
        let probs = CanonicalCircuit::new().probabilities().unwrap();
        assert_eq!(probs, vec![1.0]);
    }
}
