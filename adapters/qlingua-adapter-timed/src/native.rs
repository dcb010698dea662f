//! Time-keyed circuit model.
//!
//! A [`TimedCircuit`] is an ordered map from `(time, qubits)` to a gate.
//! Iterating the map in key order visits gates in a valid application
//! order: gates sharing a time step act on disjoint qubits.
//!
//! Rotation gates carry a named `theta` parameter and use the half-angle
//! convention: `Rx(theta)` rotates by `2 * theta` radians.

use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fmt;

use qlingua_convert::{ConvertError, ConvertResult};
use qlingua_sim::{BitOrder, Op, SimResult, Simulate, Statevector, run};
use serde::{Deserialize, Serialize};

use crate::ADAPTER_NAME;

/// Name of the rotation parameter.
pub const THETA: &str = "theta";

/// Gate kinds of the timed toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimedGateName {
    I,
    H,
    X,
    Y,
    Z,
    S,
    /// S-dagger.
    ST,
    T,
    CX,
    CZ,
    SWAP,
    CCX,
    Rx,
    Ry,
    Rz,
}

impl TimedGateName {
    /// Number of qubits the gate acts on.
    pub fn num_qubits(self) -> usize {
        match self {
            TimedGateName::CX | TimedGateName::CZ | TimedGateName::SWAP => 2,
            TimedGateName::CCX => 3,
            _ => 1,
        }
    }

    /// Whether the gate carries a `theta` parameter.
    pub fn is_rotation(self) -> bool {
        matches!(self, TimedGateName::Rx | TimedGateName::Ry | TimedGateName::Rz)
    }
}

impl fmt::Display for TimedGateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A gate with its named parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedGate {
    pub name: TimedGateName,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, f64>,
}

impl TimedGate {
    /// A parameter-free gate.
    pub fn new(name: TimedGateName) -> Self {
        Self {
            name,
            parameters: BTreeMap::new(),
        }
    }

    /// A rotation with native (half-angle) `theta`.
    pub fn rotation(name: TimedGateName, theta: f64) -> Self {
        Self {
            name,
            parameters: BTreeMap::from([(THETA.to_string(), theta)]),
        }
    }

    /// The native `theta` of a rotation.
    pub fn theta(&self) -> ConvertResult<f64> {
        self.parameters.get(THETA).copied().ok_or_else(|| {
            ConvertError::invalid_native(
                ADAPTER_NAME,
                format!("{} is missing parameter '{THETA}'", self.name),
            )
        })
    }

    fn sim_op(&self) -> SimResult<Op> {
        let theta = || {
            self.parameters
                .get(THETA)
                .copied()
                .ok_or_else(|| qlingua_sim::SimError::UnsupportedGate(self.to_string()))
        };
        Ok(match self.name {
            TimedGateName::I => Op::I,
            TimedGateName::H => Op::H,
            TimedGateName::X => Op::X,
            TimedGateName::Y => Op::Y,
            TimedGateName::Z => Op::Z,
            TimedGateName::S => Op::Phase(PI / 2.0),
            TimedGateName::ST => Op::Phase(-PI / 2.0),
            TimedGateName::T => Op::Phase(PI / 4.0),
            TimedGateName::CX => Op::Cx,
            TimedGateName::CZ => Op::Cz,
            TimedGateName::SWAP => Op::Swap,
            TimedGateName::CCX => Op::Ccx,
            TimedGateName::Rx => Op::Rx(2.0 * theta()?),
            TimedGateName::Ry => Op::Ry(2.0 * theta()?),
            TimedGateName::Rz => Op::Rz(2.0 * theta()?),
        })
    }
}

impl fmt::Display for TimedGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.parameters.is_empty() {
            let params = self
                .parameters
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "({params})")?;
        }
        Ok(())
    }
}

/// Position of a gate: its time step and the qubits it occupies.
pub type TimedKey = (u64, Vec<u32>);

/// A circuit keyed by time step and qubits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TimedEntry>", into = "Vec<TimedEntry>")]
pub struct TimedCircuit {
    gates: BTreeMap<TimedKey, TimedGate>,
}

/// Serialized form of one map entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedEntry {
    pub time: u64,
    pub qubits: Vec<u32>,
    pub gate: TimedGate,
}

impl TimedCircuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a gate at the earliest time all its qubits are free.
    pub fn add_gate(
        &mut self,
        gate: TimedGate,
        qubits: impl IntoIterator<Item = u32>,
    ) -> ConvertResult<u64> {
        let qubits: Vec<u32> = qubits.into_iter().collect();
        let time = self
            .gates
            .keys()
            .filter(|(_, used)| used.iter().any(|q| qubits.contains(q)))
            .map(|(t, _)| t.saturating_add(1))
            .max()
            .unwrap_or(0);
        self.add_gate_at(gate, qubits, time)?;
        Ok(time)
    }

    /// Add a gate at an explicit time step.
    ///
    /// `u64::MAX` is reserved so that the time after every gate is representable.
    pub fn add_gate_at(&mut self, gate: TimedGate, qubits: Vec<u32>, time: u64) -> ConvertResult<()> {
        if time == u64::MAX {
            return Err(ConvertError::invalid_native(
                ADAPTER_NAME,
                format!("time {time} is out of range"),
            ));
        }
        if qubits.len() != gate.name.num_qubits() {
            return Err(ConvertError::invalid_native(
                ADAPTER_NAME,
                format!(
                    "{} acts on {} qubit(s), got {}",
                    gate.name,
                    gate.name.num_qubits(),
                    qubits.len()
                ),
            ));
        }
        for (i, q) in qubits.iter().enumerate() {
            if qubits[..i].contains(q) {
                return Err(ConvertError::invalid_native(
                    ADAPTER_NAME,
                    format!("{} uses qubit {q} more than once", gate.name),
                ));
            }
        }
        if self
            .gates
            .keys()
            .any(|(t, used)| *t == time && used.iter().any(|q| qubits.contains(q)))
        {
            return Err(ConvertError::invalid_native(
                ADAPTER_NAME,
                format!("qubits {qubits:?} already occupied at time {time}"),
            ));
        }
        self.gates.insert((time, qubits), gate);
        Ok(())
    }

    pub fn h(&mut self, q: u32) -> ConvertResult<u64> {
        self.add_gate(TimedGate::new(TimedGateName::H), [q])
    }

    pub fn cx(&mut self, control: u32, target: u32) -> ConvertResult<u64> {
        self.add_gate(TimedGate::new(TimedGateName::CX), [control, target])
    }

    pub fn rx(&mut self, q: u32, theta: f64) -> ConvertResult<u64> {
        self.add_gate(TimedGate::rotation(TimedGateName::Rx, theta), [q])
    }

    pub fn ry(&mut self, q: u32, theta: f64) -> ConvertResult<u64> {
        self.add_gate(TimedGate::rotation(TimedGateName::Ry, theta), [q])
    }

    pub fn rz(&mut self, q: u32, theta: f64) -> ConvertResult<u64> {
        self.add_gate(TimedGate::rotation(TimedGateName::Rz, theta), [q])
    }

    /// Gates in key order.
    pub fn gates(&self) -> impl Iterator<Item = (&TimedKey, &TimedGate)> {
        self.gates.iter()
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// One past the largest qubit index, or 0 for an empty circuit.
    pub fn num_qubits(&self) -> u32 {
        self.gates
            .keys()
            .flat_map(|(_, qubits)| qubits.iter().map(|q| q.saturating_add(1)))
            .max()
            .unwrap_or(0)
    }

    /// Number of time steps.
    pub fn num_times(&self) -> u64 {
        self.gates
            .keys()
            .map(|(t, _)| t.saturating_add(1))
            .max()
            .unwrap_or(0)
    }
}

impl TryFrom<Vec<TimedEntry>> for TimedCircuit {
    type Error = ConvertError;

    fn try_from(entries: Vec<TimedEntry>) -> ConvertResult<Self> {
        let mut circuit = TimedCircuit::new();
        for entry in entries {
            circuit.add_gate_at(entry.gate, entry.qubits, entry.time)?;
        }
        Ok(circuit)
    }
}

impl From<TimedCircuit> for Vec<TimedEntry> {
    fn from(circuit: TimedCircuit) -> Self {
        circuit
            .gates
            .into_iter()
            .map(|((time, qubits), gate)| TimedEntry { time, qubits, gate })
            .collect()
    }
}

/// Qubit `i` is bit `n-1-i` of the state index.
impl Simulate for TimedCircuit {
    fn statevector(&self) -> SimResult<Statevector> {
        let ops = self
            .gates
            .iter()
            .map(|((_, qubits), gate)| Ok((gate.sim_op()?, qubits.as_slice())))
            .collect::<SimResult<Vec<_>>>()?;
        run(self.num_qubits() as usize, BitOrder::BigEndian, ops)
    }
}
