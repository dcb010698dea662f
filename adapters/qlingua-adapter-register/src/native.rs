//! Register-based circuit model.
//!
//! A [`RegisterCircuit`] declares its quantum and classical register sizes up
//! front and holds a flat list of instructions. Qubit 0 is the least
//! significant bit of a measured outcome.

use std::f64::consts::PI;
use std::fmt;

use qlingua_convert::{ConvertError, ConvertResult};
use qlingua_sim::{BitOrder, Op, SimResult, Simulate, Statevector, run};
use serde::{Deserialize, Serialize};

use crate::ADAPTER_NAME;

/// Gates of the register toolkit. Angles are in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum RegisterGate {
    Id,
    H,
    X,
    Y,
    Z,
    S,
    Sdg,
    T,
    Tdg,
    Cx,
    Cz,
    Swap,
    Ccx,
    Rx { theta: f64 },
    Ry { theta: f64 },
    Rz { theta: f64 },
    U1 { lambda: f64 },
    U2 { phi: f64, lambda: f64 },
    U3 { theta: f64, phi: f64, lambda: f64 },
    Measure { clbit: u32 },
}

impl RegisterGate {
    /// The toolkit's spelling of the gate.
    pub fn name(&self) -> &'static str {
        match self {
            RegisterGate::Id => "id",
            RegisterGate::H => "h",
            RegisterGate::X => "x",
            RegisterGate::Y => "y",
            RegisterGate::Z => "z",
            RegisterGate::S => "s",
            RegisterGate::Sdg => "sdg",
            RegisterGate::T => "t",
            RegisterGate::Tdg => "tdg",
            RegisterGate::Cx => "cx",
            RegisterGate::Cz => "cz",
            RegisterGate::Swap => "swap",
            RegisterGate::Ccx => "ccx",
            RegisterGate::Rx { .. } => "rx",
            RegisterGate::Ry { .. } => "ry",
            RegisterGate::Rz { .. } => "rz",
            RegisterGate::U1 { .. } => "u1",
            RegisterGate::U2 { .. } => "u2",
            RegisterGate::U3 { .. } => "u3",
            RegisterGate::Measure { .. } => "measure",
        }
    }

    /// Number of qubits the gate acts on.
    pub fn num_qubits(&self) -> usize {
        match self {
            RegisterGate::Cx | RegisterGate::Cz | RegisterGate::Swap => 2,
            RegisterGate::Ccx => 3,
            _ => 1,
        }
    }

    /// Whether this is a measurement.
    pub fn is_measurement(&self) -> bool {
        matches!(self, RegisterGate::Measure { .. })
    }

    /// Engine operation, or `None` for gates with no state action.
    fn sim_op(&self) -> Option<Op> {
        Some(match *self {
            RegisterGate::Id => Op::I,
            RegisterGate::H => Op::H,
            RegisterGate::X => Op::X,
            RegisterGate::Y => Op::Y,
            RegisterGate::Z => Op::Z,
            RegisterGate::S => Op::Phase(PI / 2.0),
            RegisterGate::Sdg => Op::Phase(-PI / 2.0),
            RegisterGate::T => Op::Phase(PI / 4.0),
            RegisterGate::Tdg => Op::Phase(-PI / 4.0),
            RegisterGate::Cx => Op::Cx,
            RegisterGate::Cz => Op::Cz,
            RegisterGate::Swap => Op::Swap,
            RegisterGate::Ccx => Op::Ccx,
            RegisterGate::Rx { theta } => Op::Rx(theta),
            RegisterGate::Ry { theta } => Op::Ry(theta),
            RegisterGate::Rz { theta } => Op::Rz(theta),
            RegisterGate::U1 { lambda } => Op::Phase(lambda),
            RegisterGate::U2 { phi, lambda } => Op::U(PI / 2.0, phi, lambda),
            RegisterGate::U3 { theta, phi, lambda } => Op::U(theta, phi, lambda),
            RegisterGate::Measure { .. } => return None,
        })
    }
}

/// A gate applied to qubits of the register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterInstruction {
    #[serde(flatten)]
    pub gate: RegisterGate,
    pub qubits: Vec<u32>,
}

impl fmt::Display for RegisterInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qubits = self
            .qubits
            .iter()
            .map(|q| format!("q[{q}]"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} {qubits}", self.gate.name())
    }
}

/// A circuit over a fixed-size quantum register.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterCircuit {
    num_qubits: u32,
    #[serde(default)]
    num_clbits: u32,
    #[serde(default)]
    instructions: Vec<RegisterInstruction>,
}

impl RegisterCircuit {
    /// Create an empty circuit with `num_qubits` qubits and no classical bits.
    pub fn new(num_qubits: u32) -> Self {
        Self::with_clbits(num_qubits, 0)
    }

    /// Create an empty circuit with both register sizes.
    pub fn with_clbits(num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            num_qubits,
            num_clbits,
            instructions: Vec::new(),
        }
    }

    /// Declared number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Declared number of classical bits.
    pub fn num_clbits(&self) -> u32 {
        self.num_clbits
    }

    /// Instructions in application order.
    pub fn instructions(&self) -> &[RegisterInstruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Append `gate` on `qubits`, checking them against the register.
    pub fn append(
        &mut self,
        gate: RegisterGate,
        qubits: impl IntoIterator<Item = u32>,
    ) -> ConvertResult<()> {
        let qubits: Vec<u32> = qubits.into_iter().collect();
        if qubits.len() != gate.num_qubits() {
            return Err(ConvertError::invalid_native(
                ADAPTER_NAME,
                format!(
                    "{} acts on {} qubit(s), got {}",
                    gate.name(),
                    gate.num_qubits(),
                    qubits.len()
                ),
            ));
        }
        for (i, &q) in qubits.iter().enumerate() {
            if q >= self.num_qubits {
                return Err(ConvertError::invalid_native(
                    ADAPTER_NAME,
                    format!("qubit {q} out of range for {} qubits", self.num_qubits),
                ));
            }
            if qubits[..i].contains(&q) {
                return Err(ConvertError::invalid_native(
                    ADAPTER_NAME,
                    format!("{} uses qubit {q} more than once", gate.name()),
                ));
            }
        }
        if let RegisterGate::Measure { clbit } = gate {
            if clbit >= self.num_clbits {
                return Err(ConvertError::invalid_native(
                    ADAPTER_NAME,
                    format!("clbit {clbit} out of range for {} clbits", self.num_clbits),
                ));
            }
        }
        self.instructions.push(RegisterInstruction { gate, qubits });
        Ok(())
    }

    pub fn h(&mut self, q: u32) -> ConvertResult<()> {
        self.append(RegisterGate::H, [q])
    }

    pub fn x(&mut self, q: u32) -> ConvertResult<()> {
        self.append(RegisterGate::X, [q])
    }

    pub fn cx(&mut self, control: u32, target: u32) -> ConvertResult<()> {
        self.append(RegisterGate::Cx, [control, target])
    }

    pub fn ccx(&mut self, c1: u32, c2: u32, target: u32) -> ConvertResult<()> {
        self.append(RegisterGate::Ccx, [c1, c2, target])
    }

    pub fn rx(&mut self, theta: f64, q: u32) -> ConvertResult<()> {
        self.append(RegisterGate::Rx { theta }, [q])
    }

    pub fn u1(&mut self, lambda: f64, q: u32) -> ConvertResult<()> {
        self.append(RegisterGate::U1 { lambda }, [q])
    }

    pub fn u2(&mut self, phi: f64, lambda: f64, q: u32) -> ConvertResult<()> {
        self.append(RegisterGate::U2 { phi, lambda }, [q])
    }

    pub fn u3(&mut self, theta: f64, phi: f64, lambda: f64, q: u32) -> ConvertResult<()> {
        self.append(RegisterGate::U3 { theta, phi, lambda }, [q])
    }

    pub fn measure(&mut self, q: u32, clbit: u32) -> ConvertResult<()> {
        self.append(RegisterGate::Measure { clbit }, [q])
    }
}

/// Register qubit `i` is bit `i` of the state index.
impl Simulate for RegisterCircuit {
    fn statevector(&self) -> SimResult<Statevector> {
        let ops = self
            .instructions
            .iter()
            .filter_map(|inst| inst.gate.sim_op().map(|op| (op, inst.qubits.as_slice())));
        run(self.num_qubits as usize, BitOrder::LittleEndian, ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_checks_register() {
        let mut circuit = RegisterCircuit::new(2);
        assert!(circuit.h(1).is_ok());
        assert!(circuit.h(2).is_err());
        assert!(circuit.cx(0, 0).is_err());
        assert!(circuit.append(RegisterGate::Cx, [0]).is_err());
        assert!(circuit.measure(0, 0).is_err());
        assert_eq!(circuit.len(), 1);
    }

    #[test]
    fn test_little_endian_simulation() {
        let mut circuit = RegisterCircuit::new(2);
        circuit.x(0).unwrap();
        let probs = circuit.probabilities().unwrap();
        assert!((probs[0b01] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_serde_shape() {
        let mut circuit = RegisterCircuit::with_clbits(1, 1);
        circuit.u1(0.5, 0).unwrap();
        circuit.measure(0, 0).unwrap();
        let json = serde_json::to_value(&circuit).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "num_qubits": 1,
                "num_clbits": 1,
                "instructions": [
                    {"name": "u1", "lambda": 0.5, "qubits": [0]},
                    {"name": "measure", "clbit": 0, "qubits": [0]},
                ]
            })
        );
        let back: RegisterCircuit = serde_json::from_value(json).unwrap();
        assert_eq!(back, circuit);
    }

    #[test]
    fn test_display() {
        let inst = RegisterInstruction {
            gate: RegisterGate::Cx,
            qubits: vec![1, 0],
        };
        assert_eq!(inst.to_string(), "cx q[1], q[0]");
    }
}
