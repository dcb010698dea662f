//! Conversion between register circuits and canonical circuits.

use qlingua_convert::{Adapter, ConvertError, ConvertResult};
use qlingua_ir::{GateName, GateRecord, QubitId, implied_qubit_count};
use qlingua_token::{CanonicalCircuit, emit_record, emit_token, format_parameter};
use tracing::{debug, trace};

use crate::ADAPTER_NAME;
use crate::native::{RegisterCircuit, RegisterGate, RegisterInstruction};

/// Adapter for the register toolkit.
///
/// The register toolkit numbers qubits in the opposite order from the
/// canonical form, so every index is mapped `i ↦ n-1-i` in both directions.
/// With that reversal the two forms produce identical probability vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterAdapter;

impl Adapter for RegisterAdapter {
    type Native = RegisterCircuit;
    const NAME: &'static str = ADAPTER_NAME;

    fn to_canonical(native: &RegisterCircuit) -> ConvertResult<CanonicalCircuit> {
        let n = native.num_qubits();
        let mut tokens = Vec::with_capacity(native.len());
        for inst in native.instructions() {
            instruction_tokens(inst, n, &mut tokens)?;
        }
        debug!(
            num_qubits = n,
            instructions = native.len(),
            gates = tokens.len(),
            "register circuit to canonical"
        );
        Ok(CanonicalCircuit::from_tokens(tokens))
    }

    fn from_canonical(circuit: &CanonicalCircuit) -> ConvertResult<RegisterCircuit> {
        let gates = circuit.gates()?;
        let n = implied_qubit_count(gates.iter().flat_map(|g| g.qubits.iter()));
        let mut native = RegisterCircuit::new(n);
        for record in &gates {
            record.check_arity()?;
            let qubits = record
                .qubits
                .iter()
                .map(|q| q.reversed(n).map(QubitId::index))
                .collect::<Result<Vec<_>, _>>()?;
            native.append(native_gate(record)?, qubits)?;
        }
        debug!(
            num_qubits = n,
            gates = gates.len(),
            "canonical to register circuit"
        );
        Ok(native)
    }
}

/// The native instruction for a canonical gate. Rotations stay explicit.
fn native_gate(record: &GateRecord) -> ConvertResult<RegisterGate> {
    Ok(match record.name {
        GateName::I => RegisterGate::Id,
        GateName::H => RegisterGate::H,
        GateName::X => RegisterGate::X,
        GateName::Y => RegisterGate::Y,
        GateName::Z => RegisterGate::Z,
        GateName::S => RegisterGate::S,
        GateName::T => RegisterGate::T,
        GateName::CX => RegisterGate::Cx,
        GateName::CZ => RegisterGate::Cz,
        GateName::Swap => RegisterGate::Swap,
        GateName::CCX => RegisterGate::Ccx,
        GateName::RX => RegisterGate::Rx {
            theta: record.angle()?,
        },
        GateName::RY => RegisterGate::Ry {
            theta: record.angle()?,
        },
        GateName::RZ => RegisterGate::Rz {
            theta: record.angle()?,
        },
    })
}

/// Append the canonical tokens for one instruction.
///
/// `u2` and `u3` expand to three rotations; measurements produce nothing.
fn instruction_tokens(
    inst: &RegisterInstruction,
    n: u32,
    out: &mut Vec<String>,
) -> ConvertResult<()> {
    if inst.qubits.len() != inst.gate.num_qubits() {
        return Err(ConvertError::invalid_native(
            ADAPTER_NAME,
            format!("malformed instruction '{inst}'"),
        ));
    }
    let qubits = inst
        .qubits
        .iter()
        .map(|&q| QubitId(q).reversed(n))
        .collect::<Result<Vec<_>, _>>()?;
    let fixed = |name| emit_record(&GateRecord::fixed(name, qubits.iter().copied()));

    match inst.gate {
        RegisterGate::Measure { .. } => return Ok(()),
        RegisterGate::Sdg | RegisterGate::Tdg => {
            return Err(ConvertError::unsupported(ADAPTER_NAME, inst.gate.name()));
        }
        RegisterGate::Id => out.push(fixed(GateName::I)),
        RegisterGate::H => out.push(fixed(GateName::H)),
        RegisterGate::X => out.push(fixed(GateName::X)),
        RegisterGate::Y => out.push(fixed(GateName::Y)),
        RegisterGate::Z => out.push(fixed(GateName::Z)),
        RegisterGate::S => out.push(fixed(GateName::S)),
        RegisterGate::T => out.push(fixed(GateName::T)),
        RegisterGate::Cx => out.push(fixed(GateName::CX)),
        RegisterGate::Cz => out.push(fixed(GateName::CZ)),
        RegisterGate::Swap => out.push(fixed(GateName::Swap)),
        RegisterGate::Ccx => out.push(fixed(GateName::CCX)),
        RegisterGate::Rx { theta } => out.push(rotation(GateName::RX, theta, qubits[0])),
        RegisterGate::Ry { theta } => out.push(rotation(GateName::RY, theta, qubits[0])),
        RegisterGate::Rz { theta } => out.push(rotation(GateName::RZ, theta, qubits[0])),
        // Equal to RZ up to global phase.
        RegisterGate::U1 { lambda } => out.push(rotation(GateName::RZ, lambda, qubits[0])),
        RegisterGate::U2 { phi, lambda } => {
            out.extend(euler_zxz("PI/2".to_string(), phi, lambda, qubits[0]));
        }
        RegisterGate::U3 { theta, phi, lambda } => {
            out.extend(euler_zxz(format_parameter(theta), phi, lambda, qubits[0]));
        }
    }
    Ok(())
}

fn rotation(name: GateName, angle: f64, qubit: QubitId) -> String {
    emit_record(&GateRecord::rotation(name, angle, qubit))
}

/// `U(θ, φ, λ) = RZ(φ + π/2) · RX(θ) · RZ(λ - π/2)` up to global phase,
/// returned in application order.
fn euler_zxz(theta: String, phi: f64, lambda: f64, qubit: QubitId) -> [String; 3] {
    trace!(%theta, phi, lambda, %qubit, "decomposing u gate");
    let q = [qubit];
    [
        emit_token(
            GateName::RZ,
            &[format!("{} - PI/2", format_parameter(lambda))],
            &q,
        ),
        emit_token(GateName::RX, &[theta], &q),
        emit_token(
            GateName::RZ,
            &[format!("{} + PI/2", format_parameter(phi))],
            &q,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlingua_sim::{Simulate, same_distribution};
    use std::f64::consts::PI;

    #[test]
    fn test_from_canonical_reverses_qubits() {
        let canonical = CanonicalCircuit::from_tokens(["H(0)", "CX(0, 1)"]);
        let native = RegisterAdapter::from_canonical(&canonical).unwrap();
        assert_eq!(native.num_qubits(), 2);
        let rendered: Vec<String> = native.instructions().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["h q[1]", "cx q[1], q[0]"]);
    }

    #[test]
    fn test_to_canonical_reverses_qubits() {
        let mut native = RegisterCircuit::new(3);
        native.h(0).unwrap();
        native.cx(0, 1).unwrap();
        native.rx(0.5, 0).unwrap();
        native.append(RegisterGate::Swap, [1, 2]).unwrap();
        let canonical = RegisterAdapter::to_canonical(&native).unwrap();
        assert_eq!(
            canonical.tokens(),
            ["H(2)", "CX(2, 1)", "RX(0.5)(2)", "SWAP(1, 0)"]
        );
    }

    #[test]
    fn test_identity_alias() {
        let canonical = CanonicalCircuit::from_tokens(["I(0)"]);
        let native = RegisterAdapter::from_canonical(&canonical).unwrap();
        assert_eq!(native.instructions()[0].gate, RegisterGate::Id);
        let back = RegisterAdapter::to_canonical(&native).unwrap();
        assert_eq!(back.tokens(), ["I(0)"]);
    }

    #[test]
    fn test_u_gate_decomposition_tokens() {
        let mut native = RegisterCircuit::new(1);
        native.u1(0.25, 0).unwrap();
        native.u2(1.0, 2.0, 0).unwrap();
        native.u3(0.5, -1.5, 3.0, 0).unwrap();
        let canonical = RegisterAdapter::to_canonical(&native).unwrap();
        assert_eq!(
            canonical.tokens(),
            [
                "RZ(0.25)(0)",
                "RZ(2 - PI/2)(0)",
                "RX(PI/2)(0)",
                "RZ(1 + PI/2)(0)",
                "RZ(3 - PI/2)(0)",
                "RX(0.5)(0)",
                "RZ(-1.5 + PI/2)(0)",
            ]
        );
        let gates = canonical.gates().unwrap();
        assert!((gates[1].params[0] - (2.0 - PI / 2.0)).abs() < 1e-15);
        assert!((gates[6].params[0] - (-1.5 + PI / 2.0)).abs() < 1e-15);
    }

    #[test]
    fn test_u_gate_decomposition_fidelity() {
        for (theta, phi, lambda) in [(1.0, 2.0, 3.0), (1.56, 1.24, 1.69), (-0.3, 0.0, 5.1)] {
            let mut native = RegisterCircuit::new(1);
            native.h(0).unwrap();
            native.u3(theta, phi, lambda, 0).unwrap();
            native.u2(phi, lambda, 0).unwrap();
            let canonical = RegisterAdapter::to_canonical(&native).unwrap();

            let expected = native.statevector().unwrap();
            let actual = canonical.statevector().unwrap();
            assert!(
                (expected.fidelity(&actual) - 1.0).abs() < 1e-10,
                "u3({theta}, {phi}, {lambda})"
            );
        }
    }

    #[test]
    fn test_unsupported_and_measurement() {
        let mut native = RegisterCircuit::with_clbits(1, 1);
        native.h(0).unwrap();
        native.measure(0, 0).unwrap();
        let canonical = RegisterAdapter::to_canonical(&native).unwrap();
        assert_eq!(canonical.tokens(), ["H(0)"]);

        native.append(RegisterGate::Sdg, [0]).unwrap();
        let err = RegisterAdapter::to_canonical(&native).unwrap_err();
        assert_eq!(err, ConvertError::unsupported("register", "sdg"));
    }

    #[test]
    fn test_round_trip_preserves_distribution() {
        let canonical = CanonicalCircuit::from_tokens([
            "H(0)",
            "H(1)",
            "CX(0, 1)",
            "CX(1, 0)",
            "CZ(2, 0)",
            "SWAP(0, 3)",
            "RY(PI)(1)",
            "RX(0.4*PI)(0)",
            "RZ(-0.3*PI)(2)",
            "CCX(0, 1, 2)",
        ]);
        let native = RegisterAdapter::from_canonical(&canonical).unwrap();
        let back = RegisterAdapter::to_canonical(&native).unwrap();
        let expected = canonical.probabilities().unwrap();
        assert!(same_distribution(&native.probabilities().unwrap(), &expected, 1e-10));
        assert!(same_distribution(&back.probabilities().unwrap(), &expected, 1e-10));
    }
}
