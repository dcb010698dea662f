//! Conversion between moment circuits and canonical circuits.

use std::f64::consts::PI;

use qlingua_convert::{Adapter, ConvertError, ConvertResult};
use qlingua_ir::{GateName, GateRecord, QubitId};
use qlingua_token::{CanonicalCircuit, emit_token, format_parameter};
use tracing::debug;

use crate::ADAPTER_NAME;
use crate::native::{LineQubit, MomentCircuit, MomentGate, MomentOperation};

/// Adapter for the moment toolkit.
///
/// Qubit indices map one-to-one onto [`LineQubit`]s. Angles cross the
/// boundary in radians; the native model stores them as half-turn exponents.
#[derive(Debug, Clone, Copy, Default)]
pub struct MomentAdapter;

impl Adapter for MomentAdapter {
    type Native = MomentCircuit;
    const NAME: &'static str = ADAPTER_NAME;

    fn to_canonical(native: &MomentCircuit) -> ConvertResult<CanonicalCircuit> {
        let mut tokens = Vec::new();
        for op in native.all_operations() {
            if let Some(token) = operation_token(op)? {
                tokens.push(token);
            }
        }
        debug!(
            moments = native.depth(),
            gates = tokens.len(),
            "moment circuit to canonical"
        );
        Ok(CanonicalCircuit::from_tokens(tokens))
    }

    fn from_canonical(circuit: &CanonicalCircuit) -> ConvertResult<MomentCircuit> {
        let mut native = MomentCircuit::new();
        for record in circuit.gates()? {
            record.check_arity()?;
            let gate = native_gate(&record)?;
            native.append(gate.on(record.qubits.iter().map(|q| LineQubit(q.0))))?;
        }
        debug!(
            gates = circuit.len(),
            moments = native.depth(),
            "canonical to moment circuit"
        );
        Ok(native)
    }
}

/// The native constructor for a canonical gate.
fn native_gate(record: &GateRecord) -> ConvertResult<MomentGate> {
    Ok(match record.name {
        GateName::I => MomentGate::I,
        GateName::H => MomentGate::H,
        GateName::X => MomentGate::X,
        GateName::Y => MomentGate::Y,
        GateName::Z => MomentGate::Z,
        GateName::S => MomentGate::S,
        GateName::T => MomentGate::T,
        GateName::CX => MomentGate::Cnot,
        GateName::CZ => MomentGate::Cz,
        GateName::Swap => MomentGate::Swap,
        GateName::CCX => MomentGate::Toffoli,
        GateName::RX => MomentGate::rx(record.angle()?),
        GateName::RY => MomentGate::ry(record.angle()?),
        GateName::RZ => MomentGate::rz(record.angle()?),
    })
}

/// The canonical token for an operation; `None` for measurements.
fn operation_token(op: &MomentOperation) -> ConvertResult<Option<String>> {
    op.validate()?;
    let (name, exponent) = match &op.gate {
        MomentGate::Measure { .. } => return Ok(None),
        MomentGate::ISwap => {
            return Err(ConvertError::unsupported(ADAPTER_NAME, op.gate.name()));
        }
        MomentGate::I => (GateName::I, None),
        MomentGate::H => (GateName::H, None),
        MomentGate::X => (GateName::X, None),
        MomentGate::Y => (GateName::Y, None),
        MomentGate::Z => (GateName::Z, None),
        MomentGate::S => (GateName::S, None),
        MomentGate::T => (GateName::T, None),
        MomentGate::Cnot => (GateName::CX, None),
        MomentGate::Cz => (GateName::CZ, None),
        MomentGate::Swap => (GateName::Swap, None),
        MomentGate::Toffoli => (GateName::CCX, None),
        MomentGate::Rx { exponent } => (GateName::RX, Some(*exponent)),
        MomentGate::Ry { exponent } => (GateName::RY, Some(*exponent)),
        MomentGate::Rz { exponent } => (GateName::RZ, Some(*exponent)),
    };
    let params: Vec<String> = exponent.map(render_angle).into_iter().collect();
    let qubits: Vec<QubitId> = op.qubits.iter().map(|q| QubitId(q.0)).collect();
    Ok(Some(emit_token(name, &params, &qubits)))
}

/// Render a half-turn exponent as a radian expression.
///
/// Whole half-turns of 1 and 2 keep their symbolic form; anything else is
/// written as a decimal number of radians.
#[allow(clippy::float_cmp)]
fn render_angle(exponent: f64) -> String {
    if exponent == 1.0 {
        "PI".to_string()
    } else if exponent == 2.0 {
        "2*PI".to_string()
    } else {
        format_parameter(exponent * PI)
    }
}
