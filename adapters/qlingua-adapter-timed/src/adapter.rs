//! Conversion between timed circuits and canonical circuits.

use qlingua_convert::{Adapter, ConvertError, ConvertResult};
use qlingua_ir::{GateName, GateRecord, QubitId};
use qlingua_token::{CanonicalCircuit, emit_record};
use tracing::debug;

use crate::ADAPTER_NAME;
use crate::native::{THETA, TimedCircuit, TimedGate, TimedGateName};

/// Ratio between canonical and native rotation angles.
///
/// The timed toolkit writes `Rx(θ)` for `exp(-i θ X)`, so a canonical angle
/// is twice the native `theta`.
pub const ANGLE_SCALE: f64 = 2.0;

/// Adapter for the timed toolkit.
///
/// Qubit indices are unchanged. Rotation angles are divided by
/// [`ANGLE_SCALE`] on the way in and multiplied by it on the way out.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedAdapter;

impl Adapter for TimedAdapter {
    type Native = TimedCircuit;
    const NAME: &'static str = ADAPTER_NAME;

    fn to_canonical(native: &TimedCircuit) -> ConvertResult<CanonicalCircuit> {
        let tokens = native
            .gates()
            .map(|((_, qubits), gate)| canonical_token(gate, qubits))
            .collect::<ConvertResult<Vec<_>>>()?;
        debug!(
            times = native.num_times(),
            gates = tokens.len(),
            "timed circuit to canonical"
        );
        Ok(CanonicalCircuit::from_tokens(tokens))
    }

    fn from_canonical(circuit: &CanonicalCircuit) -> ConvertResult<TimedCircuit> {
        let mut native = TimedCircuit::new();
        for record in circuit.gates()? {
            record.check_arity()?;
            native.add_gate(native_gate(&record)?, record.qubits.iter().map(|q| q.0))?;
        }
        debug!(
            gates = circuit.len(),
            times = native.num_times(),
            "canonical to timed circuit"
        );
        Ok(native)
    }
}

fn native_gate(record: &GateRecord) -> ConvertResult<TimedGate> {
    let fixed = |name| -> ConvertResult<TimedGate> { Ok(TimedGate::new(name)) };
    let rotation = |name| -> ConvertResult<TimedGate> {
        Ok(TimedGate::rotation(name, record.angle()? / ANGLE_SCALE))
    };
    match record.name {
        GateName::I => fixed(TimedGateName::I),
        GateName::H => fixed(TimedGateName::H),
        GateName::X => fixed(TimedGateName::X),
        GateName::Y => fixed(TimedGateName::Y),
        GateName::Z => fixed(TimedGateName::Z),
        GateName::S => fixed(TimedGateName::S),
        GateName::T => fixed(TimedGateName::T),
        GateName::CX => fixed(TimedGateName::CX),
        GateName::CZ => fixed(TimedGateName::CZ),
        GateName::Swap => fixed(TimedGateName::SWAP),
        GateName::CCX => fixed(TimedGateName::CCX),
        GateName::RX => rotation(TimedGateName::Rx),
        GateName::RY => rotation(TimedGateName::Ry),
        GateName::RZ => rotation(TimedGateName::Rz),
    }
}

fn canonical_token(gate: &TimedGate, qubits: &[u32]) -> ConvertResult<String> {
    let name = match gate.name {
        TimedGateName::ST => {
            return Err(ConvertError::unsupported(ADAPTER_NAME, gate.name.to_string()));
        }
        TimedGateName::I => GateName::I,
        TimedGateName::H => GateName::H,
        TimedGateName::X => GateName::X,
        TimedGateName::Y => GateName::Y,
        TimedGateName::Z => GateName::Z,
        TimedGateName::S => GateName::S,
        TimedGateName::T => GateName::T,
        TimedGateName::CX => GateName::CX,
        TimedGateName::CZ => GateName::CZ,
        TimedGateName::SWAP => GateName::Swap,
        TimedGateName::CCX => GateName::CCX,
        TimedGateName::Rx => GateName::RX,
        TimedGateName::Ry => GateName::RY,
        TimedGateName::Rz => GateName::RZ,
    };
    let expected: &[&str] = if gate.name.is_rotation() { &[THETA] } else { &[] };
    if let Some(extra) = gate.parameters.keys().find(|k| !expected.contains(&k.as_str())) {
        return Err(ConvertError::invalid_native(
            ADAPTER_NAME,
            format!("{} has unexpected parameter '{extra}'", gate.name),
        ));
    }
    let params = if gate.name.is_rotation() {
        vec![gate.theta()? * ANGLE_SCALE]
    } else {
        Vec::new()
    };
    let record = GateRecord::new(name, params, qubits.iter().copied().map(QubitId));
    record.check_arity()?;
    Ok(emit_record(&record))
}
