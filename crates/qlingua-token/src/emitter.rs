//! Rendering of gate tokens.

use qlingua_ir::{Angle, GateName, GateRecord, QubitId};

/// Render a parameter as the shortest decimal that parses back to the same `f64`.
///
/// Large magnitudes are written in exponent form; see [`Angle`].
pub fn format_parameter(value: f64) -> String {
    Angle(value).to_string()
}

/// Render a record as a canonical token.
pub fn emit_record(record: &GateRecord) -> String {
    record.to_string()
}

/// Render a token from pre-formatted parameter text.
///
/// Adapters that keep symbolic angles (`PI`, `2*PI`) use this instead of
/// [`emit_record`]. `params` is ignored for parameter-free gates.
pub fn emit_token(name: GateName, params: &[String], qubits: &[QubitId]) -> String {
    let qubits = qubits
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if name.is_parameterized() {
        format!("{name}({})({qubits})", params.join(", "))
    } else {
        format!("{name}({qubits})")
    }
}
