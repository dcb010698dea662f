//! Parsed gate records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::GateName;
use crate::qubit::QubitId;

/// Magnitude from which angles are written in exponent form.
pub const EXPONENT_THRESHOLD: f64 = 1e15;

/// Display adapter for a parameter value in token text.
///
/// Writes the shortest decimal that parses back to the same `f64`. Values of
/// magnitude [`EXPONENT_THRESHOLD`] and above use exponent form (`1e20`) so
/// the text never becomes a digit run wider than an integer literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle(pub f64);

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.abs() >= EXPONENT_THRESHOLD {
            write!(f, "{:e}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One gate application: the parsed form of a gate token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateRecord {
    /// The gate.
    pub name: GateName,
    /// Real parameters, in radians (empty for parameter-free gates).
    pub params: Vec<f64>,
    /// Qubits in positional order (e.g. controls before target).
    pub qubits: Vec<QubitId>,
}

impl GateRecord {
    /// Create a new record.
    pub fn new(
        name: GateName,
        params: impl Into<Vec<f64>>,
        qubits: impl IntoIterator<Item = impl Into<QubitId>>,
    ) -> Self {
        Self {
            name,
            params: params.into(),
            qubits: qubits.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a parameter-free record.
    pub fn fixed(name: GateName, qubits: impl IntoIterator<Item = impl Into<QubitId>>) -> Self {
        Self::new(name, Vec::new(), qubits)
    }

    /// Create a single-angle rotation record.
    pub fn rotation(name: GateName, angle: f64, qubit: impl Into<QubitId>) -> Self {
        Self::new(name, vec![angle], [qubit.into()])
    }

    /// Check qubit count, parameter count and qubit distinctness.
    ///
    /// The parser accepts any well-formed token; this is where a record is
    /// checked against what its gate actually needs.
    pub fn check_arity(&self) -> IrResult<()> {
        if self.qubits.len() != self.name.num_qubits() {
            return Err(IrError::QubitCountMismatch {
                gate_name: self.name.to_string(),
                expected: self.name.num_qubits(),
                got: self.qubits.len(),
            });
        }
        if self.params.len() != self.name.num_params() {
            return Err(IrError::ParameterCountMismatch {
                gate_name: self.name.to_string(),
                expected: self.name.num_params(),
                got: self.params.len(),
            });
        }
        for (i, q) in self.qubits.iter().enumerate() {
            if self.qubits[..i].contains(q) {
                return Err(IrError::DuplicateQubit {
                    qubit: *q,
                    gate_name: Some(self.name.to_string()),
                });
            }
        }
        Ok(())
    }

    /// The single angle of a rotation record.
    pub fn angle(&self) -> IrResult<f64> {
        match self.params.as_slice() {
            [theta] => Ok(*theta),
            other => Err(IrError::ParameterCountMismatch {
                gate_name: self.name.to_string(),
                expected: 1,
                got: other.len(),
            }),
        }
    }
}

impl fmt::Display for GateRecord {
    /// Renders the canonical token, e.g. `CX(0, 1)` or `RX(1.5)(3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.name.is_parameterized() {
            f.write_str("(")?;
            for (i, p) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", Angle(*p))?;
            }
            f.write_str(")")?;
        }
        f.write_str("(")?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{q}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_display() {
        let cx = GateRecord::fixed(GateName::CX, [0_u32, 1]);
        assert_eq!(cx.to_string(), "CX(0, 1)");

        let rx = GateRecord::rotation(GateName::RX, 0.5, 3_u32);
        assert_eq!(rx.to_string(), "RX(0.5)(3)");

        let rz = GateRecord::rotation(GateName::RZ, -2.0, 0_u32);
        assert_eq!(rz.to_string(), "RZ(-2)(0)");
    }

    #[test]
    fn test_display_keeps_full_precision() {
        let ry = GateRecord::rotation(GateName::RY, PI / 3.0, 1_u32);
        let text = ry.to_string();
        let inner = &text[3..text.find(')').unwrap()];
        assert_eq!(inner.parse::<f64>().unwrap(), PI / 3.0);
    }

    #[test]
    fn test_large_angles_use_exponent_form() {
        assert_eq!(Angle(1e20).to_string(), "1e20");
        assert_eq!(Angle(-2.5e300).to_string(), "-2.5e300");
        assert_eq!(Angle(123_456.0).to_string(), "123456");
        assert_eq!(Angle(1e15).to_string(), "1e15");
        assert_eq!(Angle(999_999_999_999_999.0).to_string(), "999999999999999");

        let rx = GateRecord::rotation(GateName::RX, 1e20, 0_u32);
        assert_eq!(rx.to_string(), "RX(1e20)(0)");
        assert_eq!(Angle(f64::MAX).to_string().parse::<f64>().unwrap(), f64::MAX);
    }

    #[test]
    fn test_check_arity() {
        assert!(GateRecord::fixed(GateName::CCX, [0_u32, 1, 2]).check_arity().is_ok());

        let err = GateRecord::fixed(GateName::CX, [0_u32]).check_arity().unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitCountMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));

        let err = GateRecord::new(GateName::RX, vec![1.0, 2.0], [0_u32])
            .check_arity()
            .unwrap_err();
        assert!(matches!(err, IrError::ParameterCountMismatch { got: 2, .. }));

        let err = GateRecord::fixed(GateName::Swap, [1_u32, 1])
            .check_arity()
            .unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { qubit: QubitId(1), .. }));
    }

    #[test]
    fn test_angle() {
        let rz = GateRecord::rotation(GateName::RZ, 0.25, 0_u32);
        assert_eq!(rz.angle().unwrap(), 0.25);
        assert!(GateRecord::fixed(GateName::H, [0_u32]).angle().is_err());
    }
}
