//! Canonical circuits: ordered sequences of gate tokens.

use std::fmt;

use qlingua_ir::{GateRecord, implied_qubit_count};
use serde::{Deserialize, Serialize};

use crate::error::TokenResult;
use crate::parser::gate_info;

/// A toolkit-agnostic circuit: gate tokens in application order.
///
/// Circuits are immutable once built. The qubit count is not stored; it is
/// implied by the largest index any token touches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalCircuit {
    tokens: Vec<String>,
}

impl CanonicalCircuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a circuit from tokens without validating them.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a circuit from parsed records.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a GateRecord>) -> Self {
        Self {
            tokens: records.into_iter().map(ToString::to_string).collect(),
        }
    }

    /// Read the line-based text form: one token per line.
    ///
    /// Blank lines and lines starting with `//` are skipped. Every remaining
    /// line must parse.
    pub fn parse_lines(text: &str) -> TokenResult<Self> {
        let tokens: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("//"))
            .map(str::to_string)
            .collect();
        let circuit = Self { tokens };
        circuit.validate()?;
        Ok(circuit)
    }

    /// The tokens, front to back.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Consume the circuit, returning its tokens.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    /// Parse every token. The first failure aborts with its index.
    pub fn gates(&self) -> TokenResult<Vec<GateRecord>> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, token)| gate_info(token).map_err(|e| e.at(i, token.as_str())))
            .collect()
    }

    /// Check that every token parses.
    pub fn validate(&self) -> TokenResult<()> {
        self.gates().map(|_| ())
    }

    /// Implied qubit count: `max(index) + 1`, or 0 for an empty circuit.
    pub fn num_qubits(&self) -> TokenResult<u32> {
        let gates = self.gates()?;
        Ok(implied_qubit_count(gates.iter().flat_map(|g| g.qubits.iter())))
    }
}

impl fmt::Display for CanonicalCircuit {
    /// One token per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{token}")?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for CanonicalCircuit {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

impl<'a> IntoIterator for &'a CanonicalCircuit {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;
    use qlingua_ir::GateName;

    #[test]
    fn test_gates_in_order() {
        let circuit = CanonicalCircuit::from_tokens(["H(0)", "CX(0, 1)", "RX(PI/2)(0)"]);
        let gates = circuit.gates().unwrap();
        assert_eq!(gates.len(), 3);
        assert_eq!(gates[0].name, GateName::H);
        assert_eq!(gates[1].name, GateName::CX);
        assert_eq!(gates[2].name, GateName::RX);
    }

    #[test]
    fn test_num_qubits_is_implied() {
        let circuit = CanonicalCircuit::from_tokens(["H(0)", "SWAP(1, 4)"]);
        assert_eq!(circuit.num_qubits().unwrap(), 5);
        assert_eq!(CanonicalCircuit::new().num_qubits().unwrap(), 0);
    }

    #[test]
    fn test_failure_reports_index() {
        let circuit = CanonicalCircuit::from_tokens(["H(0)", "FOO(1)", "X(0)"]);
        let err = circuit.gates().unwrap_err();
        match &err {
            TokenError::AtIndex { index, gate, .. } => {
                assert_eq!(*index, 1);
                assert_eq!(gate, "FOO(1)");
            }
            other => panic!("Expected AtIndex, got {other:?}"),
        }
        assert!(err.is_unknown_gate());
    }

    #[test]
    fn test_parse_lines() {
        let text = "// bell pair\nH(0)\n\n  CX(0, 1)  \n";
        let circuit = CanonicalCircuit::parse_lines(text).unwrap();
        assert_eq!(circuit.tokens(), ["H(0)", "CX(0, 1)"]);
        assert_eq!(circuit.to_string(), "H(0)\nCX(0, 1)\n");

        let err = CanonicalCircuit::parse_lines("H(0)\nCX(0 1)\n").unwrap_err();
        assert!(err.is_grammar_error());
    }

    #[test]
    fn test_serde_is_a_plain_list() {
        let circuit = CanonicalCircuit::from_tokens(["H(0)", "CX(0, 1)"]);
        let json = serde_json::to_string(&circuit).unwrap();
        assert_eq!(json, r#"["H(0)","CX(0, 1)"]"#);
        let back: CanonicalCircuit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circuit);
    }

    #[test]
    fn test_from_records() {
        let records = vec![
            qlingua_ir::GateRecord::fixed(GateName::H, [0_u32]),
            qlingua_ir::GateRecord::rotation(GateName::RZ, 0.5, 1_u32),
        ];
        let circuit = CanonicalCircuit::from_records(&records);
        assert_eq!(circuit.tokens(), ["H(0)", "RZ(0.5)(1)"]);
        assert_eq!(circuit.gates().unwrap(), records);
    }
}
