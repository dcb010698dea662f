//! Parser for gate tokens.

mod expression;

pub use expression::MAX_EXPR_DEPTH;

use qlingua_ir::{GateName, GateRecord, QubitId};
use tracing::trace;

use crate::error::{TokenError, TokenResult};
use crate::lexer::{SpannedToken, Token, tokenize};

/// Parse one gate token into its name, parameters and qubits.
///
/// Parameter-free gates use a single group, `NAME(q0, q1, ...)`; parameterized
/// gates put their parameters first, `NAME(expr, ...)(q0, ...)`. Names are
/// case-insensitive.
///
/// ```rust
/// use qlingua_ir::{GateName, QubitId};
/// use qlingua_token::gate_info;
///
/// let cx = gate_info("CX(0, 1)").unwrap();
/// assert_eq!(cx.name, GateName::CX);
/// assert!(cx.params.is_empty());
/// assert_eq!(cx.qubits, vec![QubitId(0), QubitId(1)]);
///
/// let rx = gate_info("RX(PI/2)(3)").unwrap();
/// assert!((rx.params[0] - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
/// assert_eq!(rx.qubits, vec![QubitId(3)]);
/// ```
pub fn gate_info(token: &str) -> TokenResult<GateRecord> {
    let open = token
        .find('(')
        .ok_or_else(|| TokenError::MissingParenthesis {
            token: token.to_string(),
        })?;

    let name: GateName = token[..open]
        .parse()
        .map_err(|e: qlingua_ir::UnknownGateName| TokenError::UnknownGate(e.0))?;

    let mut parser = Parser::new(token, open)?;
    let params = if name.is_parameterized() {
        parser.parse_parameter_group()?
    } else {
        Vec::new()
    };
    let qubits = parser.parse_qubit_group()?;
    parser.expect_end()?;

    trace!(gate = %name, ?params, ?qubits, "parsed gate token");
    Ok(GateRecord {
        name,
        params,
        qubits,
    })
}

/// Parser state over the argument groups of one token.
pub(super) struct Parser<'a> {
    /// The complete token, kept for error messages.
    pub(super) source: &'a str,
    /// Byte offset of the first lexed character within `source`.
    pub(super) offset: usize,
    pub(super) tokens: Vec<SpannedToken>,
    pub(super) pos: usize,
    /// Current expression nesting, bounded by [`MAX_EXPR_DEPTH`].
    pub(super) depth: usize,
}

impl<'a> Parser<'a> {
    /// Lex `source[offset..]`, the part of the token after the gate name.
    fn new(source: &'a str, offset: usize) -> TokenResult<Self> {
        let mut tokens = Vec::new();

        for result in tokenize(&source[offset..]) {
            match result {
                Ok(t) => tokens.push(t),
                Err((span, msg)) => {
                    return Err(TokenError::LexerError {
                        token: source.to_string(),
                        position: offset + span.start,
                        message: msg,
                    });
                }
            }
        }

        Ok(Self {
            source,
            offset,
            tokens,
            pos: 0,
            depth: 0,
        })
    }

    /// Check if we've reached the end.
    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Peek at the current token.
    pub(super) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    /// Advance and return the current token.
    pub(super) fn advance(&mut self) -> Option<Token> {
        if self.is_eof() {
            return None;
        }
        let token = self.tokens[self.pos].token.clone();
        self.pos += 1;
        Some(token)
    }

    /// Expect a specific token.
    #[allow(clippy::needless_pass_by_value)]
    pub(super) fn expect(&mut self, expected: Token) -> TokenResult<()> {
        let found = self.advance().ok_or_else(|| self.eof(&expected.to_string()))?;

        if std::mem::discriminant(&found) != std::mem::discriminant(&expected) {
            return Err(self.unexpected(&format!("'{expected}'"), &found));
        }
        Ok(())
    }

    /// Check if current token matches.
    pub(super) fn check(&self, token: &Token) -> bool {
        self.peek()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(token))
    }

    /// Consume token if it matches.
    pub(super) fn consume(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn eof(&self, expected: &str) -> TokenError {
        TokenError::UnexpectedEof {
            token: self.source.to_string(),
            expected: expected.to_string(),
        }
    }

    pub(super) fn unexpected(&self, expected: &str, found: &Token) -> TokenError {
        TokenError::UnexpectedToken {
            token: self.source.to_string(),
            expected: expected.to_string(),
            found: format!("'{found}'"),
        }
    }

    /// Parse `( expr {, expr} )` and evaluate every expression.
    fn parse_parameter_group(&mut self) -> TokenResult<Vec<f64>> {
        self.expect(Token::LParen)?;
        let mut params = Vec::new();
        loop {
            let expr = self.parse_expression()?;
            let value = expr
                .evaluate()
                .ok_or_else(|| TokenError::InvalidExpression {
                    token: self.source.to_string(),
                    expression: expr.to_string(),
                    message: "division by zero or non-finite value".into(),
                })?;
            params.push(value);
            if !self.consume(&Token::Comma) {
                break;
            }
        }
        self.expect(Token::RParen)?;
        Ok(params)
    }

    /// Parse `( int {, int} )`.
    fn parse_qubit_group(&mut self) -> TokenResult<Vec<QubitId>> {
        self.expect(Token::LParen)?;
        let mut qubits = vec![self.parse_qubit()?];
        while self.consume(&Token::Comma) {
            qubits.push(self.parse_qubit()?);
        }
        self.expect(Token::RParen)?;
        Ok(qubits)
    }

    fn parse_qubit(&mut self) -> TokenResult<QubitId> {
        let token = self.advance().ok_or_else(|| self.eof("qubit index"))?;
        match token {
            Token::IntLiteral(v) => u32::try_from(v).map(QubitId).map_err(|_| {
                TokenError::InvalidQubit {
                    token: self.source.to_string(),
                    found: v.to_string(),
                }
            }),
            Token::RParen | Token::Comma => Err(self.unexpected("qubit index", &token)),
            other => Err(TokenError::InvalidQubit {
                token: self.source.to_string(),
                found: other.to_string(),
            }),
        }
    }

    fn expect_end(&mut self) -> TokenResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(t) => Err(self.unexpected("end of token", t)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn qubits(ids: &[u32]) -> Vec<QubitId> {
        ids.iter().copied().map(QubitId).collect()
    }

    #[test]
    fn test_parameter_free_gates() {
        let h = gate_info("H(0)").unwrap();
        assert_eq!(h.name, GateName::H);
        assert!(h.params.is_empty());
        assert_eq!(h.qubits, qubits(&[0]));

        let cx = gate_info("CX(0, 1)").unwrap();
        assert_eq!(cx.name, GateName::CX);
        assert_eq!(cx.qubits, qubits(&[0, 1]));

        let ccx = gate_info("CCX(0, 2, 1)").unwrap();
        assert_eq!(ccx.qubits, qubits(&[0, 2, 1]));
    }

    #[test]
    fn test_parameterized_gates() {
        let rx = gate_info("RX(1.2)(3)").unwrap();
        assert_eq!(rx.name, GateName::RX);
        assert_eq!(rx.params, vec![1.2]);
        assert_eq!(rx.qubits, qubits(&[3]));

        let ry = gate_info("RY(PI/2)(2)").unwrap();
        assert_eq!(ry.params, vec![PI / 2.0]);

        let rz = gate_info("RZ(-0.3*PI)(2)").unwrap();
        assert!((rz.params[0] + 0.3 * PI).abs() < 1e-15);
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let rx = gate_info("Rx(0.5)(1)").unwrap();
        assert_eq!(rx.name, GateName::RX);
        let swap = gate_info("  swap (1, 2)").unwrap();
        assert_eq!(swap.name, GateName::Swap);
    }

    #[test]
    fn test_whole_vocabulary_parses() {
        for name in GateName::all() {
            let token = if name.is_parameterized() {
                format!("{name}(0.25)(0)")
            } else {
                format!("{name}(0)")
            };
            assert_eq!(gate_info(&token).unwrap().name, name, "{token}");
        }
    }

    #[test]
    fn test_unknown_gate() {
        let err = gate_info("a(1, 2)").unwrap_err();
        assert_eq!(err, TokenError::UnknownGate("A".into()));
        assert!(gate_info("CNOT(0, 1)").unwrap_err().is_unknown_gate());
        assert!(gate_info("(0)").unwrap_err().is_unknown_gate());
    }

    #[test]
    fn test_missing_parenthesis() {
        assert!(matches!(
            gate_info("H 0"),
            Err(TokenError::MissingParenthesis { .. })
        ));
    }

    #[test]
    fn test_parameterized_gate_needs_two_groups() {
        assert!(matches!(
            gate_info("RX(0.5)"),
            Err(TokenError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_wide_integer_parameter() {
        let record = gate_info("RX(18446744073709551616)(0)").unwrap();
        assert_eq!(record.params, vec![18_446_744_073_709_551_616.0]);
        assert!(matches!(
            gate_info("H(18446744073709551616)"),
            Err(TokenError::InvalidQubit { .. })
        ));
    }

    #[test]
    fn test_invalid_qubits() {
        assert!(matches!(
            gate_info("H(-1)"),
            Err(TokenError::InvalidQubit { .. })
        ));
        assert!(matches!(
            gate_info("H(1.5)"),
            Err(TokenError::InvalidQubit { .. })
        ));
        assert!(matches!(
            gate_info("H(4294967296)"),
            Err(TokenError::InvalidQubit { .. })
        ));
        assert!(matches!(
            gate_info("H()"),
            Err(TokenError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            gate_info("CX(0,)"),
            Err(TokenError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_trailing_input_rejected() {
        assert!(matches!(
            gate_info("H(0)(1)"),
            Err(TokenError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_invalid_expressions() {
        assert!(matches!(
            gate_info("RX(1/0)(0)"),
            Err(TokenError::InvalidExpression { .. })
        ));
        assert!(matches!(
            gate_info("RX(theta)(0)"),
            Err(TokenError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            gate_info("RX(0.5 $ 1)(0)"),
            Err(TokenError::LexerError { .. })
        ));
    }
}
