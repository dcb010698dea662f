//! Arithmetic expressions for gate parameters.

use std::f64::consts::PI;
use std::fmt;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// A parameter expression.
///
/// The language is deliberately small: numeric literals, `PI`, unary minus
/// and the four arithmetic operators.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Numeric literal.
    Number(f64),
    /// The constant π.
    Pi,
    /// Negation.
    Neg(Box<Expression>),
    /// Binary operation.
    BinOp {
        left: Box<Expression>,
        op: BinOp,
        right: Box<Expression>,
    },
    /// Parenthesized expression.
    Paren(Box<Expression>),
}

impl Expression {
    /// Evaluate to a finite `f64`.
    ///
    /// Returns `None` on division by zero or when the result is not finite.
    pub fn evaluate(&self) -> Option<f64> {
        let value = match self {
            Expression::Number(v) => *v,
            Expression::Pi => PI,
            Expression::Neg(e) => -e.evaluate()?,
            Expression::Paren(e) => e.evaluate()?,
            Expression::BinOp { left, op, right } => {
                let l = left.evaluate()?;
                let r = right.evaluate()?;
                match op {
                    BinOp::Add => l + r,
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    BinOp::Div => {
                        if r == 0.0 {
                            return None;
                        }
                        l / r
                    }
                }
            }
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(v) => write!(f, "{v}"),
            Expression::Pi => write!(f, "PI"),
            Expression::Neg(e) => write!(f, "-{e}"),
            Expression::Paren(e) => write!(f, "({e})"),
            Expression::BinOp { left, op, right } => write!(f, "{left} {op} {right}"),
        }
    }
}
