//! Expression parsing for gate parameters.

use super::Parser;
use crate::ast::{BinOp, Expression};
use crate::error::{TokenError, TokenResult};
use crate::lexer::Token;

/// Deepest expression tree a parameter may build.
pub const MAX_EXPR_DEPTH: usize = 256;

impl Parser<'_> {
    /// Parse an expression.
    pub(super) fn parse_expression(&mut self) -> TokenResult<Expression> {
        self.parse_binary_expr(0)
    }

    /// Parse binary expression with precedence climbing.
    ///
    /// Each operator folded into `left` deepens the tree by one, so it is
    /// charged against the nesting budget until this call returns.
    fn parse_binary_expr(&mut self, min_prec: u8) -> TokenResult<Expression> {
        let depth = self.depth;
        let mut left = self.parse_unary_expr()?;

        while let Some(op) = self.peek_binary_op() {
            let prec = op_precedence(op);
            if prec < min_prec {
                break;
            }
            self.advance(); // consume operator
            self.descend()?;

            let right = self.parse_binary_expr(prec + 1)?;
            left = Expression::BinOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        self.depth = depth;
        Ok(left)
    }

    /// Parse unary expression.
    fn parse_unary_expr(&mut self) -> TokenResult<Expression> {
        let depth = self.depth;
        self.descend()?;
        let expr = self.parse_signed_expr()?;
        self.depth = depth;
        Ok(expr)
    }

    fn parse_signed_expr(&mut self) -> TokenResult<Expression> {
        if self.consume(&Token::Minus) {
            let expr = self.parse_unary_expr()?;
            return Ok(Expression::Neg(Box::new(expr)));
        }
        if self.consume(&Token::Plus) {
            return self.parse_unary_expr();
        }
        self.parse_primary_expr()
    }

    /// Parse primary expression.
    #[allow(clippy::cast_precision_loss)]
    fn parse_primary_expr(&mut self) -> TokenResult<Expression> {
        let token = self
            .peek()
            .cloned()
            .ok_or_else(|| self.eof("expression"))?;

        match token {
            Token::IntLiteral(v) => {
                self.advance();
                Ok(Expression::Number(v as f64))
            }
            Token::FloatLiteral(v) => {
                self.advance();
                Ok(Expression::Number(v))
            }
            Token::Pi => {
                self.advance();
                Ok(Expression::Pi)
            }
            Token::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(Token::RParen)?;
                Ok(Expression::Paren(Box::new(expr)))
            }
            _ => Err(self.unexpected("expression", &token)),
        }
    }

    /// Enter one more level of nesting.
    fn descend(&mut self) -> TokenResult<()> {
        self.depth += 1;
        if self.depth > MAX_EXPR_DEPTH {
            return Err(TokenError::InvalidExpression {
                token: self.source.to_string(),
                expression: self.remaining(),
                message: format!("nested deeper than {MAX_EXPR_DEPTH} levels"),
            });
        }
        Ok(())
    }

    /// Unparsed text from the current position, shortened for messages.
    fn remaining(&self) -> String {
        let start = self
            .tokens
            .get(self.pos)
            .map_or(self.source.len(), |t| self.offset + t.span.start);
        self.source[start..].chars().take(32).collect()
    }

    /// Peek at binary operator.
    fn peek_binary_op(&self) -> Option<BinOp> {
        match self.peek()? {
            Token::Plus => Some(BinOp::Add),
            Token::Minus => Some(BinOp::Sub),
            Token::Star => Some(BinOp::Mul),
            Token::Slash => Some(BinOp::Div),
            _ => None,
        }
    }
}

/// Get operator precedence.
fn op_precedence(op: BinOp) -> u8 {
    match op {
        BinOp::Add | BinOp::Sub => 1,
        BinOp::Mul | BinOp::Div => 2,
    }
}
