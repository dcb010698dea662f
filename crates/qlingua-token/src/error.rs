//! Error types for the gate-token parser.

use thiserror::Error;

/// Errors that can occur while parsing gate tokens.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TokenError {
    /// Lexer error (invalid character).
    #[error("Lexer error in '{token}' at position {position}: {message}")]
    LexerError {
        token: String,
        position: usize,
        message: String,
    },

    /// The token has no argument group at all.
    #[error("Malformed gate token '{token}': missing '('")]
    MissingParenthesis { token: String },

    /// Unexpected token.
    #[error("Malformed gate token '{token}': expected {expected}, found {found}")]
    UnexpectedToken {
        token: String,
        expected: String,
        found: String,
    },

    /// Unexpected end of input.
    #[error("Malformed gate token '{token}': unexpected end of input, expected {expected}")]
    UnexpectedEof { token: String, expected: String },

    /// A parameter expression could not be evaluated.
    #[error("Invalid parameter expression '{expression}' in '{token}': {message}")]
    InvalidExpression {
        token: String,
        expression: String,
        message: String,
    },

    /// A qubit entry is not a non-negative 32-bit integer.
    #[error("Invalid qubit '{found}' in '{token}': expected a non-negative integer")]
    InvalidQubit { token: String, found: String },

    /// Gate name outside the recognized vocabulary.
    #[error("{0} is not recognized")]
    UnknownGate(String),

    /// An error in one token of a circuit.
    #[error("Gate {index} ('{gate}'): {source}")]
    AtIndex {
        index: usize,
        gate: String,
        #[source]
        source: Box<TokenError>,
    },
}

impl TokenError {
    /// Attach the position of the failing token within a circuit.
    pub fn at(self, index: usize, gate: impl Into<String>) -> Self {
        TokenError::AtIndex {
            index,
            gate: gate.into(),
            source: Box::new(self),
        }
    }

    /// The underlying error, skipping circuit position wrappers.
    pub fn root(&self) -> &TokenError {
        match self {
            TokenError::AtIndex { source, .. } => source.root(),
            other => other,
        }
    }

    /// Whether this is an unknown-gate failure.
    pub fn is_unknown_gate(&self) -> bool {
        matches!(self.root(), TokenError::UnknownGate(_))
    }

    /// Whether this is a malformed-token failure.
    pub fn is_grammar_error(&self) -> bool {
        !self.is_unknown_gate()
    }
}

/// Result type for parsing operations.
pub type TokenResult<T> = Result<T, TokenError>;
