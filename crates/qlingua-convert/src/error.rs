//! Error types for circuit conversion.

use qlingua_ir::IrError;
use qlingua_token::TokenError;
use thiserror::Error;

/// Errors that can occur while converting between representations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// A canonical token failed to parse.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// A gate record is ill-formed for its gate.
    #[error(transparent)]
    Ir(#[from] IrError),

    /// The native circuit holds a gate with no canonical counterpart.
    #[error("{adapter}: unsupported gate '{gate}'")]
    UnsupportedGate { adapter: &'static str, gate: String },

    /// The native circuit is structurally invalid.
    #[error("{adapter}: invalid native circuit: {message}")]
    InvalidNative {
        adapter: &'static str,
        message: String,
    },
}

impl ConvertError {
    /// Create an unsupported-gate error.
    pub fn unsupported(adapter: &'static str, gate: impl Into<String>) -> Self {
        ConvertError::UnsupportedGate {
            adapter,
            gate: gate.into(),
        }
    }

    /// Create an invalid-native error.
    pub fn invalid_native(adapter: &'static str, message: impl Into<String>) -> Self {
        ConvertError::InvalidNative {
            adapter,
            message: message.into(),
        }
    }

    /// Whether the failure is an unrecognized canonical gate name.
    pub fn is_unknown_gate(&self) -> bool {
        matches!(self, ConvertError::Token(e) if e.is_unknown_gate())
    }
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
