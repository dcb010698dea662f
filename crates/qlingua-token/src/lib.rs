//! Gate-Token Grammar for qlingua
//!
//! This crate reads and writes the textual interchange format shared by all
//! adapters. A canonical circuit is an ordered list of gate tokens; each
//! token names a gate, optionally lists parameter expressions, and lists the
//! qubits it acts on.
//!
//! # Grammar
//!
//! ```text
//! token      := NAME "(" qubits ")"                  parameter-free gates
//!             | NAME "(" params ")" "(" qubits ")"   RX, RY, RZ
//! params     := expr { "," expr }
//! qubits     := int { "," int }
//! expr       := literal | PI | "-" expr | "+" expr | expr op expr | "(" expr ")"
//! op         := "+" | "-" | "*" | "/"
//! ```
//!
//! Names are case-insensitive. `PI` may also be written `pi`, `Pi` or `π`.
//! Whitespace between lexemes is ignored. An expression may nest at most
//! [`MAX_EXPR_DEPTH`] levels, counting parentheses, unary signs and chained
//! binary operators.
//!
//! # Example
//!
//! ```rust
//! use qlingua_ir::GateName;
//! use qlingua_token::{CanonicalCircuit, gate_info};
//!
//! let record = gate_info("RZ(-PI/4)(2)").unwrap();
//! assert_eq!(record.name, GateName::RZ);
//! assert!((record.params[0] + std::f64::consts::FRAC_PI_4).abs() < 1e-15);
//!
//! let circuit = CanonicalCircuit::from_tokens(["H(0)", "CX(0, 1)"]);
//! assert_eq!(circuit.num_qubits().unwrap(), 2);
//! ```
//!
//! # Errors
//!
//! An unrecognized gate name yields [`TokenError::UnknownGate`]; every other
//! failure is a grammar error (see [`TokenError::is_grammar_error`]).
//! Arity is not checked here; adapters call
//! [`GateRecord::check_arity`](qlingua_ir::GateRecord::check_arity) when they
//! need it.

pub mod ast;
pub mod circuit;
pub mod emitter;
pub mod error;
pub mod lexer;
mod parser;

pub use circuit::CanonicalCircuit;
pub use emitter::{emit_record, emit_token, format_parameter};
pub use error::{TokenError, TokenResult};
pub use parser::{MAX_EXPR_DEPTH, gate_info};
