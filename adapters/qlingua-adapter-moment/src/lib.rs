//! qlingua Adapter for Moment-Structured Circuits
//!
//! Converts between [`CanonicalCircuit`](qlingua_token::CanonicalCircuit)s
//! and [`MomentCircuit`]s, the circuit object of toolkits that group
//! operations into moments of parallel gates on line qubits.
//!
//! # Gate Mapping
//!
//! | Canonical | Native | Notes |
//! |-----------|--------|-------|
//! | `I H X Y Z S T CZ SWAP` | same | |
//! | `CX` | `CNOT` | |
//! | `CCX` | `TOFFOLI` | |
//! | `RX RY RZ` | `Rx Ry Rz` | stored as half-turn exponent `θ/π` |
//! | (none) | `ISWAP` | unsupported, conversion fails |
//! | (none) | `measure` | dropped |
//!
//! Qubit indices are unchanged in both directions.
//!
//! # Example
//!
//! ```rust
//! use qlingua_adapter_moment::{MomentAdapter, MomentGate};
//! use qlingua_convert::Adapter;
//! use qlingua_token::CanonicalCircuit;
//!
//! let canonical = CanonicalCircuit::from_tokens(["H(0)", "CX(0, 1)", "RX(PI)(1)"]);
//! let native = MomentAdapter::from_canonical(&canonical).unwrap();
//! assert_eq!(native.depth(), 3);
//!
//! let back = MomentAdapter::to_canonical(&native).unwrap();
//! assert_eq!(back.tokens(), ["H(0)", "CX(0, 1)", "RX(PI)(1)"]);
//! ```

pub mod adapter;
pub mod native;

pub use adapter::MomentAdapter;
pub use native::{LineQubit, Moment, MomentCircuit, MomentGate, MomentOperation};

/// Name used in errors and logs.
pub const ADAPTER_NAME: &str = "moment";
