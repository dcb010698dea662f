//! Statevector Engine for qlingua
//!
//! A small dense statevector engine used to check that conversions preserve
//! circuit semantics: a circuit and its converted form must produce the same
//! measurement distribution. It covers the canonical vocabulary plus the
//! extra native gates the adapters model (`U`, `ISWAP`, phase gates).
//!
//! Each representation implements [`Simulate`], choosing its own
//! [`BitOrder`] so that probability vectors from different toolkits are
//! directly comparable.
//!
//! # Example
//!
//! ```rust
//! use qlingua_sim::Simulate;
//! use qlingua_token::CanonicalCircuit;
//!
//! let bell = CanonicalCircuit::from_tokens(["H(0)", "CX(0, 1)"]);
//! let probs = bell.probabilities().unwrap();
//! assert!((probs[0b00] - 0.5).abs() < 1e-12);
//! assert!((probs[0b11] - 0.5).abs() < 1e-12);
//! ```

pub mod error;
pub mod simulate;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use simulate::{BitOrder, Simulate, bitstring, canonical_op, run, same_distribution};
pub use statevector::{MAX_QUBITS, Op, Statevector};
