//! qlingua Adapter for Register-Based Circuits
//!
//! Converts between [`CanonicalCircuit`](qlingua_token::CanonicalCircuit)s
//! and [`RegisterCircuit`]s, the circuit object of toolkits that declare a
//! fixed register and number qubit 0 as the least significant bit.
//!
//! # Qubit Order
//!
//! Canonical qubit `i` becomes register qubit `n-1-i`. On the way in, `n`
//! is the implied qubit count of the canonical circuit; on the way out it
//! is the register's declared size. The canonical circuit `["H(0)",
//! "CX(0, 1)"]` therefore becomes `h q[1]; cx q[1], q[0]`.
//!
//! # Gate Mapping
//!
//! | Native | Canonical |
//! |--------|-----------|
//! | `id` | `I` |
//! | `h x y z s t cx cz swap ccx rx ry rz` | upper-cased |
//! | `u1(λ)` | `RZ(λ)` (equal up to global phase) |
//! | `u2(φ, λ)` | `RZ(λ - π/2)`, `RX(π/2)`, `RZ(φ + π/2)` |
//! | `u3(θ, φ, λ)` | `RZ(λ - π/2)`, `RX(θ)`, `RZ(φ + π/2)` |
//! | `sdg`, `tdg` | unsupported, conversion fails |
//! | `measure` | dropped |
//!
//! # Example
//!
//! ```rust
//! use qlingua_adapter_register::RegisterAdapter;
//! use qlingua_convert::Adapter;
//! use qlingua_token::CanonicalCircuit;
//!
//! let canonical = CanonicalCircuit::from_tokens(["H(0)", "CX(0, 1)"]);
//! let native = RegisterAdapter::from_canonical(&canonical).unwrap();
//! assert_eq!(native.instructions()[1].qubits, vec![1, 0]);
//! ```

pub mod adapter;
pub mod native;

pub use adapter::RegisterAdapter;
pub use native::{RegisterCircuit, RegisterGate, RegisterInstruction};

/// Name used in errors and logs.
pub const ADAPTER_NAME: &str = "register";
