//! qlingua Adapter for Time-Keyed Circuits
//!
//! Converts between [`CanonicalCircuit`](qlingua_token::CanonicalCircuit)s
//! and [`TimedCircuit`]s, the circuit object of toolkits that key every gate
//! by its time step and qubits.
//!
//! Gate names match the canonical vocabulary (`RX` is spelled `Rx`) and
//! qubit indices are unchanged. Rotations follow the half-angle convention:
//! a canonical `RX(θ)` becomes native `Rx` with `theta = θ / 2`, and the
//! factor is restored on the way back (see [`ANGLE_SCALE`]). The native `ST`
//! (S-dagger) gate has no canonical counterpart and fails conversion.
//!
//! # Example
//!
//! ```rust
//! use qlingua_adapter_timed::TimedAdapter;
//! use qlingua_convert::Adapter;
//! use qlingua_token::CanonicalCircuit;
//!
//! let canonical = CanonicalCircuit::from_tokens(["RX(PI)(0)"]);
//! let native = TimedAdapter::from_canonical(&canonical).unwrap();
//! let (_, gate) = native.gates().next().unwrap();
//! assert_eq!(gate.theta().unwrap(), std::f64::consts::FRAC_PI_2);
//! ```

pub mod adapter;
pub mod native;

pub use adapter::{ANGLE_SCALE, TimedAdapter};
pub use native::{THETA, TimedCircuit, TimedEntry, TimedGate, TimedGateName, TimedKey};

/// Name used in errors and logs.
pub const ADAPTER_NAME: &str = "timed";
