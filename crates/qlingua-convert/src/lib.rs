//! qlingua Adapter Contract
//!
//! Every toolkit adapter implements [`Adapter`]: a pair of conversions
//! between the toolkit's own circuit object and a [`CanonicalCircuit`].
//! Any two toolkits are then connected through the canonical form by
//! [`convert`], without either adapter knowing about the other.
//!
//! ```text
//!   moment ──┐                 ┌──> moment
//!   register ├─> canonical ────┼──> register
//!   timed ───┘                 └──> timed
//! ```
//!
//! # Example
//!
//! ```rust
//! use qlingua_convert::{Adapter, Canonical, convert};
//! use qlingua_token::CanonicalCircuit;
//!
//! let circuit = CanonicalCircuit::from_tokens(["H(0)", "CX(0, 1)"]);
//! let same = convert::<Canonical, Canonical>(&circuit).unwrap();
//! assert_eq!(same, circuit);
//! ```

pub mod adapter;
pub mod error;

pub use adapter::{Adapter, Canonical, Conversions, convert};
pub use error::{ConvertError, ConvertResult};
pub use qlingua_token::CanonicalCircuit;
