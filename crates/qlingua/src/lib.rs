//! qlingua: a line-based interchange format for quantum circuits
//!
//! A *canonical circuit* is an ordered list of gate tokens such as
//! `"H(0)"`, `"CX(0, 1)"` or `"RX(PI/2)(3)"`. Each supported toolkit has an
//! adapter that converts its native circuit object to and from this form,
//! and any two toolkits are connected through it.
//!
//! | Crate | Contents |
//! |-------|----------|
//! | [`ir`] | Gate vocabulary and parsed gate records |
//! | [`token`] | Token grammar, parser and emitter |
//! | [`convert`] | The [`Adapter`] contract |
//! | [`moment`] | Moment-structured toolkit adapter |
//! | [`register`] | Register toolkit adapter (reversed qubit order) |
//! | [`timed`] | Time-keyed toolkit adapter (half-angle rotations) |
//! | [`sim`] | Statevector engine used to compare circuits |
//!
//! # Example
//!
//! ```rust
//! use qlingua::{Adapter, CanonicalCircuit, RegisterAdapter, TimedAdapter, ToolkitConversions};
//!
//! let canonical = CanonicalCircuit::from_tokens(["H(0)", "CX(0, 1)", "RZ(PI/4)(1)"]);
//! let register = RegisterAdapter::from_canonical(&canonical).unwrap();
//!
//! // register -> timed, through the canonical form
//! let timed = TimedAdapter::from_register(&register).unwrap();
//! assert_eq!(timed.len(), 3);
//! ```

pub mod conversions;

pub use qlingua_adapter_moment as moment;
pub use qlingua_adapter_register as register;
pub use qlingua_adapter_timed as timed;
pub use qlingua_convert as convert;
pub use qlingua_ir as ir;
pub use qlingua_sim as sim;
pub use qlingua_token as token;

pub use conversions::ToolkitConversions;
pub use qlingua_adapter_moment::{MomentAdapter, MomentCircuit};
pub use qlingua_adapter_register::{RegisterAdapter, RegisterCircuit};
pub use qlingua_adapter_timed::{TimedAdapter, TimedCircuit};
pub use qlingua_convert::{Adapter, Canonical, ConvertError, ConvertResult, Conversions};
pub use qlingua_ir::{GateName, GateRecord, QubitId};
pub use qlingua_token::{CanonicalCircuit, TokenError, gate_info};
