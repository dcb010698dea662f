//! qlingua Canonical Gate Model
//!
//! This crate holds the toolkit-agnostic model every adapter reconciles
//! against: the closed gate vocabulary, parsed gate records and canonical
//! qubit indices.
//!
//! # Overview
//!
//! A canonical circuit is an ordered list of gate tokens such as `H(0)`,
//! `CX(0, 1)` or `RX(PI/2)(1)`. Parsing a token yields a [`GateRecord`]; the
//! token grammar itself lives in `qlingua-token`.
//!
//! # Example
//!
//! ```rust
//! use qlingua_ir::{GateName, GateRecord};
//!
//! let cx = GateRecord::fixed(GateName::CX, [0_u32, 1]);
//! assert!(cx.check_arity().is_ok());
//! assert_eq!(cx.to_string(), "CX(0, 1)");
//!
//! assert_eq!("swap".parse::<GateName>().unwrap(), GateName::Swap);
//! assert!("cnot".parse::<GateName>().is_err());
//! ```
//!
//! # Vocabulary
//!
//! | Gate | Qubits | Parameters |
//! |------|--------|------------|
//! | `I`, `H`, `X`, `Y`, `Z`, `S`, `T` | 1 | 0 |
//! | `CX`, `CZ`, `SWAP` | 2 | 0 |
//! | `CCX` | 3 | 0 |
//! | `RX`, `RY`, `RZ` | 1 | 1 (radians) |

pub mod error;
pub mod gate;
pub mod qubit;
pub mod record;

pub use error::{IrError, IrResult};
pub use gate::{GateName, PARAMETER_FREE_GATES, PARAMETER_GATES, UnknownGateName};
pub use qubit::{QubitId, implied_qubit_count};
pub use record::{Angle, EXPONENT_THRESHOLD, GateRecord};
