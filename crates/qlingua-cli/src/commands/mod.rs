//! CLI command implementations.

pub mod common;
pub mod convert;
pub mod formats;
pub mod parse;
pub mod simulate;
pub mod version;
