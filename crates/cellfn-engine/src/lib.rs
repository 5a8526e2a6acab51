//! cellfn_engine - Worksheet string functions + Rhai integration.

pub mod align;
pub(crate) mod builtins;
pub mod engine;
pub mod error;
pub mod text;

pub use align::{AlignLimits, common_substrings, differing_substrings};
pub use builtins::{BUILTINS, Builtin, builtin};
pub use error::{AlignError, Result};
