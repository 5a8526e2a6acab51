//! Formula engine API.
//!
//! - [`create_engine`] - Create a Rhai engine with the worksheet built-ins
//! - [`create_engine_with_functions`] - Same, plus user functions from a script
//! - [`eval_with_functions_script`] - Evaluate a formula alongside user functions
//! - [`format_dynamic`], [`spill_lines`] - Format values for display

mod eval;
mod format;

pub use eval::{create_engine, create_engine_with_functions, eval_with_functions_script};
pub use format::{format_dynamic, format_number, spill_lines};

pub use rhai::{AST, Dynamic};
