//! Command handlers.
//!
//! Each submodule owns one subcommand: argument interpretation, service
//! wiring, and result presentation.  Business logic stays in the library
//! crates.

pub mod completions;
pub mod create;
pub mod expr;
pub mod parse;
pub mod templates;
