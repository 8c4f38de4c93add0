//! Infrastructure adapters for Filemet.
//!
//! This crate implements the ports defined in `filemet_core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the
//! built-in framework template catalog.

pub mod catalog;
pub mod expression_store;
pub mod filesystem;

// Re-export commonly used adapters
pub use expression_store::{InMemoryExpressionStore, JsonFileExpressionStore};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
