//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `filemet-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::CustomExpression;
use crate::error::FilemetResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `filemet_adapters::filesystem::LocalFilesystem` (production)
/// - `filemet_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Entry paths handed in by the services are relative to a target root
/// - Files are created empty; content is not this tool's concern
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FilemetResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> FilemetResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for custom expression persistence.
///
/// Implemented by:
/// - `filemet_adapters::expression_store::InMemoryExpressionStore` (testing)
/// - `filemet_adapters::expression_store::JsonFileExpressionStore` (production)
pub trait ExpressionStore: Send + Sync {
    /// Add a record. Replaces an existing record with the same id.
    fn insert(&self, record: CustomExpression) -> FilemetResult<()>;

    /// Get a record by id.
    fn get(&self, id: &str) -> FilemetResult<CustomExpression>;

    /// Remove a record by id.
    fn remove(&self, id: &str) -> FilemetResult<()>;

    /// List all records in insertion order.
    fn list(&self) -> FilemetResult<Vec<CustomExpression>>;

    /// Replace the whole collection (import in replace mode).
    fn replace_all(&self, records: Vec<CustomExpression>) -> FilemetResult<()>;
}
