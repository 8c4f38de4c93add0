//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, file unreadable, etc.).
    #[error("Expression store error: {reason}")]
    StoreError { reason: String },

    /// No stored expression with the given id or name.
    #[error("Expression not found: {id}")]
    ExpressionNotFound { id: String },

    /// Import payload was not a valid expression array.
    #[error("Failed to import expressions: {reason}")]
    ImportFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the target directory exists".into(),
            ],
            Self::StoreError { .. } => vec![
                "The expression store could not be accessed".into(),
                "Try again in a moment".into(),
            ],
            Self::ExpressionNotFound { id } => vec![
                format!("No saved expression matches '{}'", id),
                "Try: filemet expr list".into(),
            ],
            Self::ImportFailed { reason } => vec![
                format!("Import failed: {}", reason),
                "The file must contain a JSON array of expression objects".into(),
                "Each object needs at least a name and an expression".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreError { .. } => ErrorCategory::Internal,
            Self::ExpressionNotFound { .. } => ErrorCategory::NotFound,
            Self::ImportFailed { .. } => ErrorCategory::Validation,
        }
    }
}
