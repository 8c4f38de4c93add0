// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Filemet.
//!
//! This module contains pure business logic: the expression parser, the
//! resolved file structure, and the custom expression records. All I/O is
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Pure parser**: `parser::parse` is stateless and reentrant
//! - **Immutable entities**: Domain objects are Clone + PartialEq

pub mod error;
pub mod expression;
pub mod parser;
pub mod structure;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use expression::{CustomExpression, ExpressionUpdate, NewExpression, DEFAULT_CATEGORY};
pub use structure::{FileStructure, FsEntry};
