//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a file structure" or "save an
//! expression for later".

pub mod expression_service;
pub mod structure_service;

pub use expression_service::{ExpressionService, ImportMode};
pub use structure_service::{CreationReport, StructureService};
