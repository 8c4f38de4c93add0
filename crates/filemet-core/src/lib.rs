//! Filemet Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Filemet
//! file structure tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          filemet-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (StructureService, ExpressionService)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: Filesystem, Store)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    filemet-adapters (Infrastructure)    │
//! │  (LocalFilesystem, JsonFileStore, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (parser, FileStructure, expressions)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use filemet_core::{
//!     application::StructureService,
//!     domain::parser,
//! };
//!
//! // Pure parsing
//! let paths = parser::parse("src/{main.rs,lib.rs}").unwrap();
//! assert_eq!(paths, ["src/main.rs", "src/lib.rs"]);
//!
//! // Full workflow (with an injected filesystem adapter)
//! # fn adapters() -> Box<dyn filemet_core::application::Filesystem> { unimplemented!() }
//! let service = StructureService::new(adapters());
//! service.create("src/{main.rs,lib.rs}", "./my-project".as_ref()).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ports::{ExpressionStore, Filesystem},
        CreationReport, ExpressionService, ImportMode, StructureService,
    };
    pub use crate::domain::{
        parser, CustomExpression, ExpressionUpdate, FileStructure, FsEntry, NewExpression,
    };
    pub use crate::error::{FilemetError, FilemetResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
