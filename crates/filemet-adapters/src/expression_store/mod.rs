//! Custom expression store adapters.

mod json_file;
mod memory;

pub use json_file::JsonFileExpressionStore;
pub use memory::InMemoryExpressionStore;
