//! Implementation of the `filemet parse` command.
//!
//! Resolves an expression to its path list and prints one path per line.
//! Parse failures surface the parser's own message and exit with code 2.

use tracing::instrument;

use filemet_core::domain::parser;

use crate::error::{CliError, CliResult};

#[instrument(skip_all)]
pub fn execute(expression: &str) -> CliResult<()> {
    let paths = parser::parse(expression).map_err(|e| CliError::Core(e.into()))?;

    // Plain stdout so the output stays pipeable regardless of quiet mode
    // or output format.
    for path in paths {
        println!("{path}");
    }

    Ok(())
}
