//! Implementation of the `filemet create` command.
//!
//! Responsibility: resolve the expression (literal or template), call the
//! core structure service, and display results.  No business logic lives
//! here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use filemet_adapters::{catalog, LocalFilesystem};
use filemet_core::application::StructureService;

use crate::{
    cli::CreateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `filemet create` command.
///
/// Dispatch sequence:
/// 1. Resolve the expression (literal argument or `--template` lookup)
/// 2. Resolve the target directory (`--dir`, config `defaults.dir`, `.`)
/// 3. Dry run: print the resolved paths and exit
/// 4. Materialize through `StructureService` + `LocalFilesystem`
/// 5. Print the creation summary
#[instrument(skip_all)]
pub fn execute(args: CreateArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let expression = resolve_expression(&args)?;
    let dir = resolve_target_dir(args.dir.clone(), config);
    debug!(expression = %expression, dir = %dir.display(), "Expression resolved");

    let service = StructureService::new(Box::new(LocalFilesystem::new()));

    if args.dry_run {
        let paths = service.preview(&expression).map_err(CliError::Core)?;
        output.info(&format!(
            "Dry run: would create {} entries under {}",
            paths.len(),
            dir.display(),
        ))?;
        for path in paths {
            output.print(&format!("  {path}"))?;
        }
        return Ok(());
    }

    info!(dir = %dir.display(), "Structure creation started");
    let report = service.create(&expression, &dir).map_err(CliError::Core)?;

    match report.summary() {
        Some(summary) => {
            output.success(&summary)?;
            if !output.is_quiet() {
                for folder in &report.folders {
                    output.print(&format!("  {folder}/"))?;
                }
                for file in &report.files {
                    output.print(&format!("  {file}"))?;
                }
            }
        }
        None => output.info("All files and folders already exist")?,
    }

    Ok(())
}

/// Target directory: `--dir` wins, then the config file's `defaults.dir`,
/// then the current directory.
fn resolve_target_dir(cli_dir: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    cli_dir
        .or_else(|| config.defaults.dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Pick the expression: a literal argument, or a catalog template by id.
fn resolve_expression(args: &CreateArgs) -> CliResult<String> {
    if let Some(id) = &args.template {
        let template = catalog::by_id(id).ok_or_else(|| CliError::TemplateNotFound {
            id: id.clone(),
        })?;
        return Ok(template.expression.to_string());
    }

    // clap enforces expression-or-template, so this unwrap-by-contract is
    // guarded with a proper error anyway.
    args.expression
        .clone()
        .ok_or_else(|| CliError::InvalidInput {
            message: "an expression or --template is required".into(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
