//! Implementation of the `filemet expr` subcommands.
//!
//! Saved expressions are backed by the JSON file store under the platform
//! data directory (overridable via config).

use tracing::{debug, instrument};

use filemet_adapters::JsonFileExpressionStore;
use filemet_core::{
    application::{ExpressionService, ImportMode},
    domain::{CustomExpression, NewExpression},
};

use crate::{
    cli::{ExprCommands, ExprListArgs, ExprSaveArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(cmd: ExprCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store_path = config.store_path();
    debug!(store = %store_path.display(), "Opening expression store");
    let service = ExpressionService::new(Box::new(JsonFileExpressionStore::new(store_path)));

    match cmd {
        ExprCommands::Save(args) => save(&service, args, &output),
        ExprCommands::List(args) => list(&service, args, &output),
        ExprCommands::Show { id } => show(&service, &id, &output),
        ExprCommands::Delete { id } => delete(&service, &id, &output),
        ExprCommands::Search { query } => search(&service, &query, &output),
        ExprCommands::Export => export(&service),
        ExprCommands::Import(args) => import(&service, args, &output),
    }
}

fn save(service: &ExpressionService, args: ExprSaveArgs, output: &OutputManager) -> CliResult<()> {
    let record = service
        .create(NewExpression {
            name: args.name,
            description: args.description.unwrap_or_default(),
            expression: args.expression,
            category: args.category,
            tags: args.tags,
        })
        .map_err(CliError::Core)?;

    output.success(&format!("Saved '{}' ({})", record.name, record.id))?;
    Ok(())
}

fn list(service: &ExpressionService, args: ExprListArgs, output: &OutputManager) -> CliResult<()> {
    let records = match &args.category {
        Some(category) => service.by_category(category),
        None => service.list(),
    }
    .map_err(CliError::Core)?;

    if records.is_empty() {
        output.info("No saved expressions")?;
        return Ok(());
    }

    let format = args
        .format
        .unwrap_or_else(|| ListFormat::from_global(output.format()));
    render_records(&records, format, output)
}

fn show(service: &ExpressionService, id: &str, output: &OutputManager) -> CliResult<()> {
    let record = service.get(id).map_err(CliError::Core)?;

    output.header(&record.name)?;
    output.print(&format!("  id:          {}", record.id))?;
    if !record.description.is_empty() {
        output.print(&format!("  description: {}", record.description))?;
    }
    output.print(&format!("  category:    {}", record.category))?;
    if !record.tags.is_empty() {
        output.print(&format!("  tags:        {}", record.tags.join(", ")))?;
    }
    output.print(&format!("  created:     {}", record.created_at))?;
    output.print(&format!("  updated:     {}", record.updated_at))?;
    output.print("")?;
    output.print(&record.expression)?;
    Ok(())
}

fn delete(service: &ExpressionService, id: &str, output: &OutputManager) -> CliResult<()> {
    // Accept names as well as ids, like `show`.
    let record = service.get(id).map_err(CliError::Core)?;
    service.delete(&record.id).map_err(CliError::Core)?;
    output.success(&format!("Deleted '{}'", record.name))?;
    Ok(())
}

fn search(service: &ExpressionService, query: &str, output: &OutputManager) -> CliResult<()> {
    let records = service.search(query).map_err(CliError::Core)?;
    if records.is_empty() {
        output.info(&format!("No expressions match '{query}'"))?;
        return Ok(());
    }
    render_records(&records, ListFormat::Table, output)
}

fn export(service: &ExpressionService) -> CliResult<()> {
    let json = service.export_json().map_err(CliError::Core)?;
    // Raw stdout: the export is meant to be redirected to a file.
    println!("{json}");
    Ok(())
}

fn import(
    service: &ExpressionService,
    args: crate::cli::ExprImportArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let json = std::fs::read_to_string(&args.file)
        .with_cli_context(|| format!("failed to read {}", args.file.display()))?;

    let mode = if args.replace {
        ImportMode::Replace
    } else {
        ImportMode::Merge
    };
    let count = service.import_json(&json, mode).map_err(CliError::Core)?;

    output.success(&format!("Imported {count} expressions"))?;
    Ok(())
}

fn render_records(
    records: &[CustomExpression],
    format: ListFormat,
    output: &OutputManager,
) -> CliResult<()> {
    match format {
        ListFormat::Table => {
            output.header("Saved expressions:")?;
            for record in records {
                let tags = if record.tags.is_empty() {
                    String::new()
                } else {
                    format!(" #{}", record.tags.join(" #"))
                };
                output.print(&format!(
                    "  {:<20} [{}]{} {}",
                    record.name, record.category, tags, record.expression
                ))?;
            }
        }
        ListFormat::List => {
            for record in records {
                println!("{}", record.name);
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(records).map_err(|e| CliError::InvalidInput {
                message: format!("failed to serialize expressions: {e}"),
            })?;
            println!("{json}");
        }
    }
    Ok(())
}
