//! Implementation of the `filemet templates` command.

use filemet_adapters::catalog::{self, Category, FrameworkTemplate};

use crate::{
    cli::{ListFormat, TemplatesArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, output: OutputManager) -> CliResult<()> {
    let templates: Vec<&FrameworkTemplate> = match &args.category {
        Some(raw) => {
            let category = Category::parse(raw).ok_or_else(|| CliError::InvalidInput {
                message: format!(
                    "unknown category '{raw}' (expected frontend, backend, fullstack, mobile, or other)"
                ),
            })?;
            catalog::by_category(category)
        }
        None => catalog::FRAMEWORK_TEMPLATES.iter().collect(),
    };

    let format = args
        .format
        .unwrap_or_else(|| ListFormat::from_global(output.format()));

    match format {
        ListFormat::Table => {
            output.header("Available templates:")?;
            for template in &templates {
                output.print(&format!(
                    "  {:<20} [{}] {}",
                    template.id, template.category, template.name
                ))?;
            }
            output.print("")?;
            output.print("Use with: filemet create --template <ID>")?;
        }

        ListFormat::List => {
            // Plain stdout so ids stay pipeable.
            for template in &templates {
                println!("{}", template.id);
            }
        }

        ListFormat::Json => {
            // JSON output must be parseable even in non-TTY pipes, so it
            // bypasses the OutputManager.
            let json = serde_json::to_string_pretty(&templates).map_err(|e| {
                CliError::InvalidInput {
                    message: format!("failed to serialize templates: {e}"),
                }
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
