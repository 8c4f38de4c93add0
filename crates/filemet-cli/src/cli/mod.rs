//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "filemet",
    bin_name = "filemet",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} File structures from one-line expressions",
    long_about = "Filemet turns compact expressions like \
                  'src/{components/{Header.jsx,Footer.jsx},utils/helpers.js}' \
                  into real files and folders.",
    after_help = "EXAMPLES:\n\
        \x20 filemet create 'src/{components/{App.jsx,index.js},utils/helpers.js}'\n\
        \x20 filemet parse 'app/{page.tsx,layout.tsx} + lib/utils.ts'\n\
        \x20 filemet create --template react-basic --dir my-app\n\
        \x20 filemet templates --category frontend\n\
        \x20 filemet completions bash > /usr/share/bash-completion/completions/filemet",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create files and folders from an expression.
    #[command(
        visible_alias = "c",
        about = "Create files and folders from an expression",
        after_help = "EXAMPLES:\n\
            \x20 filemet create 'src/{main.rs,lib.rs} + Cargo.toml'\n\
            \x20 filemet create --template nextjs-basic --dir my-app\n\
            \x20 filemet create 'docs/{a.md,b.md}' --dry-run"
    )]
    Create(CreateArgs),

    /// Resolve an expression to its path list without touching the disk.
    #[command(
        about = "Print the paths an expression resolves to",
        after_help = "EXAMPLES:\n\
            \x20 filemet parse 'components/{Header.jsx,Footer.jsx}'\n\
            \x20 filemet parse 'api[users/{controller.ts,service.ts}]'"
    )]
    Parse(ParseArgs),

    /// List the built-in framework templates.
    #[command(
        visible_alias = "ls",
        about = "List built-in framework templates",
        after_help = "EXAMPLES:\n\
            \x20 filemet templates\n\
            \x20 filemet templates --category backend\n\
            \x20 filemet templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Manage saved custom expressions.
    #[command(
        about = "Manage saved custom expressions",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 filemet expr save my-layout 'src/{a.ts,b.ts}' --category frontend\n\
            \x20 filemet expr list\n\
            \x20 filemet expr search react\n\
            \x20 filemet expr export > expressions.json"
    )]
    Expr(ExprCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 filemet completions bash > ~/.local/share/bash-completion/completions/filemet\n\
            \x20 filemet completions zsh  > ~/.zfunc/_filemet\n\
            \x20 filemet completions fish > ~/.config/fish/completions/filemet.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `filemet create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Expression to materialize.  Required unless `--template` is given.
    #[arg(
        value_name = "EXPRESSION",
        required_unless_present = "template",
        conflicts_with = "template",
        help = "File structure expression"
    )]
    pub expression: Option<String>,

    /// Use a built-in template instead of a literal expression.
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Built-in template ID (see `filemet templates`)"
    )]
    pub template: Option<String>,

    /// Directory to create the structure under.
    ///
    /// When absent, `[defaults] dir` from the config file applies, then
    /// the current directory.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Target directory (default: config `defaults.dir`, then `.`)"
    )]
    pub dir: Option<PathBuf>,

    /// Preview the resolved paths without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── parse ─────────────────────────────────────────────────────────────────────

/// Arguments for `filemet parse`.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Expression to resolve.
    #[arg(value_name = "EXPRESSION", help = "File structure expression")]
    pub expression: String,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `filemet templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Filter by category.
    ///
    /// No short flag: `-c` belongs to the global `--config`.
    #[arg(
        long = "category",
        value_name = "CATEGORY",
        help = "Filter by category (frontend, backend, fullstack, mobile, other)"
    )]
    pub category: Option<String>,

    /// Output format.  Falls back to the global `--output-format`.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

impl ListFormat {
    /// Fallback when a listing command gets no explicit `--format`.
    pub fn from_global(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ListFormat::Json,
            _ => ListFormat::Table,
        }
    }
}

// ── expr subcommands ──────────────────────────────────────────────────────────

/// Subcommands for `filemet expr`.
#[derive(Debug, Subcommand)]
pub enum ExprCommands {
    /// Save a new custom expression.
    Save(ExprSaveArgs),
    /// List all saved expressions.
    List(ExprListArgs),
    /// Show a saved expression by id or name.
    Show {
        /// Record id or name.
        id: String,
    },
    /// Delete a saved expression by id or name.
    Delete {
        /// Record id or name.
        id: String,
    },
    /// Search saved expressions.
    Search {
        /// Case-insensitive query matched against name, description,
        /// tags, and expression text.
        query: String,
    },
    /// Export saved expressions as JSON to stdout.
    Export,
    /// Import expressions from a JSON file.
    Import(ExprImportArgs),
}

/// Arguments for `filemet expr save`.
#[derive(Debug, Args)]
pub struct ExprSaveArgs {
    /// Name for the saved expression.
    #[arg(value_name = "NAME", help = "Name for the saved expression")]
    pub name: String,

    /// The expression text.
    #[arg(value_name = "EXPRESSION", help = "File structure expression")]
    pub expression: String,

    /// Optional description.
    #[arg(long = "description", value_name = "TEXT", help = "Description")]
    pub description: Option<String>,

    /// Category (defaults to "custom").
    #[arg(long = "category", value_name = "CATEGORY", help = "Category")]
    pub category: Option<String>,

    /// Tags (repeatable).
    #[arg(long = "tag", value_name = "TAG", help = "Tag (repeatable)")]
    pub tags: Vec<String>,
}

/// Arguments for `filemet expr list`.
#[derive(Debug, Args)]
pub struct ExprListArgs {
    /// Filter by category.
    #[arg(long = "category", help = "Filter by category")]
    pub category: Option<String>,

    /// Output format.  Falls back to the global `--output-format`.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Arguments for `filemet expr import`.
#[derive(Debug, Args)]
pub struct ExprImportArgs {
    /// JSON file to import (an array of expression records).
    #[arg(value_name = "FILE", help = "JSON file to import")]
    pub file: PathBuf,

    /// Replace the whole store instead of merging.
    #[arg(long = "replace", help = "Replace existing expressions instead of merging")]
    pub replace: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `filemet completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from(["filemet", "create", "src/{a.ts,b.ts}"]);
        if let Commands::Create(args) = cli.command {
            assert_eq!(args.expression.as_deref(), Some("src/{a.ts,b.ts}"));
            assert!(args.dir.is_none());
            assert!(!args.dry_run);
        } else {
            panic!("expected Create command");
        }
    }

    #[test]
    fn create_alias() {
        let cli = Cli::parse_from(["filemet", "c", "a.ts"]);
        assert!(matches!(cli.command, Commands::Create(_)));
    }

    #[test]
    fn create_requires_expression_or_template() {
        assert!(Cli::try_parse_from(["filemet", "create"]).is_err());
        assert!(Cli::try_parse_from(["filemet", "create", "--template", "react-basic"]).is_ok());
    }

    #[test]
    fn create_expression_conflicts_with_template() {
        let result =
            Cli::try_parse_from(["filemet", "create", "a.ts", "--template", "react-basic"]);
        assert!(result.is_err());
    }

    #[test]
    fn templates_alias() {
        let cli = Cli::parse_from(["filemet", "ls"]);
        assert!(matches!(cli.command, Commands::Templates(_)));
    }

    #[test]
    fn expr_save_collects_repeated_tags() {
        let cli = Cli::parse_from([
            "filemet", "expr", "save", "layout", "src/{a,b}", "--tag", "react", "--tag", "web",
        ]);
        if let Commands::Expr(ExprCommands::Save(args)) = cli.command {
            assert_eq!(args.tags, ["react", "web"]);
        } else {
            panic!("expected Expr Save command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["filemet", "--quiet", "--verbose", "templates"]);
        assert!(result.is_err());
    }

    #[test]
    fn short_config_flag_coexists_with_category_filter() {
        // `-c` is the global config flag; category filters are long-only.
        let cli = Cli::parse_from([
            "filemet", "-c", "filemet.toml", "templates", "--category", "backend",
        ]);
        assert_eq!(cli.global.config, Some(PathBuf::from("filemet.toml")));
        if let Commands::Templates(args) = cli.command {
            assert_eq!(args.category.as_deref(), Some("backend"));
        } else {
            panic!("expected Templates command");
        }

        let cli = Cli::parse_from(["filemet", "expr", "list", "--category", "frontend"]);
        assert!(matches!(cli.command, Commands::Expr(ExprCommands::List(_))));
    }

    #[test]
    fn category_has_no_short_flag() {
        // `templates -c x` must read `x` as a config path, not a category.
        let cli = Cli::parse_from(["filemet", "templates", "-c", "some.toml"]);
        assert_eq!(cli.global.config, Some(PathBuf::from("some.toml")));
        if let Commands::Templates(args) = cli.command {
            assert!(args.category.is_none());
        } else {
            panic!("expected Templates command");
        }
    }

    #[test]
    fn list_format_falls_back_to_global_output_format() {
        assert_eq!(ListFormat::from_global(OutputFormat::Json), ListFormat::Json);
        assert_eq!(ListFormat::from_global(OutputFormat::Human), ListFormat::Table);
        assert_eq!(ListFormat::from_global(OutputFormat::Plain), ListFormat::Table);
    }
}
