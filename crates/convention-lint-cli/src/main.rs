//! convention-lint CLI tool.
//!
//! Usage:
//! ```bash
//! convention-lint check [OPTIONS] [FACTS]
//! convention-lint list-rules
//! convention-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Naming and structure convention linter driven by extracted source facts
#[derive(Parser)]
#[command(name = "convention-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CONVENTION_LINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a facts document against the convention rules
    Check {
        /// Facts document (JSON); `-` reads from stdin
        #[arg(default_value = "-")]
        facts: PathBuf,

        /// Project directory used to find the configuration file
        #[arg(long, default_value = ".")]
        project: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Rule preset (overrides the configuration file)
        #[arg(long)]
        preset: Option<String>,

        /// Only run specific rules (comma-separated ids or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Show the resolved fix plan
        #[arg(long)]
        show_fixes: bool,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-diagnostic compact format.
    Compact,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins; --verbose only changes the fallback level.
    let fallback = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            facts,
            project,
            format,
            preset,
            rules,
            exclude,
            show_fixes,
        } => {
            let source = config_resolver::resolve(&project, cli.config.as_deref());
            commands::check::run(&commands::check::CheckOptions {
                facts: &facts,
                format,
                preset: preset.as_deref(),
                rules: rules.as_deref(),
                exclude: &exclude,
                show_fixes,
                source: &source,
            })
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => {
            commands::init::run(force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
