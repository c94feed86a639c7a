//! lintkit command-line interface.
//!
//! `lintkit resolve` loads a declarative options file, syncs it into engine
//! flags, and prints the resolved state. `lintkit schema` dumps the JSON
//! schema for the options file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use lintkit_core::{LintFlags, LintOptions, SyncContext, generate_schema, sync_options};
use tracing::debug;

mod summary;

use summary::ResolvedSummary;

#[derive(Parser)]
#[command(
    name = "lintkit",
    version,
    about = "Resolve lint options into engine flags and report outputs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve an options file into engine flags and report outputs
    Resolve(ResolveArgs),
    /// Print the JSON schema for the options file
    Schema,
}

#[derive(Args)]
struct ResolveArgs {
    /// Project root used to resolve relative report paths (defaults to the
    /// current directory)
    #[arg(value_name = "PATH")]
    project_root: Option<PathBuf>,

    /// Path to the lint options TOML file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Variant name appended to default report filenames
    #[arg(long, value_name = "NAME")]
    variant: Option<String>,

    /// Directory to place default report files in
    #[arg(long, value_name = "DIR")]
    reports_dir: Option<PathBuf>,

    /// Only sync reporting for fatal findings
    #[arg(long)]
    fatal_only: bool,

    /// Skip building report writers
    #[arg(long)]
    no_report: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Schema => {
            let schema = generate_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Resolve(args) => resolve(args),
    }
}

fn resolve(args: ResolveArgs) -> Result<ExitCode> {
    let (options, load_warning) = LintOptions::load_or_default(args.config.as_ref());
    if let Some(warning) = load_warning {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
    for warning in options.validate() {
        eprintln!(
            "{} {}: {}",
            "warning:".yellow().bold(),
            warning.field,
            warning.message
        );
        if let Some(suggestion) = warning.suggestion {
            eprintln!("  {} {}", "hint:".cyan(), suggestion);
        }
    }

    let project_root = args
        .project_root
        .or_else(|| std::env::current_dir().ok());
    debug!(?project_root, fatal_only = args.fatal_only, "resolving options");

    let context = SyncContext {
        variant: args.variant,
        project_root,
        reports_dir: args.reports_dir,
        report: !args.no_report,
    };

    let mut flags = LintFlags::default();
    flags.fatal_only = args.fatal_only;
    sync_options(&options, &mut flags, &context)?;

    let summary = ResolvedSummary::from_flags(&flags);
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => summary.print(),
    }

    Ok(ExitCode::SUCCESS)
}
