//! Verdict CLI - runs the built-in suite and maps the outcome to an exit
//! status.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
mod error;
pub mod suite;

pub use error::{CliError, CliResult};

/// Verdict CLI application
#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "Verdict - minimal in-process unit-testing harness", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "VERDICT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List the built-in test cases
    List,

    /// Run built-in test cases
    Run {
        /// Cases to run, in order. Defaults to every case that does not
        /// terminate the process.
        names: Vec<String>,

        /// Only run cases whose name contains this substring
        #[arg(short, long)]
        filter: Option<String>,

        /// Do not print SUCCESS lines
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Run using the current process arguments.
pub fn run() -> CliResult<ExitCode> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Logs go to stderr; stdout carries the report lines. `run_with_args` may
    // run more than once per process, so an already installed subscriber is
    // kept.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .try_init()
        .ok();

    let mut harness = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::List => {
            for name in suite::registry().names() {
                println!("{}", name);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run {
            names,
            filter,
            quiet,
        } => {
            if filter.is_some() {
                harness.filter = filter;
            }
            if quiet {
                harness.quiet_success = true;
            }

            let names = if names.is_empty() {
                suite::default_selection()
            } else {
                names
            };
            let selected = suite::registry().select(&names)?;
            tracing::info!(cases = selected.len(), "running built-in suite");

            let report = selected.run(&harness);
            if harness.fail_on_error && !report.is_success() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
