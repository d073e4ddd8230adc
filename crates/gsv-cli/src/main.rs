//! # gsv CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gsv_cli::list::{run_list, ListArgs};
use gsv_cli::verify::{run_verify, VerifyArgs};

/// Golden Schema Verifier
///
/// Runs schema-verification suites: each case validates a document against a
/// JSON Schema, normalizes the failures into a stable text form, and compares
/// the result byte-for-byte against a committed golden artifact.
#[derive(Parser, Debug)]
#[command(name = "gsv", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run suites and compare results against golden artifacts.
    Verify(VerifyArgs),

    /// Print suite contents without running any cases.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Verify(args) => run_verify(&args),
        Commands::List(args) => run_list(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
