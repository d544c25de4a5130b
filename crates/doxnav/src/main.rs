//! doxnav CLI - navigation index toolkit.
//!
//! Provides commands for:
//! - `check`: Validate index scripts for structural problems
//! - `fmt`: Rewrite index scripts in canonical form
//! - `export`: Print the expanded navigation tree as JSON
//! - `show`: Print the expanded navigation tree as a text outline

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, FmtArgs, ShowArgs};
use output::Output;

/// doxnav - navigation index toolkit.
#[derive(Parser)]
#[command(name = "doxnav", version, about)]
struct Cli {
    /// Enable verbose output (log index loading).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check index scripts for structural problems.
    Check(CheckArgs),
    /// Rewrite index scripts in canonical form.
    Fmt(FmtArgs),
    /// Print the expanded navigation tree as JSON.
    Export(ExportArgs),
    /// Print the expanded navigation tree as a text outline.
    Show(ShowArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Fmt(args) => args.execute(&output),
        Commands::Export(args) => args.execute(&output),
        Commands::Show(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
