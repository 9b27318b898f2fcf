//! Command-line interface for sqlmd
//!
//! One operation: export the results of a SQL file's query to Markdown.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod export;

/// Export SQLite query results as Markdown documents
#[derive(Parser)]
#[command(name = "sqlmd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    args: export::ExportArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    export::run(cli.args)
}
