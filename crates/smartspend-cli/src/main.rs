//! SmartSpend CLI - Expense analyzer
//!
//! Usage:
//!   smartspend                          Analyze expenses.csv next to the binary
//!   smartspend --dir DIR report --json  Analyze DIR/expenses.csv, print JSON too
//!   smartspend categorize "Uber ride"   Test the keyword table

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use smartspend_core::resolve::{DEFAULT_INPUT_FILE, DEFAULT_REPORT_FILE};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        None => {
            let base_dir = commands::resolve_base_dir(cli.dir.as_deref())?;
            commands::cmd_report(&base_dir, DEFAULT_INPUT_FILE, DEFAULT_REPORT_FILE, false)
        }
        Some(Commands::Report {
            input,
            output,
            json,
        }) => {
            let base_dir = commands::resolve_base_dir(cli.dir.as_deref())?;
            commands::cmd_report(&base_dir, &input, &output, json)
        }
        Some(Commands::Categorize { description }) => commands::cmd_categorize(&description),
        Some(Commands::Categories) => commands::cmd_categories(),
    }
}
