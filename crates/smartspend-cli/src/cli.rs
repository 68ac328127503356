//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use smartspend_core::resolve::{DEFAULT_INPUT_FILE, DEFAULT_REPORT_FILE};

/// SmartSpend - Categorize expenses and project monthly spending
#[derive(Parser)]
#[command(name = "smartspend")]
#[command(about = "Smart expense analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the expenses file and the report
    ///
    /// Defaults to the directory containing the smartspend executable.
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Runs `report` with default options when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the expenses file and write the report
    Report {
        /// Expenses CSV file name, relative to the base directory
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
        input: String,

        /// Report file name, relative to the base directory
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: String,

        /// Also print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which category a description falls into
    Categorize {
        /// Transaction description to test
        description: String,
    },

    /// List categories and their keywords in matching order
    Categories,
}
