//! Main entry point for bracken-tools.
//!
//! Post-processes Bracken abundance reports:
//! 1. `convert` turns one report into Krona text input.
//! 2. `combine` merges reports from several samples into a single
//!    samples-by-taxa count table.

// Modules defined within the project
mod bio;
mod cli;
mod count_table;
mod io;
mod metadata;
mod pipeline;
mod visualization;
use cli::{run_cli, Cli};

// External Crate Imports
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

/// Main function: parses arguments and dispatches to the requested tool.
fn main() -> Result<ExitCode> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let cli = Cli::parse();

    run_cli(cli)
}
