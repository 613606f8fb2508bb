// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! ShowLite CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments first to get log level
    let cli = Cli::parse();

    // Determine log level from CLI args or environment variable
    let log_level = if cli.verbose {
        // -v/--verbose flag takes precedence
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        // --log-level flag
        level.to_level_filter()
    } else {
        // Default to Warn (can still be overridden by RUST_LOG env var)
        log::LevelFilter::Warn
    };

    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    // Handle commands
    match cli.command {
        Commands::Version => {
            println!("{} {}", "ShowLite".bold().green(), showlite::VERSION);
            println!("Lightweight show-catalog query service");
            Ok(())
        }

        Commands::Query {
            catalog,
            operation,
            filter,
            format,
        } => cli::handle_query(catalog, operation, filter, format),

        Commands::Console { catalog } => cli::handle_console(catalog),
    }
}
