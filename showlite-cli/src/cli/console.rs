// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for ShowLite

use colored::Colorize;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::path::PathBuf;
use std::sync::Arc;

use super::commands::OutputFormat;
use super::output::ResultFormatter;
use showlite::{Catalog, QueryCoordinator, QueryRequest};

/// Handle the query command
///
/// Loads the catalog fixture, executes one request, and prints the response
/// envelope in the requested format. An omitted `--filter` submits an
/// explicit null for `titleFilter`.
pub fn handle_query(
    catalog_path: PathBuf,
    operation: String,
    filter: Option<String>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let coordinator = load_coordinator(&catalog_path)?;

    let request = QueryRequest::new(operation).with_title_filter(filter);
    let response = coordinator.execute(&request);

    print!("{}", ResultFormatter::format(&response, format));
    Ok(())
}

/// Handle the console (REPL) command
pub fn handle_console(catalog_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let coordinator = load_coordinator(&catalog_path)?;

    println!("{} {}", "ShowLite".bold().green(), showlite::VERSION);
    println!("Interactive query console. Type :help for commands.\n");

    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("show> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match line {
                    ":quit" | ":exit" => break,
                    ":help" => print_help(),
                    ":ops" => {
                        for name in coordinator.registry().operation_names() {
                            println!("  {}", name.cyan());
                        }
                    }
                    _ => run_line(&coordinator, line),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("{}", format!("Input error: {}", err).red());
                break;
            }
        }
    }

    println!("{}", "Goodbye".green());
    Ok(())
}

/// Execute one console line: `<operation> [filter]`
///
/// Everything after the operation name is the filter, so titles with spaces
/// need no quoting. A bare operation name submits a null filter.
fn run_line(coordinator: &QueryCoordinator, line: &str) {
    let (operation, filter) = match line.split_once(char::is_whitespace) {
        Some((operation, rest)) => (operation, Some(rest.trim().to_string())),
        None => (line, None),
    };

    let request = QueryRequest::new(operation).with_title_filter(filter);
    let response = coordinator.execute(&request);

    print!("{}", ResultFormatter::format(&response, OutputFormat::Table));
}

fn print_help() {
    println!("  {:24} list shows, optional filter", "listShows [filter]".cyan());
    println!("  {:24} search shows, filter required", "searchShows <filter>".cyan());
    println!("  {:24} list registered operations", ":ops".cyan());
    println!("  {:24} leave the console", ":quit".cyan());
}

/// Load the catalog fixture and wire up a coordinator
fn load_coordinator(
    catalog_path: &PathBuf,
) -> Result<QueryCoordinator, Box<dyn std::error::Error>> {
    let catalog = Catalog::from_json_file(catalog_path)
        .map_err(|e| format!("Failed to load catalog from {:?}: {}", catalog_path, e))?;

    log::info!(
        "Loaded catalog with {} shows from {:?}",
        catalog.len(),
        catalog_path
    );

    Ok(QueryCoordinator::new(Arc::new(catalog)))
}
