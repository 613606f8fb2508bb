// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result formatting for CLI output

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use showlite::QueryResponse;

/// Result formatter for different output formats
pub struct ResultFormatter;

impl ResultFormatter {
    /// Format a query response in the specified format
    pub fn format(response: &QueryResponse, format: crate::cli::commands::OutputFormat) -> String {
        match format {
            crate::cli::commands::OutputFormat::Table => Self::format_table(response),
            crate::cli::commands::OutputFormat::Json => Self::format_json(response),
            crate::cli::commands::OutputFormat::Csv => Self::format_csv(response),
        }
    }

    /// Format a response as a table using comfy-table
    fn format_table(response: &QueryResponse) -> String {
        if !response.errors.is_empty() {
            let mut output = String::new();
            output.push_str(&format!("{}\n", "Request rejected".bold().red()));
            for (i, error) in response.errors.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. [{}] {}\n",
                    i + 1,
                    format!("{:?}", error.code).red(),
                    error.message
                ));
            }
            return output;
        }

        let shows = match &response.data {
            Some(data) => &data.shows,
            None => return format!("{}\n", "No results found".yellow()),
        };

        if shows.is_empty() {
            return format!("{}\n", "No results found".yellow());
        }

        let mut output = String::new();

        // Header
        output.push_str(&format!("{}\n", "Query Results".bold().green()));
        output.push_str(&format!("Shows returned: {}\n\n", shows.len()));

        // Create table
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![Cell::new("title").fg(Color::Green)]);

        for show in shows {
            table.add_row(vec![show.title.clone()]);
        }

        output.push_str(&table.to_string());
        output.push('\n');

        output
    }

    /// Format a response as JSON
    fn format_json(response: &QueryResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| {
            "{\"errors\": [{\"message\": \"Could not serialize response to JSON\"}]}".to_string()
        })
    }

    /// Format a response as CSV
    fn format_csv(response: &QueryResponse) -> String {
        let mut output = String::new();

        output.push_str("title\n");
        if let Some(data) = &response.data {
            for show in &data.shows {
                output.push_str(&Self::csv_escape(&show.title));
                output.push('\n');
            }
        }

        // Errors go out as CSV comments so the header row stays parseable
        if !response.errors.is_empty() {
            output.push_str("\n# Errors:\n");
            for (i, error) in response.errors.iter().enumerate() {
                output.push_str(&format!("# {}. {}\n", i + 1, error.message));
            }
        }

        output
    }

    /// Escape a value for CSV output
    fn csv_escape(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}
