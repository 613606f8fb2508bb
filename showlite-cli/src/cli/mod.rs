// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for ShowLite
//!
//! Provides command-line interface for catalog loading, one-off query
//! execution, and an interactive console (REPL).

pub mod commands;
pub mod console;
pub mod output;

pub use commands::{Cli, Commands};
pub use console::{handle_console, handle_query};
