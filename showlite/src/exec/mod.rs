// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query execution
//!
//! This module provides the filter resolver that scans the catalog for
//! matching shows, the execution error types, and the response envelope
//! returned to callers.

pub mod error;
pub mod resolver;
pub mod result;

// Re-export the main types for convenience
pub use error::{ExecutionError, ExecutionResult};
pub use resolver::FilterResolver;
pub use result::{ErrorCode, QueryResponse, ResponseError, ShowData};
