// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Execution error types

use crate::schema::ConstraintViolation;
use thiserror::Error;

/// Execution errors
///
/// These cover requests rejected before resolution. Resolution itself has no
/// error conditions: once an argument passes validation the scan always
/// succeeds, and a broken validation wiring is a panic, not an error value.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Argument validation failed for operation '{operation}'")]
    RejectedArguments {
        operation: String,
        violations: Vec<ConstraintViolation>,
    },
}

pub type ExecutionResult<T> = Result<T, ExecutionError>;
