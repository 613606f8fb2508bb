// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Argument validator implementation

use super::types::{ArgumentCheck, OperationSpec};
use std::collections::BTreeMap;

/// Argument constraint violations
///
/// Each variant names the argument that failed and, for length checks, the
/// declared bound and the observed length, so callers can tell exactly which
/// constraint was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintViolation {
    #[error("argument '{argument}' must not be null")]
    NotNull { argument: String },

    #[error("argument '{argument}' must be at least {min} characters long, got {actual}")]
    TooShort {
        argument: String,
        min: usize,
        actual: usize,
    },

    #[error("argument '{argument}' must be at most {max} characters long, got {actual}")]
    TooLong {
        argument: String,
        max: usize,
        actual: usize,
    },

    #[error("argument '{argument}' is not declared for this operation")]
    UnknownArgument { argument: String },
}

impl ConstraintViolation {
    /// The argument this violation refers to
    pub fn argument(&self) -> &str {
        match self {
            ConstraintViolation::NotNull { argument }
            | ConstraintViolation::TooShort { argument, .. }
            | ConstraintViolation::TooLong { argument, .. }
            | ConstraintViolation::UnknownArgument { argument } => argument,
        }
    }
}

/// Validator that executes an operation's argument rule table
///
/// Runs ahead of resolver dispatch and collects every violation rather than
/// stopping at the first. Resolvers never re-check constraints: an argument
/// that reaches a resolver has already passed this stage.
pub struct ArgumentValidator;

impl ArgumentValidator {
    /// Validate supplied arguments against an operation spec
    ///
    /// `arguments` maps argument name to its supplied value; an absent entry
    /// and an explicit null both validate as null. Length checks only apply
    /// when a value is present (`NotNull` is the sole null check), and they
    /// count Unicode scalar values rather than bytes.
    ///
    /// # Returns
    /// * `Ok(())` - every declared check passed
    /// * `Err(violations)` - one entry per failed check, in declaration order
    pub fn validate(
        spec: &OperationSpec,
        arguments: &BTreeMap<String, Option<String>>,
    ) -> Result<(), Vec<ConstraintViolation>> {
        let mut violations = Vec::new();

        for arg_spec in &spec.arguments {
            let value = arguments
                .get(&arg_spec.name)
                .and_then(|v| v.as_deref());

            for check in &arg_spec.checks {
                if let Some(violation) = Self::run_check(&arg_spec.name, *check, value) {
                    violations.push(violation);
                }
            }
        }

        // Arguments the operation never declared are rejected too
        for name in arguments.keys() {
            if spec.argument(name).is_none() {
                violations.push(ConstraintViolation::UnknownArgument {
                    argument: name.clone(),
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            log::debug!(
                "Operation '{}' rejected with {} constraint violation(s)",
                spec.name,
                violations.len()
            );
            Err(violations)
        }
    }

    fn run_check(
        argument: &str,
        check: ArgumentCheck,
        value: Option<&str>,
    ) -> Option<ConstraintViolation> {
        match (check, value) {
            (ArgumentCheck::NotNull, None) => Some(ConstraintViolation::NotNull {
                argument: argument.to_string(),
            }),
            (ArgumentCheck::NotNull, Some(_)) => None,
            (ArgumentCheck::MinLength(min), Some(v)) => {
                let actual = v.chars().count();
                (actual < min).then(|| ConstraintViolation::TooShort {
                    argument: argument.to_string(),
                    min,
                    actual,
                })
            }
            (ArgumentCheck::MaxLength(max), Some(v)) => {
                let actual = v.chars().count();
                (actual > max).then(|| ConstraintViolation::TooLong {
                    argument: argument.to_string(),
                    max,
                    actual,
                })
            }
            // Length checks never fire on null; nullability is NotNull's job
            (ArgumentCheck::MinLength(_) | ArgumentCheck::MaxLength(_), None) => None,
        }
    }
}
