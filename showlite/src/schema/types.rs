// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Schema types for operations and their argument constraints

/// How a resolver treats a missing filter argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverPolicy {
    /// A null filter is permitted and means "return everything"
    Lenient,
    /// The filter must be present; validation rejects null before dispatch
    Strict,
}

/// A single predicate check declared against an argument
///
/// Length checks count Unicode scalar values, not bytes, and only apply when
/// a value is present; `NotNull` is the only check that fires on null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentCheck {
    /// The argument must not be null or absent
    NotNull,
    /// The argument value must be at least this many characters long
    MinLength(usize),
    /// The argument value must be at most this many characters long
    MaxLength(usize),
}

/// Declared shape of one operation argument
#[derive(Debug, Clone)]
pub struct ArgumentSpec {
    pub name: String,
    pub checks: Vec<ArgumentCheck>,
}

impl ArgumentSpec {
    /// Create an argument spec with no checks (nullable, unbounded)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checks: Vec::new(),
        }
    }

    /// Add a predicate check to this argument
    pub fn with_check(mut self, check: ArgumentCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// Whether this argument declares a `NotNull` check
    pub fn is_non_null(&self) -> bool {
        self.checks.contains(&ArgumentCheck::NotNull)
    }
}

/// Declared shape of one query operation
///
/// Ties the operation name to its argument rule table and the resolver
/// policy the coordinator dispatches to once validation passes.
#[derive(Debug, Clone)]
pub struct OperationSpec {
    pub name: String,
    pub policy: ResolverPolicy,
    pub arguments: Vec<ArgumentSpec>,
}

impl OperationSpec {
    pub fn new(name: impl Into<String>, policy: ResolverPolicy) -> Self {
        Self {
            name: name.into(),
            policy,
            arguments: Vec::new(),
        }
    }

    /// Declare an argument for this operation
    pub fn with_argument(mut self, argument: ArgumentSpec) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Look up a declared argument by name
    pub fn argument(&self, name: &str) -> Option<&ArgumentSpec> {
        self.arguments.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_spec_builder() {
        let spec = ArgumentSpec::new("titleFilter")
            .with_check(ArgumentCheck::NotNull)
            .with_check(ArgumentCheck::MinLength(1));

        assert_eq!(spec.name, "titleFilter");
        assert!(spec.is_non_null());
        assert_eq!(spec.checks.len(), 2);
    }

    #[test]
    fn test_operation_spec_argument_lookup() {
        let spec = OperationSpec::new("listShows", ResolverPolicy::Lenient)
            .with_argument(ArgumentSpec::new("titleFilter"));

        assert!(spec.argument("titleFilter").is_some());
        assert!(spec.argument("unknown").is_none());
        assert!(!spec.argument("titleFilter").unwrap().is_non_null());
    }
}
