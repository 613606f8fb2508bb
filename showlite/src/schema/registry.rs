// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Operation registry implementation
//!
//! This module provides the OperationRegistry that manages all declared
//! query operations. The registry maps operation names to their argument
//! rule tables and resolver policies; the coordinator consults it on every
//! request before validation and dispatch.

use super::types::{ArgumentCheck, ArgumentSpec, OperationSpec, ResolverPolicy};
use std::collections::HashMap;

/// Names of the builtin operations
pub mod operations {
    /// Lenient lookup: `titleFilter` is nullable, no size constraint
    pub const LIST_SHOWS: &str = "listShows";
    /// Strict lookup: `titleFilter` is non-null with a minimum length of 1
    pub const SEARCH_SHOWS: &str = "searchShows";

    /// The filter argument both operations take
    pub const TITLE_FILTER: &str = "titleFilter";
}

/// Central registry for declared query operations
pub struct OperationRegistry {
    operations: HashMap<String, OperationSpec>,
}

impl OperationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    /// Create a registry with the builtin show operations registered
    ///
    /// Registers `listShows` (lenient: a null `titleFilter` returns the full
    /// catalog) and `searchShows` (strict: `titleFilter` must be non-null and
    /// at least one character long).
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register(
            OperationSpec::new(operations::LIST_SHOWS, ResolverPolicy::Lenient)
                .with_argument(ArgumentSpec::new(operations::TITLE_FILTER)),
        );

        registry.register(
            OperationSpec::new(operations::SEARCH_SHOWS, ResolverPolicy::Strict)
                .with_argument(
                    ArgumentSpec::new(operations::TITLE_FILTER)
                        .with_check(ArgumentCheck::NotNull)
                        .with_check(ArgumentCheck::MinLength(1)),
                ),
        );

        registry
    }

    /// Register an operation spec
    ///
    /// Re-registering a name replaces the previous spec.
    pub fn register(&mut self, spec: OperationSpec) {
        log::info!("Registered operation: {}", spec.name);
        self.operations.insert(spec.name.clone(), spec);
    }

    /// Look up an operation by name
    pub fn get(&self, name: &str) -> Option<&OperationSpec> {
        self.operations.get(name)
    }

    /// List all registered operation names
    pub fn operation_names(&self) -> Vec<String> {
        self.operations.keys().cloned().collect()
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
