// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query Coordinator - orchestration for ShowLite query execution
//!
//! This is the single entry point for executing named queries. It looks the
//! operation up in the registry, runs the argument validator, and only then
//! dispatches to the filter resolver, so resolvers never see an argument
//! that violates its declared constraints.

use crate::catalog::{Catalog, Show};
use crate::exec::{ExecutionError, ExecutionResult, FilterResolver, QueryResponse};
use crate::schema::{registry::operations, ArgumentValidator, OperationRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One query request
///
/// `arguments` maps argument name to its supplied value; an entry holding
/// `None` is an explicit null, and a missing entry validates the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub operation: String,
    #[serde(default)]
    pub arguments: BTreeMap<String, Option<String>>,
}

impl QueryRequest {
    /// Create a request with no arguments
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            arguments: BTreeMap::new(),
        }
    }

    /// Attach an argument value (`None` for an explicit null)
    pub fn with_argument(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    /// Convenience constructor for the builtin operations' `titleFilter`
    pub fn with_title_filter(self, value: Option<String>) -> Self {
        self.with_argument(operations::TITLE_FILTER, value)
    }

    /// Supplied value of an argument, flattening absent and explicit null
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).and_then(|v| v.as_deref())
    }
}

/// Query Coordinator - validates and executes show queries
///
/// Construction wires the shared catalog handle into the resolver once; the
/// coordinator itself holds no mutable state, so one instance serves
/// concurrent callers without coordination.
pub struct QueryCoordinator {
    registry: OperationRegistry,
    resolver: FilterResolver,
}

impl QueryCoordinator {
    /// Create a coordinator with the builtin operations
    ///
    /// # Arguments
    /// * `catalog` - Shared read-only catalog handle, populated before any
    ///   lookup is servable
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_registry(catalog, OperationRegistry::builtin())
    }

    /// Create a coordinator with a custom operation registry
    ///
    /// This is an advanced constructor for embedders that declare their own
    /// operations; most users should use `new()`.
    pub fn with_registry(catalog: Arc<Catalog>, registry: OperationRegistry) -> Self {
        Self {
            registry,
            resolver: FilterResolver::new(catalog),
        }
    }

    /// Execute a request and return the response envelope
    ///
    /// Never fails at the call boundary: rejections travel inside the
    /// envelope so callers can always distinguish "no matches" (success with
    /// an empty list) from "invalid request" (errors, no data).
    pub fn execute(&self, request: &QueryRequest) -> QueryResponse {
        match self.execute_checked(request) {
            Ok(shows) => QueryResponse::success(shows),
            Err(error) => QueryResponse::from(error),
        }
    }

    /// Execute a request through the typed `Result` API
    ///
    /// # Returns
    /// * `Ok(shows)` - the matched shows in catalog order
    /// * `Err(ExecutionError)` - unknown operation, or arguments rejected by
    ///   the validation stage before the resolver ran
    pub fn execute_checked(&self, request: &QueryRequest) -> ExecutionResult<Vec<Show>> {
        let spec = self
            .registry
            .get(&request.operation)
            .ok_or_else(|| ExecutionError::UnknownOperation(request.operation.clone()))?;

        ArgumentValidator::validate(spec, &request.arguments).map_err(|violations| {
            ExecutionError::RejectedArguments {
                operation: spec.name.clone(),
                violations,
            }
        })?;

        let filter = request.argument(operations::TITLE_FILTER);
        log::debug!(
            "Dispatching operation '{}' with filter {:?}",
            spec.name,
            filter
        );

        Ok(self.resolver.resolve(spec.policy, filter))
    }

    /// The operation registry this coordinator dispatches against
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }
}
