// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Test fixture for coordinator-level tests
//!
//! Builds a coordinator over a small fixed catalog and provides assertion
//! helpers so individual tests stay focused on the property under test.

use showlite::{Catalog, ErrorCode, QueryCoordinator, QueryRequest, QueryResponse, Show};
use std::sync::Arc;

/// The fixture catalog, in insertion order
pub const FIXTURE_TITLES: [&str; 5] = [
    "Northern Lights",
    "Harbor Town",
    "The Long Harvest",
    "Night Harbor",
    "Signal Fires",
];

pub struct TestFixture {
    coordinator: QueryCoordinator,
}

impl TestFixture {
    /// Build a fixture over the standard five-show catalog
    pub fn new() -> Self {
        let shows = FIXTURE_TITLES.iter().map(|t| Show::new(*t)).collect();
        Self::with_catalog(Catalog::new(shows))
    }

    /// Build a fixture over a custom catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            coordinator: QueryCoordinator::new(Arc::new(catalog)),
        }
    }

    pub fn coordinator(&self) -> &QueryCoordinator {
        &self.coordinator
    }

    /// Execute an operation with the given `titleFilter` value
    pub fn execute(&self, operation: &str, title_filter: Option<&str>) -> QueryResponse {
        let request =
            QueryRequest::new(operation).with_title_filter(title_filter.map(String::from));
        self.coordinator.execute(&request)
    }

    /// Execute an operation with the `titleFilter` argument absent entirely
    pub fn execute_without_argument(&self, operation: &str) -> QueryResponse {
        self.coordinator.execute(&QueryRequest::new(operation))
    }

    /// Assert the response is a success and return the matched titles in order
    pub fn assert_titles(&self, response: &QueryResponse) -> Vec<String> {
        assert!(
            response.errors.is_empty(),
            "expected success, got errors: {:?}",
            response.errors
        );
        response
            .data
            .as_ref()
            .expect("success response must carry a data payload")
            .shows
            .iter()
            .map(|s| s.title.clone())
            .collect()
    }

    /// Assert the response was rejected with the given error code
    pub fn assert_rejected(&self, response: &QueryResponse, code: ErrorCode) {
        assert!(
            response.data.is_none(),
            "rejected response must not carry a data payload, got {:?}",
            response.data
        );
        assert!(
            response.errors.iter().any(|e| e.code == code),
            "expected an error with code {:?}, got {:?}",
            code,
            response.errors
        );
    }
}
