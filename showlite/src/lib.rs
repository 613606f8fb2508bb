// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! ShowLite - A lightweight show-catalog query service
//!
//! ShowLite exposes a fixed, in-memory catalog of show records behind two
//! named query operations with declared argument constraints.
//!
//! # Features
//!
//! - **Immutable Catalog**: populated once at startup, shared read-only,
//!   lock-free concurrent lookups
//! - **Substring Lookup**: case-sensitive title filtering that preserves
//!   catalog order
//! - **Declarative Validation**: per-argument rule tables (nullability,
//!   length bounds) executed ahead of resolver dispatch
//! - **Structured Errors**: rejected requests return a well-formed envelope
//!   identifying the violated constraint, never a crash or a silent default
//!
//! # Usage
//!
//! ```no_run
//! use showlite::{Catalog, QueryCoordinator, QueryRequest, Show};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::new(vec![Show::new("Harbor Town")]));
//! let coordinator = QueryCoordinator::new(catalog);
//!
//! let request = QueryRequest::new("listShows").with_title_filter(Some("Harbor".into()));
//! let response = coordinator.execute(&request);
//! assert!(response.is_success());
//! ```

// Public modules - exposed to external users
pub mod coordinator;

// Internal modules - only visible within the showlite crate
pub(crate) mod catalog;
pub(crate) mod exec;
pub(crate) mod schema;

// Re-export the public API - QueryCoordinator is the main entry point
pub use coordinator::{QueryCoordinator, QueryRequest};

// Catalog types (needed to build and load the startup catalog)
pub use catalog::{Catalog, CatalogError, CatalogResult, Show};

// Execution surface (resolver, errors, response envelope)
pub use exec::{
    ErrorCode, ExecutionError, ExecutionResult, FilterResolver, QueryResponse, ResponseError,
    ShowData,
};

// Schema surface (operation and constraint declarations)
pub use schema::{
    operations, ArgumentCheck, ArgumentSpec, ArgumentValidator, ConstraintViolation,
    OperationRegistry, OperationSpec, ResolverPolicy,
};

/// ShowLite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ShowLite crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
