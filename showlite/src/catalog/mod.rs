// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Immutable show catalog
//!
//! The catalog is populated exactly once at startup and then shared read-only
//! for the lifetime of the process. There is no mutation API, so concurrent
//! lookups need no locking.

pub mod error;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use store::{Catalog, Show};
