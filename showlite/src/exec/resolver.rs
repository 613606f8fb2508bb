// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Filter resolver implementation
//!
//! Scans the shared catalog for shows whose title contains the requested
//! filter as a case-sensitive substring, preserving catalog order. The
//! resolver trusts its callers: constraint checks happen in the validation
//! stage, never here.

use crate::catalog::{Catalog, Show};
use crate::schema::ResolverPolicy;
use std::sync::Arc;

/// Resolver for the show lookup operations
///
/// Holds a read-only handle to the catalog; every method takes `&self`, so a
/// single resolver serves arbitrarily many concurrent lookups.
pub struct FilterResolver {
    catalog: Arc<Catalog>,
}

impl FilterResolver {
    /// Create a resolver over a shared catalog handle
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Lenient lookup: a null filter returns the full catalog
    ///
    /// With `Some(filter)`, returns every show whose title contains `filter`
    /// as a case-sensitive substring, in catalog order. The empty string is
    /// a valid filter that matches every title.
    pub fn lenient_lookup(&self, filter: Option<&str>) -> Vec<Show> {
        match filter {
            None => self.catalog.all_shows().to_vec(),
            Some(filter) => self.scan(filter),
        }
    }

    /// Strict lookup: the filter is required
    ///
    /// Matching semantics are identical to [`lenient_lookup`] once a filter
    /// is in hand. Constraint enforcement (non-null, minimum length) belongs
    /// to the validation stage; a value that reaches this method has already
    /// passed it.
    ///
    /// [`lenient_lookup`]: FilterResolver::lenient_lookup
    pub fn strict_lookup(&self, filter: &str) -> Vec<Show> {
        self.scan(filter)
    }

    /// Dispatch a lookup by resolver policy
    ///
    /// Arguments arrive optional on the wire. A strict resolution reached
    /// with no filter means the validation stage was bypassed; that is a
    /// wiring defect, and this panics rather than substituting a default.
    pub(crate) fn resolve(&self, policy: ResolverPolicy, filter: Option<&str>) -> Vec<Show> {
        match (policy, filter) {
            (ResolverPolicy::Lenient, filter) => self.lenient_lookup(filter),
            (ResolverPolicy::Strict, Some(filter)) => self.strict_lookup(filter),
            (ResolverPolicy::Strict, None) => {
                panic!("strict lookup dispatched without a filter: argument validation was bypassed upstream")
            }
        }
    }

    fn scan(&self, filter: &str) -> Vec<Show> {
        self.catalog
            .all_shows()
            .iter()
            .filter(|show| show.title.contains(filter))
            .cloned()
            .collect()
    }
}
