// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog store implementation
//!
//! Holds the ordered, read-only collection of show records. The store is
//! built once by whatever loads the process (the CLI reads a JSON fixture,
//! embedders pass records directly) and handed around as `Arc<Catalog>`.

use super::error::CatalogResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single catalog entry
///
/// Shows are immutable once stored; the catalog never rewrites or removes
/// them during the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub title: String,
}

impl Show {
    /// Create a show from a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Ordered, immutable collection of shows
///
/// Insertion order is preserved and is the order every lookup result comes
/// back in. Construction is single-assignment: shows cannot be added or
/// removed after `new` returns, and concurrent reads need no locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    shows: Vec<Show>,
}

impl Catalog {
    /// Create a catalog from an ordered list of shows
    pub fn new(shows: Vec<Show>) -> Self {
        log::info!("Catalog initialized with {} shows", shows.len());
        Self { shows }
    }

    /// Create an empty catalog
    ///
    /// An empty catalog is valid; every lookup against it returns an empty
    /// result rather than an error.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parse a catalog from its JSON fixture representation
    ///
    /// The fixture format is a JSON array of show objects:
    /// `[{"title": "..."}, ...]`. Array order becomes catalog order.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let shows: Vec<Show> = serde_json::from_str(json)?;
        Ok(Self::new(shows))
    }

    /// Load a catalog from a JSON fixture file
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// All shows, in catalog order
    ///
    /// Deterministic and side-effect-free: returns the same sequence for the
    /// process lifetime.
    pub fn all_shows(&self) -> &[Show] {
        &self.shows
    }

    /// Number of shows in the catalog
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Whether the catalog has no shows
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}
