//! The reference matrix store.
//!
//! Holds the raw citation counts as a source → (target → count) mapping,
//! immutable after load. Column order from the input header is preserved:
//! it is the canonical enumeration order for everything downstream
//! (registry order, node order, edge builder loops).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::types::AuthorId;

/// Error type for matrix lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// The id was never present in the loaded matrix header. Callers that
    /// aggregate over loosely-joined datasets tolerate this and read 0.
    #[error("unknown author in reference matrix: {0}")]
    UnknownAuthor(AuthorId),
}

/// Immutable square reference matrix with indexed row lookup.
///
/// A missing cell reads as 0. The diagonal is permitted and counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixStore {
    /// Author ids in input column order.
    columns: Vec<AuthorId>,
    /// Every id seen at load: columns plus row sources.
    known: BTreeSet<AuthorId>,
    /// Row per known source id (empty map when the source has no row).
    rows: BTreeMap<AuthorId, BTreeMap<AuthorId, u32>>,
}

impl MatrixStore {
    /// Build a store from the header columns and per-source rows.
    ///
    /// Every id mentioned anywhere gets a row entry so row lookup never
    /// allocates; the matrix is immutable from here on.
    pub fn new(
        columns: Vec<AuthorId>,
        row_data: BTreeMap<AuthorId, BTreeMap<AuthorId, u32>>,
    ) -> Self {
        let mut known: BTreeSet<AuthorId> = columns.iter().cloned().collect();
        known.extend(row_data.keys().cloned());

        let mut rows = row_data;
        for id in &known {
            rows.entry(id.clone()).or_default();
        }

        Self {
            columns,
            known,
            rows,
        }
    }

    /// Reference count from `source` to `target`; 0 for a missing cell.
    ///
    /// Fails with [`MatrixError::UnknownAuthor`] when either id was never in
    /// the loaded header.
    pub fn count_from(&self, source: &AuthorId, target: &AuthorId) -> Result<u32, MatrixError> {
        for id in [source, target] {
            if !self.known.contains(id) {
                return Err(MatrixError::UnknownAuthor(id.clone()));
            }
        }
        Ok(self
            .rows
            .get(source)
            .and_then(|row| row.get(target))
            .copied()
            .unwrap_or(0))
    }

    /// Tolerant count: unknown ids read as 0, as aggregation callers
    /// require for authors present in one dataset but not the other.
    pub fn count_or_zero(&self, source: &AuthorId, target: &AuthorId) -> u32 {
        self.count_from(source, target).unwrap_or(0)
    }

    /// Full row for a source author.
    pub fn row_of(&self, source: &AuthorId) -> Result<&BTreeMap<AuthorId, u32>, MatrixError> {
        self.rows
            .get(source)
            .ok_or_else(|| MatrixError::UnknownAuthor(source.clone()))
    }

    /// All source ids in canonical (input column) order.
    pub fn all_sources(&self) -> &[AuthorId] {
        &self.columns
    }

    /// Whether the id appeared anywhere in the loaded matrix.
    pub fn contains(&self, id: &AuthorId) -> bool {
        self.known.contains(id)
    }

    /// Number of header columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the matrix has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Incoming total for `target` over the FULL, unfiltered matrix.
    ///
    /// Used once, at load time, to seed the initial active set ranking.
    pub fn global_incoming(&self, target: &AuthorId) -> u64 {
        self.rows
            .values()
            .map(|row| row.get(target).copied().unwrap_or(0) as u64)
            .sum()
    }
}
