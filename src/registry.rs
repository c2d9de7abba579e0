//! The author registry.
//!
//! Holds author identity, the birth-year resolution policy, and the mutable
//! active/inactive membership set. Toggling membership only marks state;
//! recomputation is a distinct, explicit step on the engine so batched
//! changes cost a single pass.

use std::collections::BTreeMap;
use tracing::warn;

use crate::matrix::MatrixStore;
use crate::names::normalize_name;
use crate::pipeline::aggregate::RefTotals;
use crate::types::{Author, AuthorId};

/// Assumed productive lifespan when only a death year is known.
const ESTIMATED_LIFESPAN: i32 = 50;

/// Raw author metadata as parsed from the metadata source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    /// Author name, joined (after normalization) against the matrix header.
    pub name: String,
    /// Birth year, if present.
    pub birth_year: Option<i32>,
    /// Death year, if present.
    pub death_year: Option<i32>,
}

/// Apply the birth-year derivation policy to a metadata record.
///
/// Prefer the direct birth-year field; else derive as death year minus an
/// estimated lifespan; else unresolved.
pub fn resolve_birth_year(record: &AuthorRecord) -> Option<i32> {
    record
        .birth_year
        .or_else(|| record.death_year.map(|d| d - ESTIMATED_LIFESPAN))
}

/// Registry of all authors from the matrix header, in input column order.
///
/// That order is load-time fixed and is the enumeration order for node
/// lists and the edge builder's outer loop.
#[derive(Debug, Clone)]
pub struct AuthorRegistry {
    authors: Vec<Author>,
    index: BTreeMap<AuthorId, usize>,
}

impl AuthorRegistry {
    /// Build the registry from the matrix header, loosely joined to the
    /// metadata records by normalized name.
    ///
    /// A header id with no metadata record stays registered with an
    /// unresolved birth year: excluded from plotting, kept in membership
    /// controls. Metadata records that match no header id are ignored.
    pub fn from_matrix(matrix: &MatrixStore, metadata: &[AuthorRecord]) -> Self {
        let by_name: BTreeMap<String, &AuthorRecord> = metadata
            .iter()
            .map(|r| (normalize_name(&r.name), r))
            .collect();

        let mut authors = Vec::with_capacity(matrix.len());
        let mut index = BTreeMap::new();

        for id in matrix.all_sources() {
            let birth_year = match by_name.get(&normalize_name(id.as_str())) {
                Some(record) => {
                    let resolved = resolve_birth_year(record);
                    if resolved.is_none() {
                        warn!(author = %id, "metadata record has no birth or death year");
                    }
                    resolved
                }
                None => {
                    warn!(author = %id, "no metadata record for matrix author");
                    None
                }
            };

            index.insert(id.clone(), authors.len());
            authors.push(Author::new(id.clone(), birth_year));
        }

        Self { authors, index }
    }

    /// Rank all authors by incoming references over the FULL matrix,
    /// descending, ties broken by registry order (stable sort).
    ///
    /// Computed once at load to seed the initial active set; never
    /// recomputed afterwards.
    pub fn rank_by_incoming(&self, matrix: &MatrixStore) -> Vec<AuthorId> {
        let mut ranked: Vec<(&AuthorId, u64)> = self
            .authors
            .iter()
            .map(|a| (&a.id, matrix.global_incoming(&a.id)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().map(|(id, _)| id.clone()).collect()
    }

    /// Activate the top `k` authors by global incoming rank, deactivating
    /// everyone else.
    pub fn seed_active(&mut self, matrix: &MatrixStore, k: usize) {
        let top: Vec<AuthorId> = self.rank_by_incoming(matrix).into_iter().take(k).collect();
        for author in &mut self.authors {
            author.active = false;
        }
        for id in top {
            if let Some(&i) = self.index.get(&id) {
                self.authors[i].active = true;
            }
        }
    }

    /// Mark active membership for one author. Returns false when the id is
    /// not registered. Never recomputes anything.
    pub fn set_active(&mut self, id: &AuthorId, active: bool) -> bool {
        match self.index.get(id) {
            Some(&i) => {
                self.authors[i].active = active;
                true
            }
            None => false,
        }
    }

    /// Whether the author is currently in the active set.
    pub fn is_active(&self, id: &AuthorId) -> bool {
        self.index
            .get(id)
            .map(|&i| self.authors[i].active)
            .unwrap_or(false)
    }

    /// Active author ids, in registry order.
    pub fn active_ids(&self) -> Vec<AuthorId> {
        self.authors
            .iter()
            .filter(|a| a.active)
            .map(|a| a.id.clone())
            .collect()
    }

    /// Active authors with a resolved birth year, in registry order.
    ///
    /// This is the id set the classifier and edge builder operate on:
    /// unresolved authors are never placed and never linked.
    pub fn plottable_ids(&self) -> Vec<AuthorId> {
        self.authors
            .iter()
            .filter(|a| a.active && a.is_resolved())
            .map(|a| a.id.clone())
            .collect()
    }

    /// Look up an author by id.
    pub fn get(&self, id: &AuthorId) -> Option<&Author> {
        self.index.get(id).map(|&i| &self.authors[i])
    }

    /// All authors in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Author> {
        self.authors.iter()
    }

    /// Number of registered authors.
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Overwrite stored aggregates with freshly recomputed totals.
    ///
    /// Authors absent from `totals` (inactive, or active with no active
    /// counterparts that never appeared) read back as zero so stored
    /// values always reflect the current active set.
    pub fn apply_totals(&mut self, totals: &BTreeMap<AuthorId, RefTotals>) {
        for author in &mut self.authors {
            let t = totals.get(&author.id).copied().unwrap_or_default();
            author.outgoing_refs = t.outgoing;
            author.incoming_refs = t.incoming;
        }
    }
}
