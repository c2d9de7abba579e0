//! # citation-atlas
//!
//! Deterministic aggregation engine for citation reference graphs.
//!
//! The engine answers one question:
//!
//! > Given a reference matrix and a mutable active set of authors, what are
//! > the nodes and edges the view should show **right now**?
//!
//! ## Core Contract
//!
//! 1. Recompute per-author incoming/outgoing totals over the active set only
//! 2. Detect bidirectional reference pairs for curve-direction tie-breaking
//! 3. Regenerate the filtered, deduplicated edge list
//!
//! all consistently and idempotently on every change to the active set or
//! threshold.
//!
//! ## Architecture
//!
//! ```text
//! UI event → CitationEngine state → aggregate → classify → build
//!                    ↓                                       ↓
//!        MatrixStore + AuthorRegistry            GraphSnapshot {nodes, edges}
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same matrix + same active set + same threshold → identical snapshot hash
//! - Node ordering is canonical (registry order = input column order)
//! - Edge ordering is canonical (registry order × header order)
//! - Pair keys are canonical (lexicographic low/high)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod engine;
pub mod ingest;
pub mod matrix;
pub mod names;
pub mod pipeline;
pub mod registry;
pub mod types;

// Re-exports
pub use canonical::{canonical_bytes, canonical_hash, canonical_hash_hex};
pub use engine::CitationEngine;
pub use ingest::{
    authors_from_records, load_engine, matrix_from_records, records_from_csv, DataSource,
    InMemorySource, LoadError, RawRecord,
};
pub use matrix::{MatrixError, MatrixStore};
pub use names::normalize_name;
pub use pipeline::{build, classify, recompute, RefTotals};
pub use registry::{resolve_birth_year, AuthorRecord, AuthorRegistry};
pub use types::{Author, AuthorId, CurveDirection, GraphSnapshot, PairKey, RefEdge};

#[cfg(feature = "cli")]
pub use ingest::FileSource;

/// Schema version for all engine types.
/// Increment on breaking changes to any schema type.
pub const ENGINE_SCHEMA_VERSION: &str = "1.0.0";

/// Default edge threshold.
pub const DEFAULT_THRESHOLD: u32 = 20;

/// Upper bound of the threshold range; mutations clamp to it.
pub const MAX_THRESHOLD: u32 = 40;

/// Size of the initial active set: the top authors by full-matrix
/// incoming rank at load time.
pub const DEFAULT_ACTIVE_COUNT: usize = 10;
