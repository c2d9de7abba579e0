//! Input parsing: record model and tolerant field policies.
//!
//! The engine consumes two record sequences. Matrix records are wide rows:
//! the source-author name sits under the empty-string key and every other
//! key is a target-author id mapping to a count. Author metadata records
//! carry `name` plus optional `birth_year` / `death_year` fields.
//!
//! Field tolerance is deliberate: a missing or non-numeric count reads as
//! 0 and a missing year reads as unresolved, so sparse or irregular source
//! data degrades instead of failing. Only structural problems (nothing to
//! parse, no source column) are fatal.

pub mod csv;
pub mod source;

use std::collections::BTreeMap;
use tracing::warn;

use crate::matrix::MatrixStore;
use crate::names::normalize_name;
use crate::registry::AuthorRecord;
use crate::types::AuthorId;

pub use csv::records_from_csv;
pub use source::{load_engine, DataSource, InMemorySource};

#[cfg(feature = "cli")]
pub use source::FileSource;

/// One parsed input row: (key, value) pairs in source column order.
///
/// Order is semantic for matrix records: the first record's keys fix the
/// canonical column order for everything downstream.
pub type RawRecord = Vec<(String, String)>;

/// Fatal load errors. Either data source failing is terminal for the
/// session: no retry, no partial dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// A data source failed to fetch.
    #[error("failed to fetch {dataset} data: {message}")]
    Fetch {
        /// Which dataset failed ("matrix" or "authors").
        dataset: &'static str,
        /// Underlying fetch error.
        message: String,
    },
    /// The matrix input held no records.
    #[error("reference matrix input is empty")]
    EmptyMatrix,
    /// The matrix header has no blank source-name column.
    #[error("reference matrix header is missing the source-name column")]
    MissingSourceColumn,
}

/// Parse a matrix cell: missing or non-numeric reads as 0.
fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Parse an optional year field.
fn parse_year(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|s| s.trim().parse().ok())
}

fn field<'a>(record: &'a [(String, String)], key: &str) -> Option<&'a str> {
    record
        .iter()
        .find(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.as_str())
}

/// Build the matrix store from wide matrix records.
///
/// Columns come from the first record's non-blank keys, in order. Rows
/// whose source cell is blank are skipped with a warning; duplicate
/// sources keep the last row.
pub fn matrix_from_records(records: &[RawRecord]) -> Result<MatrixStore, LoadError> {
    let first = records.first().ok_or(LoadError::EmptyMatrix)?;

    if !first.iter().any(|(k, _)| k.trim().is_empty()) {
        return Err(LoadError::MissingSourceColumn);
    }

    let columns: Vec<AuthorId> = first
        .iter()
        .filter(|(k, _)| !k.trim().is_empty())
        .map(|(k, _)| AuthorId::new(normalize_name(k)))
        .collect();

    let mut rows: BTreeMap<AuthorId, BTreeMap<AuthorId, u32>> = BTreeMap::new();
    for record in records {
        let source = record
            .iter()
            .find(|(k, _)| k.trim().is_empty())
            .map(|(_, v)| normalize_name(v))
            .unwrap_or_default();
        if source.is_empty() {
            warn!("skipping matrix row with no source author");
            continue;
        }

        let row = rows.entry(AuthorId::new(source)).or_default();
        row.clear();
        for (key, value) in record {
            if key.trim().is_empty() {
                continue;
            }
            row.insert(AuthorId::new(normalize_name(key)), parse_count(value));
        }
    }

    Ok(MatrixStore::new(columns, rows))
}

/// Parse author metadata records. Records without a name are skipped.
pub fn authors_from_records(records: &[RawRecord]) -> Vec<AuthorRecord> {
    records
        .iter()
        .filter_map(|record| {
            let name = normalize_name(field(record, "name").unwrap_or_default());
            if name.is_empty() {
                warn!("skipping author record with no name");
                return None;
            }
            Some(AuthorRecord {
                name,
                birth_year: parse_year(field(record, "birth_year")),
                death_year: parse_year(field(record, "death_year")),
            })
        })
        .collect()
}
