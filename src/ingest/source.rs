//! Async data sources and the fail-fast concurrent load.
//!
//! The matrix and the author metadata are fetched once, concurrently, at
//! startup. The engine does no computation until both fetches complete; a
//! failure in either aborts initialization entirely. No timeouts, no
//! retries, no cancellation: a failed load is terminal for the session.

use async_trait::async_trait;
use tracing::{error, info};

use super::{authors_from_records, matrix_from_records, records_from_csv, LoadError};
use crate::engine::CitationEngine;

/// A provider of the two raw datasets.
///
/// Implementations must be side-effect free on the engine: they hand back
/// raw text and nothing else.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Error type for fetch operations.
    type Error: std::error::Error + Send + Sync;

    /// Fetch the raw reference-matrix text.
    async fn fetch_matrix(&self) -> Result<String, Self::Error>;

    /// Fetch the raw author-metadata text.
    async fn fetch_authors(&self) -> Result<String, Self::Error>;
}

/// Fetch both datasets concurrently, parse them, and construct the engine.
///
/// The two fetches run in parallel and the first failure wins: parsing
/// never starts on a partial dataset.
pub async fn load_engine<S: DataSource>(source: &S) -> Result<CitationEngine, LoadError> {
    let (matrix_text, authors_text) = tokio::try_join!(
        async {
            source.fetch_matrix().await.map_err(|e| LoadError::Fetch {
                dataset: "matrix",
                message: e.to_string(),
            })
        },
        async {
            source.fetch_authors().await.map_err(|e| LoadError::Fetch {
                dataset: "authors",
                message: e.to_string(),
            })
        },
    )
    .map_err(|e| {
        error!(%e, "dataset load failed");
        e
    })?;

    let matrix = matrix_from_records(&records_from_csv(&matrix_text)).map_err(|e| {
        error!(%e, "matrix parse failed");
        e
    })?;
    let metadata = authors_from_records(&records_from_csv(&authors_text));

    info!(
        authors = matrix.len(),
        metadata_records = metadata.len(),
        "datasets loaded"
    );

    Ok(CitationEngine::new(matrix, &metadata))
}

/// In-memory source for tests and embedding.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    /// Raw matrix CSV text.
    pub matrix_csv: String,
    /// Raw author metadata CSV text.
    pub authors_csv: String,
}

#[async_trait]
impl DataSource for InMemorySource {
    type Error = std::convert::Infallible;

    async fn fetch_matrix(&self) -> Result<String, Self::Error> {
        Ok(self.matrix_csv.clone())
    }

    async fn fetch_authors(&self) -> Result<String, Self::Error> {
        Ok(self.authors_csv.clone())
    }
}

/// Filesystem source for the CLI.
#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct FileSource {
    /// Path to the reference-matrix CSV.
    pub matrix_path: std::path::PathBuf,
    /// Path to the author-metadata CSV.
    pub authors_path: std::path::PathBuf,
}

#[cfg(feature = "cli")]
#[async_trait]
impl DataSource for FileSource {
    type Error = std::io::Error;

    async fn fetch_matrix(&self) -> Result<String, Self::Error> {
        tokio::fs::read_to_string(&self.matrix_path).await
    }

    async fn fetch_authors(&self) -> Result<String, Self::Error> {
        tokio::fs::read_to_string(&self.authors_path).await
    }
}
