//! Citation Atlas CLI
//!
//! Loads the two CSV datasets, runs one pipeline refresh, and prints the
//! resulting `{nodes, edges}` snapshot as JSON on stdout.
//!
//! ## Configuration
//!
//! Arguments: `citation_atlas <matrix.csv> <authors.csv>`
//!
//! Environment variables:
//! - `THRESHOLD`: Edge threshold override (default: 20, clamped to [0, 40])
//! - `RUST_LOG`: Log level filter (default: info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development
//!   (default: pretty)
//!
//! ## Usage
//!
//! ```bash
//! THRESHOLD=10 cargo run --bin citation_atlas --features cli -- matrix.csv authors.csv
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use citation_atlas::{load_engine, FileSource};

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "citation_atlas=info".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .flatten_event(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let (matrix_path, authors_path) = match (args.next(), args.next()) {
        (Some(m), Some(a)) => (PathBuf::from(m), PathBuf::from(a)),
        _ => {
            eprintln!("usage: citation_atlas <matrix.csv> <authors.csv>");
            return ExitCode::FAILURE;
        }
    };

    let source = FileSource {
        matrix_path,
        authors_path,
    };

    // A failed load is terminal: surface the diagnostic and exit.
    let mut engine = match load_engine(&source).await {
        Ok(engine) => engine,
        Err(e) => {
            error!(%e, "initialization aborted");
            return ExitCode::FAILURE;
        }
    };

    if let Ok(raw) = std::env::var("THRESHOLD") {
        match raw.parse() {
            Ok(t) => engine.set_threshold(t),
            Err(_) => {
                error!(value = %raw, "THRESHOLD must be an integer");
                return ExitCode::FAILURE;
            }
        }
    }

    let snapshot = engine.refresh();
    info!(
        nodes = snapshot.nodes.len(),
        edges = snapshot.edges.len(),
        threshold = snapshot.threshold,
        hash = %snapshot.snapshot_hash,
        "snapshot ready"
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(%e, "snapshot serialization failed");
            ExitCode::FAILURE
        }
    }
}
