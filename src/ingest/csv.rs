//! Header-keyed CSV text → ordered records.
//!
//! The two input files are simple wide CSVs (no quoting, no embedded
//! commas): a header line followed by one row per record. Each row is
//! zipped against the header into an ordered [`RawRecord`], preserving
//! column order.

use super::RawRecord;

/// Parse CSV text into records keyed by the header line.
///
/// Blank lines are skipped; short rows simply omit the trailing pairs and
/// extra cells are dropped. Returns an empty vector for headerless input;
/// structural validation happens at the record-parsing layer.
pub fn records_from_csv(text: &str) -> Vec<RawRecord> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header: Vec<&str> = match lines.next() {
        Some(line) => line.split(',').map(str::trim).collect(),
        None => return Vec::new(),
    };

    lines
        .map(|line| {
            header
                .iter()
                .zip(line.split(',').map(str::trim))
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .collect()
}
