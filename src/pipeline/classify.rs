//! The pair classifier: bidirectional reference detection.

use std::collections::BTreeSet;

use crate::matrix::MatrixStore;
use crate::types::{AuthorId, PairKey};

/// Find every pair of distinct ids whose mutual reference counts both meet
/// the threshold.
///
/// Re-derivable purely from matrix + ids + threshold; no hidden state, and
/// independent of the aggregator. The canonical [`PairKey`] makes the
/// result symmetric by construction: (a, b) and (b, a) land on one key.
pub fn classify(matrix: &MatrixStore, ids: &[AuthorId], threshold: u32) -> BTreeSet<PairKey> {
    let mut pairs = BTreeSet::new();

    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            let forward = matrix.count_or_zero(a, b);
            let reverse = matrix.count_or_zero(b, a);
            if forward >= threshold && reverse >= threshold {
                pairs.insert(PairKey::new(a.clone(), b.clone()));
            }
        }
    }

    pairs
}
