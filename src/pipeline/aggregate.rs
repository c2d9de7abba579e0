//! The aggregator: active-set-restricted reference totals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::matrix::MatrixStore;
use crate::types::AuthorId;

/// Outgoing/incoming reference totals for one author, computed over the
/// current active set only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefTotals {
    /// References sent to active authors.
    pub outgoing: u64,
    /// References received from active authors.
    pub incoming: u64,
}

/// Recompute totals for every active author.
///
/// One full O(|active|²) pass: for each active pair (s, t) the cell count
/// feeds `s.outgoing` and `t.incoming`, diagonal included. No incremental
/// delta tracking; active sets are small and correctness wins. An author's
/// totals change when peers are toggled even if its own row and column
/// never do. An active author with no active counterparts keeps an
/// explicit 0/0 entry rather than dropping out.
pub fn recompute(matrix: &MatrixStore, active: &[AuthorId]) -> BTreeMap<AuthorId, RefTotals> {
    let mut totals: BTreeMap<AuthorId, RefTotals> = active
        .iter()
        .map(|id| (id.clone(), RefTotals::default()))
        .collect();

    for source in active {
        for target in active {
            let count = matrix.count_or_zero(source, target) as u64;
            if count == 0 {
                continue;
            }
            if let Some(t) = totals.get_mut(source) {
                t.outgoing += count;
            }
            if let Some(t) = totals.get_mut(target) {
                t.incoming += count;
            }
        }
    }

    totals
}
