//! The edge list builder.

use std::collections::BTreeSet;

use crate::matrix::MatrixStore;
use crate::types::{AuthorId, PairKey, RefEdge};

/// Regenerate the full directed edge list.
///
/// One entry per ordered pair (s, t) with both ids in `ids`, s ≠ t
/// (self-loops need two distinct endpoints to render, so they are excluded
/// outright), and `count(s, t) >= threshold`. Enumeration order is stable:
/// outer loop over `ids` in registry order, inner loop over matrix columns
/// in header order. The output is rebuilt from scratch every call; the
/// rendering collaborator diffs old vs new by [`RefEdge::key`], which is
/// unique across the list.
///
/// Curve direction follows the canonical lexicographic policy for every
/// edge, so the two edges of a bidirectional pair always curve apart.
pub fn build(
    matrix: &MatrixStore,
    ids: &[AuthorId],
    threshold: u32,
    bidirectional: &BTreeSet<PairKey>,
) -> Vec<RefEdge> {
    let included: BTreeSet<&AuthorId> = ids.iter().collect();
    let mut edges = Vec::new();

    for source in ids {
        for target in matrix.all_sources() {
            if source == target || !included.contains(target) {
                continue;
            }
            let weight = matrix.count_or_zero(source, target);
            if weight < threshold {
                continue;
            }
            let pair = PairKey::new(source.clone(), target.clone());
            edges.push(RefEdge::new(
                source.clone(),
                target.clone(),
                weight,
                pair.curve_for(source),
                bidirectional.contains(&pair),
            ));
        }
    }

    edges
}
