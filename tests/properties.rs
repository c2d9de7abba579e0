//! Property tests for the pipeline stages.
//!
//! Random small matrices, membership masks, and thresholds; the invariants
//! hold for all of them.

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

use citation_atlas::{build, classify, recompute, AuthorId, MatrixStore};

const NAMES: [&str; 6] = ["Aristotle", "Cicero", "Epicurus", "Plato", "Seneca", "Zeno"];

fn build_matrix(counts: &[Vec<u32>]) -> MatrixStore {
    let columns: Vec<AuthorId> = NAMES.iter().map(|n| AuthorId::new(*n)).collect();
    let mut rows: BTreeMap<AuthorId, BTreeMap<AuthorId, u32>> = BTreeMap::new();
    for (i, row) in counts.iter().enumerate() {
        for (j, &count) in row.iter().enumerate() {
            rows.entry(columns[i].clone())
                .or_default()
                .insert(columns[j].clone(), count);
        }
    }
    MatrixStore::new(columns, rows)
}

fn included_ids(mask: &[bool]) -> Vec<AuthorId> {
    NAMES
        .iter()
        .enumerate()
        .filter(|(i, _)| mask[*i])
        .map(|(_, n)| AuthorId::new(*n))
        .collect()
}

fn counts_strategy() -> impl Strategy<Value = Vec<Vec<u32>>> {
    prop::collection::vec(prop::collection::vec(0u32..10, NAMES.len()), NAMES.len())
}

fn mask_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), NAMES.len())
}

proptest! {
    #[test]
    fn prop_edges_respect_threshold_and_membership(
        counts in counts_strategy(),
        mask in mask_strategy(),
        threshold in 0u32..12,
    ) {
        let matrix = build_matrix(&counts);
        let ids = included_ids(&mask);
        let pairs = classify(&matrix, &ids, threshold);
        let edges = build(&matrix, &ids, threshold, &pairs);

        for edge in &edges {
            prop_assert!(edge.weight >= threshold);
            prop_assert!(ids.contains(&edge.source));
            prop_assert!(ids.contains(&edge.target));
            prop_assert_ne!(&edge.source, &edge.target);
        }

        let keys: BTreeSet<String> = edges.iter().map(|e| e.key()).collect();
        prop_assert_eq!(keys.len(), edges.len(), "duplicate edge keys");
    }

    #[test]
    fn prop_classify_is_symmetric_and_order_free(
        counts in counts_strategy(),
        mask in mask_strategy(),
        threshold in 0u32..12,
    ) {
        let matrix = build_matrix(&counts);
        let ids = included_ids(&mask);
        let reversed: Vec<AuthorId> = ids.iter().rev().cloned().collect();

        prop_assert_eq!(
            classify(&matrix, &ids, threshold),
            classify(&matrix, &reversed, threshold)
        );
    }

    #[test]
    fn prop_raising_threshold_only_removes_edges(
        counts in counts_strategy(),
        mask in mask_strategy(),
        threshold in 0u32..11,
    ) {
        let matrix = build_matrix(&counts);
        let ids = included_ids(&mask);

        let lower = build(&matrix, &ids, threshold, &classify(&matrix, &ids, threshold));
        let higher = build(&matrix, &ids, threshold + 1, &classify(&matrix, &ids, threshold + 1));

        let lower_keys: BTreeSet<String> = lower.iter().map(|e| e.key()).collect();
        for edge in &higher {
            prop_assert!(lower_keys.contains(&edge.key()));
        }
    }

    #[test]
    fn prop_sent_equals_received_over_any_active_set(
        counts in counts_strategy(),
        mask in mask_strategy(),
    ) {
        let matrix = build_matrix(&counts);
        let ids = included_ids(&mask);
        let totals = recompute(&matrix, &ids);

        let sent: u64 = totals.values().map(|t| t.outgoing).sum();
        let received: u64 = totals.values().map(|t| t.incoming).sum();
        prop_assert_eq!(sent, received);
    }

    #[test]
    fn prop_pipeline_is_idempotent(
        counts in counts_strategy(),
        mask in mask_strategy(),
        threshold in 0u32..12,
    ) {
        let matrix = build_matrix(&counts);
        let ids = included_ids(&mask);

        let first = build(&matrix, &ids, threshold, &classify(&matrix, &ids, threshold));
        let second = build(&matrix, &ids, threshold, &classify(&matrix, &ids, threshold));
        prop_assert_eq!(first, second);

        let t1 = recompute(&matrix, &ids);
        let t2 = recompute(&matrix, &ids);
        prop_assert_eq!(t1, t2);
    }

    #[test]
    fn prop_bidirectional_edges_curve_apart(
        counts in counts_strategy(),
        mask in mask_strategy(),
        threshold in 1u32..12,
    ) {
        let matrix = build_matrix(&counts);
        let ids = included_ids(&mask);
        let pairs = classify(&matrix, &ids, threshold);
        let edges = build(&matrix, &ids, threshold, &pairs);

        for edge in edges.iter().filter(|e| e.bidirectional) {
            let reverse = edges
                .iter()
                .find(|r| r.source == edge.target && r.target == edge.source);
            match reverse {
                Some(r) => prop_assert_eq!(edge.curve.sign() + r.curve.sign(), 0),
                None => prop_assert!(false, "bidirectional edge without its reverse"),
            }
        }
    }
}
