//! Immutable `{nodes, edges}` snapshots emitted to the rendering boundary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::canonical::canonical_hash_hex;

use super::author::{Author, AuthorId};
use super::edge::RefEdge;

/// One consistent emission of the recomputation pipeline.
///
/// Internally consistent by construction: every edge endpoint is present in
/// the node list emitted alongside it. The rendering collaborator owns all
/// visual diffing against the previous snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Active authors with a resolved birth year, in registry order.
    pub nodes: Vec<Author>,
    /// Threshold-filtered directed edges, in builder enumeration order.
    pub edges: Vec<RefEdge>,
    /// Threshold the edges were filtered against.
    pub threshold: u32,
    /// Canonical content hash of (nodes, edges, threshold).
    pub snapshot_hash: String,
}

impl GraphSnapshot {
    /// Create a snapshot and fingerprint it.
    pub fn new(nodes: Vec<Author>, edges: Vec<RefEdge>, threshold: u32) -> Self {
        let snapshot_hash = canonical_hash_hex(&(&nodes, &edges, threshold));
        Self {
            nodes,
            edges,
            threshold,
            snapshot_hash,
        }
    }

    /// Whether a node with the given id is present.
    pub fn contains_node(&self, id: &AuthorId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    /// Renderer diff keys for all edges, in edge order.
    pub fn edge_keys(&self) -> Vec<String> {
        self.edges.iter().map(|e| e.key()).collect()
    }

    /// Verify the internal-consistency guarantee: every edge references
    /// nodes present in this snapshot and no two edges share a key.
    pub fn is_consistent(&self) -> bool {
        let node_ids: BTreeSet<&AuthorId> = self.nodes.iter().map(|n| &n.id).collect();
        let mut keys: BTreeSet<String> = BTreeSet::new();
        self.edges.iter().all(|e| {
            node_ids.contains(&e.source)
                && node_ids.contains(&e.target)
                && keys.insert(e.key())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pair::CurveDirection;

    fn make_node(id: &str, year: i32) -> Author {
        let mut a = Author::new(AuthorId::new(id), Some(year));
        a.active = true;
        a
    }

    #[test]
    fn test_snapshot_hash_is_deterministic() {
        let nodes = vec![make_node("Plato", -428), make_node("Aristotle", -384)];
        let edges = vec![RefEdge::new(
            AuthorId::new("Plato"),
            AuthorId::new("Aristotle"),
            5,
            CurveDirection::Negative,
            false,
        )];
        let s1 = GraphSnapshot::new(nodes.clone(), edges.clone(), 3);
        let s2 = GraphSnapshot::new(nodes, edges, 3);
        assert_eq!(s1.snapshot_hash, s2.snapshot_hash);
    }

    #[test]
    fn test_snapshot_hash_tracks_threshold() {
        let nodes = vec![make_node("Plato", -428)];
        let s1 = GraphSnapshot::new(nodes.clone(), vec![], 3);
        let s2 = GraphSnapshot::new(nodes, vec![], 4);
        assert_ne!(s1.snapshot_hash, s2.snapshot_hash);
    }

    #[test]
    fn test_consistency_check_catches_dangling_edge() {
        let nodes = vec![make_node("Plato", -428)];
        let edges = vec![RefEdge::new(
            AuthorId::new("Plato"),
            AuthorId::new("Aristotle"),
            5,
            CurveDirection::Negative,
            false,
        )];
        let snapshot = GraphSnapshot::new(nodes, edges, 0);
        assert!(!snapshot.is_consistent());
    }
}
