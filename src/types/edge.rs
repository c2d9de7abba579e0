//! Directed reference edges.

use serde::{Deserialize, Serialize};

use super::author::AuthorId;
use super::pair::CurveDirection;

/// A directed reference edge between two active, placeable authors.
///
/// Fully recomputed (never incrementally patched) on every refresh.
/// Implements `Ord` for canonical ordering: (source, target).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RefEdge {
    /// Referencing author.
    pub source: AuthorId,
    /// Referenced author.
    pub target: AuthorId,
    /// Reference count for this direction.
    pub weight: u32,
    /// Deterministic curve tie-break.
    pub curve: CurveDirection,
    /// Whether the reverse direction also meets the current threshold.
    pub bidirectional: bool,
}

impl RefEdge {
    /// Create a new edge.
    pub fn new(
        source: AuthorId,
        target: AuthorId,
        weight: u32,
        curve: CurveDirection,
        bidirectional: bool,
    ) -> Self {
        Self {
            source,
            target,
            weight,
            curve,
            bidirectional,
        }
    }

    /// Identity key used by the rendering boundary to diff edge sets
    /// between snapshots.
    pub fn key(&self) -> String {
        format!("{}->{}", self.source, self.target)
    }
}

// Canonical ordering: source, then target.
impl PartialOrd for RefEdge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RefEdge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.source.cmp(&other.source) {
            std::cmp::Ordering::Equal => self.target.cmp(&other.target),
            ord => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_format() {
        let e = RefEdge::new(
            AuthorId::new("Plato"),
            AuthorId::new("Aristotle"),
            5,
            CurveDirection::Negative,
            true,
        );
        assert_eq!(e.key(), "Plato->Aristotle");
    }

    #[test]
    fn test_edge_ordering() {
        let e1 = RefEdge::new(
            AuthorId::new("Aristotle"),
            AuthorId::new("Plato"),
            3,
            CurveDirection::Positive,
            false,
        );
        let e2 = RefEdge::new(
            AuthorId::new("Aristotle"),
            AuthorId::new("Zeno"),
            1,
            CurveDirection::Positive,
            false,
        );
        let e3 = RefEdge::new(
            AuthorId::new("Plato"),
            AuthorId::new("Aristotle"),
            5,
            CurveDirection::Negative,
            false,
        );
        assert!(e1 < e2);
        assert!(e2 < e3);
    }
}
