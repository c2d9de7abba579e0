//! Unordered author pairs and the curve-direction tie-break.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::author::AuthorId;

/// Curve direction assigned to a directed edge.
///
/// For a bidirectional pair the two edges must curve opposite ways so they
/// stay visually separated; the assignment is deterministic so re-renders
/// are stable across recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CurveDirection {
    /// +1: the edge whose source is the lexicographically lower id.
    Positive,
    /// −1: the opposite edge of the pair.
    Negative,
}

impl CurveDirection {
    /// Numeric sign consumed by the rendering boundary.
    pub fn sign(&self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

impl fmt::Display for CurveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "+1"),
            Self::Negative => write!(f, "-1"),
        }
    }
}

/// Unordered pair of two distinct author ids.
///
/// Canonicalized on construction so that `low < high` lexicographically:
/// `PairKey::new(a, b)` and `PairKey::new(b, a)` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey {
    low: AuthorId,
    high: AuthorId,
}

impl PairKey {
    /// Create a canonical pair key. The two ids must be distinct; the
    /// classifier only ever builds keys for `s != t`.
    pub fn new(a: AuthorId, b: AuthorId) -> Self {
        debug_assert_ne!(a, b, "PairKey requires two distinct author ids");
        if a < b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The lexicographically lower id.
    pub fn low(&self) -> &AuthorId {
        &self.low
    }

    /// The lexicographically higher id.
    pub fn high(&self) -> &AuthorId {
        &self.high
    }

    /// Curve direction for the edge leaving `source`.
    ///
    /// The lower id curves `Positive`, the higher `Negative`, so the two
    /// edges of a bidirectional pair always diverge.
    pub fn curve_for(&self, source: &AuthorId) -> CurveDirection {
        if source == &self.low {
            CurveDirection::Positive
        } else {
            CurveDirection::Negative
        }
    }
}
