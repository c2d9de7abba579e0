//! Author identity and node types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an author: the case-sensitive name as it appears
/// in the matrix header.
///
/// `Ord` is byte-wise lexicographic and doubles as the canonical pair
/// ordering policy used for curve-direction tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AuthorId(String);

impl AuthorId {
    /// Create a new AuthorId.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AuthorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AuthorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An author node as emitted to the rendering boundary.
///
/// `outgoing_refs` and `incoming_refs` are aggregate-over-active-subset
/// values: they always reflect the active set of the most recent refresh,
/// never the full matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Unique author name. Immutable once loaded.
    pub id: AuthorId,
    /// Resolved birth year; `None` means the author is never placed and
    /// never linked, but stays available in membership controls.
    pub birth_year: Option<i32>,
    /// References sent to currently-active authors.
    pub outgoing_refs: u64,
    /// References received from currently-active authors.
    pub incoming_refs: u64,
    /// Whether the author is in the active set.
    pub active: bool,
}

impl Author {
    /// Create a new author with zeroed aggregates.
    pub fn new(id: AuthorId, birth_year: Option<i32>) -> Self {
        Self {
            id,
            birth_year,
            outgoing_refs: 0,
            incoming_refs: 0,
            active: false,
        }
    }

    /// Whether the birth year resolved, i.e. the author can be placed.
    pub fn is_resolved(&self) -> bool {
        self.birth_year.is_some()
    }
}

// Identity is the id alone; aggregates are derived state.
impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}
