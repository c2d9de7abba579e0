//! Canonical serialization for snapshot fingerprints.
//!
//! Snapshots and intermediate results are hashed so that idempotence can be
//! checked at the byte level: two refreshes with no state change in between
//! must produce identical fingerprints.
//!
//! ## Determinism Guarantees
//!
//! - Stable field order: struct fields serialize in declaration order
//! - Stable Vec order: vectors serialize in index order
//! - No HashMap in hashed data: use BTreeMap for maps
//!
//! Author names are plain UTF-8 strings, so hashing is stable across
//! platforms without any float normalization.

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Serialize a value to canonical JSON bytes.
pub fn canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("canonical serialization failed")
}

/// Compute the canonical xxh64 hash of a serializable value.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    xxh64(&canonical_bytes(value), 0)
}

/// Compute the canonical hash and format it as a fixed-width hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}
