//! Author-name normalization for the metadata join.
//!
//! The matrix header and the author metadata are loosely joined: the same
//! author may be written with stray or doubled whitespace in one source and
//! not the other. Names are normalized to a canonical form before
//! comparison. Identity stays case-sensitive.
//!
//! ```text
//! canonical_name(text) = collapse_whitespace(trim(text))
//! ```

use regex_lite::Regex;
use std::sync::OnceLock;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Normalize an author name to its canonical join key.
///
/// Trims leading/trailing whitespace and collapses internal runs to a
/// single space. Deterministic: same input, same output.
pub fn normalize_name(raw: &str) -> String {
    whitespace_run().replace_all(raw.trim(), " ").into_owned()
}
