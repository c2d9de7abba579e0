//! The recomputation pipeline.
//!
//! Three pure stages run in a fixed order on every refresh:
//!
//! ```text
//! aggregate → classify → build
//! ```
//!
//! Each stage is a free function over (matrix, ids, threshold) with no
//! hidden state, so any stage's output is re-derivable at any time and the
//! whole pipeline is idempotent for unchanged inputs.

pub mod aggregate;
pub mod classify;
pub mod edges;

pub use aggregate::{recompute, RefTotals};
pub use classify::classify;
pub use edges::build;
