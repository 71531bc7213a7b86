//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! - **`normalize`**: Converts a `Document` to a compact, serializable `Snap` for
//!   `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (order, round-trip of
//!   content, flat/nested exclusivity, span alternation)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
