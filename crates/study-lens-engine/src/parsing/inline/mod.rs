//! # Inline Parsing
//!
//! Splits the text of one paragraph or one bullet item into styled spans.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (PlainText, Bold)
//! - **`kinds`**: Inline-specific types with owned delimiters (Emphasis)
//! - **`parser`**: `parse_spans()` entry point
//!
//! Parsing is purely positional: a group is bold only when the emphasis pattern
//! matched it. Nothing is recovered or rejected, so every string parses.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_spans;
pub use types::Span;
