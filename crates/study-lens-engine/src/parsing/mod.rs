//! # Analysis Parsing
//!
//! Two stages, both pure:
//!
//! 1. **Segmentation** (`sections`): raw text is split on `## ` and `### `
//!    heading markers into a tree of sections and subsections
//! 2. **Block & span parsing** (`blocks`, `inline`): every leaf body is split into
//!    paragraphs and bullet lists, and each of those into plain and bold spans
//!
//! Every stage is total. There is no error type; malformed markup degrades to
//! plain text.

pub mod blocks;
pub mod document;
pub mod inline;
pub mod sections;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use blocks::{Block, parse_blocks};
pub use document::{Document, Section, SectionBody, Subsection};
pub use inline::{Span, parse_spans};
pub use sections::segment;
