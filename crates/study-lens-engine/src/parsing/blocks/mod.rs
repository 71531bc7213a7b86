//! # Block Parsing
//!
//! Segments a leaf body (a flat section's content or a subsection's content)
//! into paragraphs and bullet lists.
//!
//! ## Modules
//!
//! - **`types`**: `Block` enum (Paragraph, BulletList)
//! - **`kinds`**: Block-specific types with owned delimiters (Paragraph, BulletList)
//! - **`parser`**: `parse_blocks()` entry point
//!
//! ## Key Invariants
//!
//! - Blocks appear in source order
//! - Lists never nest; a `- ` line inside an item starts the next item
//! - Every paragraph and every item carries at least one span

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_blocks;
pub use types::Block;
