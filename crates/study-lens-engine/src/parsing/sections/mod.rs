//! # Document Segmentation
//!
//! Splits raw analysis text into sections and subsections by heading markers.
//! Leaf bodies are handed to [`crate::parsing::blocks::parse_blocks`].
//!
//! - **`heading`**: `HeadingLevel` owns the `## ` / `### ` markers and title extraction
//! - **`segment`**: `segment()` entry point, flat/nested decision

pub mod heading;
pub mod segment;

pub use heading::HeadingLevel;
pub use segment::segment;
