//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser calls
//! these; it never hardcodes `**`.

pub mod emphasis;

pub use emphasis::Emphasis;
