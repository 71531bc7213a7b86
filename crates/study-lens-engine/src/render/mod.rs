//! Walkers that turn a parsed [`crate::Analysis`] into output.
//!
//! Renderers only read the tree; every structural decision was made by the parser.
//! Empty plain spans are skipped here.

pub mod html;
pub mod outline;

pub use html::{HtmlOptions, to_html};
pub use outline::{study_lines, to_outline, verdict_lines};
