pub mod analysis;
pub mod io;
pub mod parsing;
pub mod records;
pub mod render;

// Re-export key types for easier usage
pub use analysis::Analysis;
pub use parsing::{
    Block, Document, Section, SectionBody, Span, Subsection, parse_blocks, parse_spans, segment,
};
pub use records::{ClaimValidation, Study, StudyListResponse, Summary};
