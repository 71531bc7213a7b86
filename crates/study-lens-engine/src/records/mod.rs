//! Records supplied by the external analysis service.
//!
//! These are consumed as-is. Nothing here recomputes or validates a verdict or
//! an evidence tally; serializing a decoded record gives back the same fields.

pub mod claim;
pub mod study;
pub mod summary;

pub use claim::{ClaimValidation, Confidence, EvidenceTally, KeyStudy, Verdict};
pub use study::{Study, StudyListResponse};
pub use summary::Summary;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Malformed {kind} record: {source}")]
    Malformed {
        kind: &'static str,
        source: serde_json::Error,
    },
}
