use serde::Serialize;

use crate::{parsing::Document, parsing::segment, records::Summary};

/// A parsed analysis ready for rendering, with its attribution label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub document: Document,
    /// Generator label, passed through unchanged.
    pub model_used: Option<String>,
}

impl Analysis {
    pub fn from_summary(summary: &Summary) -> Self {
        Self::from_text(&summary.summary_text, summary.model_used.clone())
    }

    pub fn from_text(text: &str, model_used: Option<String>) -> Self {
        Self {
            document: segment(text),
            model_used,
        }
    }
}
