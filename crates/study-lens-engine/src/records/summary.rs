use serde::{Deserialize, Serialize};

use super::RecordError;

/// A generated analysis for one study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub id: u64,
    pub study_id: u64,
    /// The analysis text, in the heading/bullet/emphasis grammar.
    pub summary_text: String,
    /// Label of the generator that produced the text, shown for attribution.
    #[serde(default)]
    pub model_used: Option<String>,
    /// Creation timestamp exactly as the service sent it.
    pub created_at: String,
}

impl Summary {
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        serde_json::from_str(json).map_err(|source| RecordError::Malformed {
            kind: "summary",
            source,
        })
    }
}
