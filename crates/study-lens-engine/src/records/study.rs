use serde::{Deserialize, Serialize};

use super::RecordError;

/// Bibliographic record of a study that an analysis was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Study {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub publication_year: Option<i32>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    /// Comma-separated, as the service stores them.
    #[serde(default)]
    pub keywords: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// One page of the study catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyListResponse {
    pub total: u64,
    pub studies: Vec<Study>,
    pub page: u32,
    pub page_size: u32,
}

impl Study {
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        serde_json::from_str(json).map_err(|source| RecordError::Malformed {
            kind: "study",
            source,
        })
    }
}

impl StudyListResponse {
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        serde_json::from_str(json).map_err(|source| RecordError::Malformed {
            kind: "study list",
            source,
        })
    }

    pub fn find(&self, study_id: u64) -> Option<&Study> {
        self.studies.iter().find(|study| study.id == study_id)
    }
}
