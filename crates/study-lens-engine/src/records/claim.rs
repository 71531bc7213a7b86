use std::fmt;

use serde::{Deserialize, Serialize};

use super::RecordError;

/// Outcome of checking a claim against the study corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Supported,
    PartiallySupported,
    NotSupported,
    InsufficientEvidence,
}

impl Verdict {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Supported => "Supported",
            Verdict::PartiallySupported => "Partially supported",
            Verdict::NotSupported => "Not supported",
            Verdict::InsufficientEvidence => "Insufficient evidence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Moderate,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::High => "high",
            Confidence::Moderate => "moderate",
            Confidence::Low => "low",
        };
        f.write_str(s)
    }
}

/// Study counts per stance. Not tied to any total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceTally {
    pub supporting: u32,
    pub mixed: u32,
    pub refuting: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStudy {
    pub id: u64,
    pub title: String,
    pub finding: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimValidation {
    pub verdict: Verdict,
    pub confidence: Confidence,
    pub summary: String,
    pub evidence: EvidenceTally,
    pub key_studies: Vec<KeyStudy>,
    pub bottom_line: String,
}

impl ClaimValidation {
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        serde_json::from_str(json).map_err(|source| RecordError::Malformed {
            kind: "claim validation",
            source,
        })
    }
}
