use std::fs;
use std::path::{Path, PathBuf};

use crate::records::{ClaimValidation, RecordError, Study, StudyListResponse, Summary};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid record in {path}: {source}")]
    Record { path: PathBuf, source: RecordError },
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Invalid summaries directory: {0}")]
    InvalidDir(String),
}

/// Read a file's full text
pub fn read_text(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    log::debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a summary record stored as JSON
pub fn read_summary(path: &Path) -> Result<Summary, IoError> {
    let json = read_text(path)?;
    Summary::from_json(&json).map_err(|source| IoError::Record {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a claim-validation record stored as JSON
pub fn read_claim(path: &Path) -> Result<ClaimValidation, IoError> {
    let json = read_text(path)?;
    ClaimValidation::from_json(&json).map_err(|source| IoError::Record {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a single study record stored as JSON
pub fn read_study(path: &Path) -> Result<Study, IoError> {
    let json = read_text(path)?;
    Study::from_json(&json).map_err(|source| IoError::Record {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a page of the study catalogue stored as JSON
pub fn read_study_list(path: &Path) -> Result<StudyListResponse, IoError> {
    let json = read_text(path)?;
    StudyListResponse::from_json(&json).map_err(|source| IoError::Record {
        path: path.to_path_buf(),
        source,
    })
}

/// List the `*.json` records directly inside `dir`, sorted by path
pub fn scan_summaries(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !dir.is_dir() {
        return Err(IoError::InvalidDir(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let pattern = dir.join("*.json");
    let mut files = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry.map_err(|e| IoError::Io(e.into_error()))?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    log::debug!("Found {} records in {}", files.len(), dir.display());
    Ok(files)
}
