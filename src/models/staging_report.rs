use super::DataCategory;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// A single file copied into a staging directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub size_bytes: u64,
    pub sha256: String,
}

/// Outcome of materializing one category into its staging directory
#[derive(Debug, Clone, Serialize)]
pub struct StagingReport {
    pub category: DataCategory,
    pub directory: PathBuf,
    pub created_at: DateTime<Utc>,
    pub files: Vec<StagedFile>,
}

impl StagingReport {
    pub fn new(category: DataCategory, directory: PathBuf) -> Self {
        Self {
            category,
            directory,
            created_at: Utc::now(),
            files: Vec::new(),
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|file| file.size_bytes).sum()
    }
}

/// Both staging directories produced by a single discovery pass
#[derive(Debug, Clone, Serialize)]
pub struct PartitionReport {
    pub core: StagingReport,
    pub nlu: StagingReport,
}

impl PartitionReport {
    /// Staging directories as `(core, nlu)`
    pub fn directories(&self) -> (PathBuf, PathBuf) {
        (self.core.directory.clone(), self.nlu.directory.clone())
    }
}
