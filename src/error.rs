use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering, classifying or staging training files.
///
/// Nothing is retried or suppressed inside the crate: every variant carries
/// the path needed to diagnose the failure and is returned to the caller.
#[derive(Debug, Error)]
pub enum PartitionError {
    /// A root directory is missing or not a directory.
    #[error("Training root not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// Directory traversal failed below a root.
    #[error("Failed to traverse {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A candidate file could not be opened or read as UTF-8 text.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A `.json` candidate is not a well-formed document.
    #[error("Malformed structured file {}: {source}", path.display())]
    MalformedStructuredFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The staging directory itself could not be created.
    #[error("Failed to create staging directory in {}: {source}", parent.display())]
    StagingDirectory {
        parent: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copying one file into a staging directory failed.
    #[error("Failed to copy {} to {}: {source}", source_path.display(), destination.display())]
    CopyFailure {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type PartitionResult<T> = Result<T, PartitionError>;

impl PartitionError {
    /// Path the failure is about
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::RootNotFound { path }
            | Self::Traversal { path, .. }
            | Self::Read { path, .. }
            | Self::MalformedStructuredFile { path, .. } => path,
            Self::StagingDirectory { parent, .. } => parent,
            Self::CopyFailure { source_path, .. } => source_path,
        }
    }
}
