use crate::constants::STAGING_DIR_PREFIX;
use crate::error::{PartitionError, PartitionResult};
use crate::models::{DataCategory, StagedFile, StagingReport};
use crate::utils::{copy_file_with_metadata, sha256_file};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// Configuration for staging directory creation
#[derive(Debug, Clone)]
pub struct StagingConfig {
    /// Parent of new staging directories; the system temp dir when unset
    pub staging_parent: Option<PathBuf>,
    pub staging_prefix: String,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            staging_parent: None,
            staging_prefix: STAGING_DIR_PREFIX.to_string(),
        }
    }
}

impl StagingConfig {
    pub fn parent_dir(&self) -> PathBuf {
        self.staging_parent.clone().unwrap_or_else(env::temp_dir)
    }
}

/// Pure function building the collision-safe name of a staged copy
pub fn staged_file_name(source: &Path) -> OsString {
    let mut name = OsString::from(format!("{}_", Uuid::new_v4().simple()));
    name.push(source.file_name().unwrap_or_default());
    name
}

/// Copy every file into a freshly created staging directory.
///
/// The directory is never reused or removed here; the caller owns it.
/// The first failed copy aborts the call and may leave a partially filled directory.
pub fn materialize_files<I, P>(
    files: I,
    category: DataCategory,
    config: &StagingConfig,
) -> PartitionResult<StagingReport>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let directory = create_staging_directory(category, config)?;
    let mut report = StagingReport::new(category, directory);

    for source in files {
        let source = source.as_ref();
        let staged = stage_file(source, &report.directory)?;
        debug!(
            "Staged {} as {}",
            source.display(),
            staged.destination.display()
        );
        report.files.push(staged);
    }

    info!(
        "Staged {} {} files ({} bytes) in {}",
        report.file_count(),
        category,
        report.total_bytes(),
        report.directory.display()
    );

    Ok(report)
}

fn create_staging_directory(
    category: DataCategory,
    config: &StagingConfig,
) -> PartitionResult<PathBuf> {
    let parent = config.parent_dir();
    let prefix = format!("{}{}_", config.staging_prefix, category);

    let directory = tempfile::Builder::new()
        .prefix(&prefix)
        .tempdir_in(&parent)
        .map_err(|source| PartitionError::StagingDirectory {
            parent: parent.clone(),
            source,
        })?;

    Ok(directory.keep())
}

fn stage_file(source: &Path, directory: &Path) -> PartitionResult<StagedFile> {
    let destination = directory.join(staged_file_name(source));

    let size_bytes = copy_file_with_metadata(source, &destination).map_err(|e| {
        PartitionError::CopyFailure {
            source_path: source.to_path_buf(),
            destination: destination.clone(),
            source: e,
        }
    })?;

    let sha256 = sha256_file(&destination).map_err(|e| PartitionError::Read {
        path: destination.clone(),
        source: e,
    })?;

    Ok(StagedFile {
        source: source.to_path_buf(),
        destination,
        size_bytes,
        sha256,
    })
}
