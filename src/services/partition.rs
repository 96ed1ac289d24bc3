use super::file_copy::{materialize_files, StagingConfig};
use super::file_discovery::{discover_training_files, FileDiscoveryConfig};
use crate::error::PartitionResult;
use crate::models::{DataCategory, PartitionReport, StagingReport};
use crate::selection::ImportPolicy;
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration shared by the partition entry points
#[derive(Debug, Clone, Default)]
pub struct PartitionConfig {
    pub discovery: FileDiscoveryConfig,
    pub staging: StagingConfig,
}

/// Stage all core (story) training files found below `roots`.
/// Returns the new staging directory.
pub fn partition_for_core<I, P>(
    roots: I,
    policy: Option<&dyn ImportPolicy>,
    config: &PartitionConfig,
) -> PartitionResult<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    partition_category(roots, policy, DataCategory::CoreData, config)
        .map(|report| report.directory)
}

/// Stage all NLU training files found below `roots`.
/// Returns the new staging directory.
pub fn partition_for_nlu<I, P>(
    roots: I,
    policy: Option<&dyn ImportPolicy>,
    config: &PartitionConfig,
) -> PartitionResult<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    partition_category(roots, policy, DataCategory::NluData, config)
        .map(|report| report.directory)
}

/// Stage both categories from a single discovery pass.
/// Returns `(core directory, nlu directory)`.
pub fn partition_both<I, P>(
    roots: I,
    policy: Option<&dyn ImportPolicy>,
    config: &PartitionConfig,
) -> PartitionResult<(PathBuf, PathBuf)>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    partition_both_with_report(roots, policy, config).map(|report| report.directories())
}

/// Same as [`partition_both`] but keeps the per-file staging details
pub fn partition_both_with_report<I, P>(
    roots: I,
    policy: Option<&dyn ImportPolicy>,
    config: &PartitionConfig,
) -> PartitionResult<PartitionReport>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let classified = discover_training_files(roots, policy, &config.discovery)?;

    let core = materialize_files(&classified.core, DataCategory::CoreData, &config.staging)?;
    let nlu = materialize_files(&classified.nlu, DataCategory::NluData, &config.staging)?;

    info!(
        "Partition completed. Core: {} -> {}, NLU: {} -> {}",
        core.file_count(),
        core.directory.display(),
        nlu.file_count(),
        nlu.directory.display()
    );

    Ok(PartitionReport { core, nlu })
}

/// Discover, keep one category and stage it
pub fn partition_category<I, P>(
    roots: I,
    policy: Option<&dyn ImportPolicy>,
    category: DataCategory,
    config: &PartitionConfig,
) -> PartitionResult<StagingReport>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let classified = discover_training_files(roots, policy, &config.discovery)?;
    materialize_files(classified.files(category), category, &config.staging)
}
