pub mod file_copy;
pub mod file_discovery;
pub mod partition;

pub use file_copy::{materialize_files, staged_file_name, StagingConfig};
pub use file_discovery::{discover_training_files, resolve_roots, FileDiscoveryConfig};
pub use partition::{
    partition_both, partition_both_with_report, partition_category, partition_for_core,
    partition_for_nlu, PartitionConfig,
};
