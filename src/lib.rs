pub mod classify;
pub mod constants;
pub mod error;
pub mod models;
pub mod selection;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use classify::{classify_file, CandidateFormat};
pub use error::{PartitionError, PartitionResult};
pub use models::{ClassifiedFiles, DataCategory, PartitionReport, StagedFile, StagingReport};
pub use selection::{ImportPolicy, ImportedDirectories, NoImports};
pub use services::{
    discover_training_files, materialize_files, partition_both, partition_both_with_report,
    partition_for_core, partition_for_nlu, FileDiscoveryConfig, PartitionConfig, StagingConfig,
};
pub use utils::{is_config_file, is_domain_file};

// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub partition: PartitionConfig,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            partition: PartitionConfig::default(),
            log_level: "info".to_string(),
        }
    }
}
