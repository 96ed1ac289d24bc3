pub mod data_category;
pub mod staging_report;

pub use data_category::{ClassifiedFiles, DataCategory};
pub use staging_report::{PartitionReport, StagedFile, StagingReport};
