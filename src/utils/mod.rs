pub mod file_operations;

pub use file_operations::{
    copy_file_with_metadata, is_config_file, is_domain_file, list_candidate_files, sha256_file,
};
