pub mod import_policy;

pub use import_policy::{ImportPolicy, ImportedDirectories, NoImports};
