use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Decides which directories take part in training data discovery
pub trait ImportPolicy {
    /// True when no import restriction is configured
    fn is_empty(&self) -> bool;

    /// Authoritative roots to scan; only consulted when the policy is not empty
    fn training_paths(&self) -> Vec<PathBuf>;

    /// Whether files directly inside `directory` should be considered
    fn is_imported(&self, directory: &Path) -> bool;
}

/// Policy without restrictions: caller roots are used and every directory is included
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImports;

impl ImportPolicy for NoImports {
    fn is_empty(&self) -> bool {
        true
    }

    fn training_paths(&self) -> Vec<PathBuf> {
        Vec::new()
    }

    fn is_imported(&self, _directory: &Path) -> bool {
        true
    }
}

/// Policy backed by an ordered list of imported directories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedDirectories {
    imports: Vec<PathBuf>,
}

impl ImportedDirectories {
    /// Build from a list of directories, dropping empty and repeated entries
    pub fn new<I, P>(imports: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut unique: Vec<PathBuf> = Vec::new();
        for import in imports.into_iter().map(Into::into) {
            if import.as_os_str().is_empty() || unique.contains(&import) {
                continue;
            }
            unique.push(import);
        }
        Self { imports: unique }
    }

    /// Load from a JSON document of the form `{"imports": ["a", "b"]}`
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read import file: {:?}", path))?;
        let parsed: ImportedDirectories = serde_json::from_str(&content)
            .with_context(|| format!("Invalid import file: {:?}", path))?;

        Ok(Self::new(parsed.imports))
    }

    pub fn imports(&self) -> &[PathBuf] {
        &self.imports
    }
}

impl ImportPolicy for ImportedDirectories {
    fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    fn training_paths(&self) -> Vec<PathBuf> {
        self.imports.clone()
    }

    fn is_imported(&self, directory: &Path) -> bool {
        if self.is_empty() {
            return true;
        }

        self.imports
            .iter()
            .any(|import| directory.starts_with(import))
    }
}
