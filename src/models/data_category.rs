use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// Category a training file is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataCategory {
    /// Dialogue and story data
    CoreData,
    /// Intent and entity training data
    NluData,
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataCategory::CoreData => write!(f, "core"),
            DataCategory::NluData => write!(f, "nlu"),
        }
    }
}

/// Disjoint sets of classified candidate files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedFiles {
    pub core: BTreeSet<PathBuf>,
    pub nlu: BTreeSet<PathBuf>,
}

impl ClassifiedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the set of its category
    pub fn insert(&mut self, path: PathBuf, category: DataCategory) {
        match category {
            DataCategory::CoreData => self.core.insert(path),
            DataCategory::NluData => self.nlu.insert(path),
        };
    }

    pub fn files(&self, category: DataCategory) -> &BTreeSet<PathBuf> {
        match category {
            DataCategory::CoreData => &self.core,
            DataCategory::NluData => &self.nlu,
        }
    }

    pub fn len(&self) -> usize {
        self.core.len() + self.nlu.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty() && self.nlu.is_empty()
    }
}
