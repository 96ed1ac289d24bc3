//! Content-based routing of training files into core or NLU data.
//!
//! The extension only picks the sniffing strategy; the category itself is
//! always decided by what the file contains.

pub mod markup_sniff;
pub mod structured_sniff;

use crate::constants::{MARKUP_EXTENSION, STRUCTURED_EXTENSION};
use crate::error::PartitionResult;
use crate::models::DataCategory;
use std::path::Path;

pub use markup_sniff::{contains_nlu_pattern, is_nlu_markup_file};
pub use structured_sniff::{is_nlu_document, is_nlu_structured_file, marker_lookup, MarkerLookup};

/// Sniffing strategy selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateFormat {
    Structured,
    Markup,
}

impl CandidateFormat {
    /// `None` for files that are neither structured nor markup training data
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy();

        if name.ends_with(STRUCTURED_EXTENSION) {
            Some(CandidateFormat::Structured)
        } else if name.ends_with(MARKUP_EXTENSION) {
            Some(CandidateFormat::Markup)
        } else {
            None
        }
    }
}

/// Classify a candidate file by its content.
///
/// Returns `Ok(None)` when the file has no recognized extension.
pub fn classify_file<P: AsRef<Path>>(path: P) -> PartitionResult<Option<DataCategory>> {
    let path = path.as_ref();

    let is_nlu = match CandidateFormat::from_path(path) {
        Some(CandidateFormat::Structured) => is_nlu_structured_file(path)?,
        Some(CandidateFormat::Markup) => is_nlu_markup_file(path)?,
        None => return Ok(None),
    };

    Ok(Some(if is_nlu {
        DataCategory::NluData
    } else {
        DataCategory::CoreData
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_candidate_format_from_path() {
        assert_eq!(
            CandidateFormat::from_path(Path::new("a/b.json")),
            Some(CandidateFormat::Structured)
        );
        assert_eq!(
            CandidateFormat::from_path(Path::new("a/b.md")),
            Some(CandidateFormat::Markup)
        );
        assert_eq!(CandidateFormat::from_path(Path::new("a/b.yml")), None);
        assert_eq!(CandidateFormat::from_path(Path::new("a/NLU.MD")), None);
        assert_eq!(CandidateFormat::from_path(Path::new("a/nlu.md.bak")), None);
        assert_eq!(CandidateFormat::from_path(Path::new("/")), None);
    }

    #[test]
    fn test_classify_ignores_unrecognized_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("domain.yml");
        fs::write(&file, "## intent:greet").unwrap();

        assert_eq!(classify_file(&file).unwrap(), None);
    }

    #[test]
    fn test_classify_uses_content_not_name() {
        let dir = tempfile::tempdir().unwrap();
        let stories = dir.path().join("nlu.md");
        let nlu = dir.path().join("stories.md");
        fs::write(&stories, "## story: test\n* greet\n  - utter_greet\n").unwrap();
        fs::write(&nlu, "## intent:greet\n- hi\n- hello\n").unwrap();

        assert_eq!(classify_file(&stories).unwrap(), Some(DataCategory::CoreData));
        assert_eq!(classify_file(&nlu).unwrap(), Some(DataCategory::NluData));
    }

    #[test]
    fn test_classify_structured_files() {
        let dir = tempfile::tempdir().unwrap();
        let nlu = dir.path().join("a.json");
        let core = dir.path().join("b.json");
        fs::write(&nlu, r#"{"rasa_nlu_data": {"common_examples": []}}"#).unwrap();
        fs::write(&core, r#"{"stories": []}"#).unwrap();

        assert_eq!(classify_file(&nlu).unwrap(), Some(DataCategory::NluData));
        assert_eq!(classify_file(&core).unwrap(), Some(DataCategory::CoreData));
    }
}
