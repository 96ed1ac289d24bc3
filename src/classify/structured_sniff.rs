use crate::constants::NLU_DATA_MARKER_KEY;
use crate::error::{PartitionError, PartitionResult};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Outcome of looking up the NLU marker key in a parsed document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerLookup {
    Absent,
    Null,
    Present,
}

/// Look up the marker key at the top level of `document`.
/// Documents that are not objects have no keys, so the marker is absent.
pub fn marker_lookup(document: &Value) -> MarkerLookup {
    match document.get(NLU_DATA_MARKER_KEY) {
        None => MarkerLookup::Absent,
        Some(Value::Null) => MarkerLookup::Null,
        Some(_) => MarkerLookup::Present,
    }
}

/// Any non-null marker value, including `false` or `{}`, makes the document NLU data
pub fn is_nlu_document(document: &Value) -> bool {
    match marker_lookup(document) {
        MarkerLookup::Present => true,
        MarkerLookup::Absent | MarkerLookup::Null => false,
    }
}

/// Parse the whole file; a parse failure is an error, never a fallback to core data
pub fn is_nlu_structured_file(path: &Path) -> PartitionResult<bool> {
    let file = File::open(path).map_err(|source| PartitionError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        PartitionError::MalformedStructuredFile {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(is_nlu_document(&document))
}
