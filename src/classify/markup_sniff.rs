use crate::constants::NLU_SECTION_PATTERN;
use crate::error::{PartitionError, PartitionResult};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

static NLU_SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NLU_SECTION_PATTERN).expect("valid NLU section pattern"));

/// Whether the line starts with an NLU section header such as `## intent:greet`.
///
/// Only the start of the line is anchored; anything may follow the colon.
pub fn contains_nlu_pattern(line: &str) -> bool {
    NLU_SECTION_RE.is_match(line)
}

/// Scan a markup file line by line, stopping at the first NLU section header.
/// A file without any header, including an empty one, is core data.
pub fn is_nlu_markup_file(path: &Path) -> PartitionResult<bool> {
    let read_error = |source| PartitionError::Read {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(read_error)?);
    for line in reader.lines() {
        if contains_nlu_pattern(&line.map_err(read_error)?) {
            return Ok(true);
        }
    }

    Ok(false)
}
