/// Top-level key whose non-null value marks a JSON file as NLU training data
pub const NLU_DATA_MARKER_KEY: &str = "rasa_nlu_data";

/// Structured training data format
pub const STRUCTURED_EXTENSION: &str = ".json";

/// Markup training data format (stories and NLU share it)
pub const MARKUP_EXTENSION: &str = ".md";

/// Section keywords that mark a markup file as NLU training data
pub const NLU_SECTION_KEYWORDS: [&str; 4] = ["intent", "regex", "synonym", "lookup"];

/// Matched against the start of each line, not the whole line
pub const NLU_SECTION_PATTERN: &str = r"^\s*##\s*(intent|regex|synonym|lookup):";

pub const DOMAIN_FILE_NAMES: [&str; 2] = ["domain.yml", "domain.yaml"];

pub const CONFIG_FILE_NAMES: [&str; 2] = ["config.yml", "config.yaml"];

/// Default prefix for freshly created staging directories
pub const STAGING_DIR_PREFIX: &str = "training_data_";

/// Environment variable naming the parent directory for staging directories
pub const STAGING_DIR_ENV: &str = "TRAINING_STAGING_DIR";
