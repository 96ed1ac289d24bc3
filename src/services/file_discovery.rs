use crate::classify::classify_file;
use crate::error::PartitionResult;
use crate::models::ClassifiedFiles;
use crate::selection::{ImportPolicy, NoImports};
use crate::utils::list_candidate_files;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration for training file discovery
#[derive(Debug, Clone, Default)]
pub struct FileDiscoveryConfig {
    pub follow_links: bool,
}

/// Pure function picking the roots to scan.
///
/// A non-empty policy replaces the caller's roots with its own training paths.
/// Empty entries are dropped.
pub fn resolve_roots<I, P>(roots: I, policy: &dyn ImportPolicy) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let candidates: Vec<PathBuf> = if policy.is_empty() {
        roots
            .into_iter()
            .map(|root| root.as_ref().to_path_buf())
            .collect()
    } else {
        policy.training_paths()
    };

    candidates
        .into_iter()
        .filter(|root| !root.as_os_str().is_empty())
        .collect()
}

/// Walk every root once and classify each candidate by content
pub fn discover_training_files<I, P>(
    roots: I,
    policy: Option<&dyn ImportPolicy>,
    config: &FileDiscoveryConfig,
) -> PartitionResult<ClassifiedFiles>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let policy: &dyn ImportPolicy = policy.unwrap_or(&NoImports);
    let roots = resolve_roots(roots, policy);

    info!("Scanning {} training roots", roots.len());

    let mut candidates = BTreeSet::new();
    for root in &roots {
        let mut files = list_candidate_files(root, policy, config.follow_links)?;
        info!("Found {} candidate files in: {}", files.len(), root.display());
        candidates.append(&mut files);
    }

    let classified = classify_candidates(candidates)?;

    info!(
        "Training file discovery completed. Core: {}, NLU: {}",
        classified.core.len(),
        classified.nlu.len()
    );

    Ok(classified)
}

/// Classify candidates; the first failing file aborts the whole pass
fn classify_candidates(candidates: BTreeSet<PathBuf>) -> PartitionResult<ClassifiedFiles> {
    let mut classified = ClassifiedFiles::new();

    for path in candidates {
        if let Some(category) = classify_file(&path)? {
            debug!("Classified {} as {}", path.display(), category);
            classified.insert(path, category);
        }
    }

    Ok(classified)
}
