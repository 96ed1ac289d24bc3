use crate::classify::CandidateFormat;
use crate::constants::{CONFIG_FILE_NAMES, DOMAIN_FILE_NAMES};
use crate::error::{PartitionError, PartitionResult};
use crate::selection::ImportPolicy;
use sha2::{Digest, Sha256};
use std::collections::{BTreeSet, HashSet};
use std::fs::{self, File, FileTimes};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Recursively list training data candidates below `root`.
///
/// Every directory reached (the root included) is checked once against the
/// policy. Files directly inside an excluded directory are skipped, but the
/// walk still descends into its subdirectories, which are checked on their own.
pub fn list_candidate_files<P: AsRef<Path>>(
    root: P,
    policy: &dyn ImportPolicy,
    follow_links: bool,
) -> PartitionResult<BTreeSet<PathBuf>> {
    let root = root.as_ref();

    // a root that exists but cannot be listed is as unusable as a missing one
    if !root.is_dir() || fs::read_dir(root).is_err() {
        return Err(PartitionError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut excluded: HashSet<PathBuf> = HashSet::new();
    let mut candidates = BTreeSet::new();

    for entry in WalkDir::new(root).follow_links(follow_links) {
        let entry = entry.map_err(|source| PartitionError::Traversal {
            path: source.path().unwrap_or(root).to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            if !policy.is_imported(path) {
                debug!("Skipping files in excluded directory: {}", path.display());
                excluded.insert(path.to_path_buf());
            }
            continue;
        }

        if !is_regular_file(&entry) || CandidateFormat::from_path(path).is_none() {
            continue;
        }

        let in_excluded_dir = path
            .parent()
            .map(|parent| excluded.contains(parent))
            .unwrap_or(false);
        if in_excluded_dir {
            continue;
        }

        candidates.insert(path.to_path_buf());
    }

    Ok(candidates)
}

/// Unfollowed symlinks still count when they point at a file
fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn file_name_of(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Check whether the path names a domain file (basename only)
pub fn is_domain_file<P: AsRef<Path>>(path: P) -> bool {
    file_name_of(path.as_ref())
        .map(|name| DOMAIN_FILE_NAMES.contains(&name.as_str()))
        .unwrap_or(false)
}

/// Check whether the path names a model configuration file (basename only)
pub fn is_config_file<P: AsRef<Path>>(path: P) -> bool {
    file_name_of(path.as_ref())
        .map(|name| CONFIG_FILE_NAMES.contains(&name.as_str()))
        .unwrap_or(false)
}

/// Copy content, access/modification times and permissions.
/// Returns the number of bytes copied.
///
/// Times are set through the still-writable handle and permissions are
/// applied last, so a read-only source keeps its times on the copy.
pub fn copy_file_with_metadata<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
) -> io::Result<u64> {
    let src_path = source.as_ref();
    let dest_path = destination.as_ref();

    let metadata = fs::metadata(src_path)?;
    let mut reader = File::open(src_path)?;
    let mut writer = File::create(dest_path)?;
    let copied = io::copy(&mut reader, &mut writer)?;

    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    writer.set_times(times)?;
    drop(writer);

    fs::set_permissions(dest_path, metadata.permissions())?;

    Ok(copied)
}

/// SHA-256 of a file as lowercase hex
pub fn sha256_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let mut file = File::open(path.as_ref())?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0; 128 * 1024];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
