use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use training_data_discover::{
    discover_training_files, partition_both, partition_both_with_report, partition_for_core,
    partition_for_nlu, FileDiscoveryConfig, ImportPolicy, ImportedDirectories, PartitionConfig,
    StagingConfig,
};

const STORIES: &str = "## story: test\n* greet\n  - utter_greet\n";
const NLU: &str = "## intent:greet\n- hi\n- hello\n";

fn staging_config(parent: &Path) -> PartitionConfig {
    PartitionConfig {
        discovery: FileDiscoveryConfig::default(),
        staging: StagingConfig {
            staging_parent: Some(parent.to_path_buf()),
            ..StagingConfig::default()
        },
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Staged files keyed by their original base name
fn staged_contents(directory: &Path) -> Vec<(String, String)> {
    let mut staged: Vec<(String, String)> = fs::read_dir(directory)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            let name = entry.file_name().to_string_lossy().into_owned();
            let (_, base) = name.split_once('_').unwrap();
            (base.to_string(), fs::read_to_string(entry.path()).unwrap())
        })
        .collect();
    staged.sort();
    staged
}

#[test]
fn test_stories_and_nlu_are_split() {
    let data = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    write(&data.path().join("stories.md"), STORIES);
    write(&data.path().join("nlu.md"), NLU);

    let (core, nlu) = partition_both([data.path()], None, &staging_config(staging.path())).unwrap();

    assert_eq!(
        staged_contents(&core),
        vec![("stories.md".to_string(), STORIES.to_string())]
    );
    assert_eq!(
        staged_contents(&nlu),
        vec![("nlu.md".to_string(), NLU.to_string())]
    );
}

#[test]
fn test_structured_files_are_split_by_marker() {
    let data = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    write(
        &data.path().join("a").join("train.json"),
        r#"{"rasa_nlu_data": {"common_examples": []}}"#,
    );
    write(&data.path().join("b").join("train.json"), r#"{"rasa_nlu_data": null}"#);
    write(&data.path().join("c").join("domain.yml"), "intents: []");

    let report =
        partition_both_with_report([data.path()], None, &staging_config(staging.path())).unwrap();

    assert_eq!(report.nlu.file_count(), 1);
    assert_eq!(report.core.file_count(), 1);
    assert_eq!(
        report.nlu.files[0].source,
        data.path().join("a").join("train.json")
    );
    assert_eq!(
        report.core.files[0].source,
        data.path().join("b").join("train.json")
    );
}

#[test]
fn test_duplicate_base_names_are_all_staged() {
    let data = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    for skill in ["weather", "smalltalk", "booking"] {
        write(&data.path().join(skill).join("nlu.md"), NLU);
    }

    let report =
        partition_both_with_report([data.path()], None, &staging_config(staging.path())).unwrap();

    assert_eq!(report.nlu.file_count(), 3);
    assert_eq!(fs::read_dir(&report.nlu.directory).unwrap().count(), 3);

    let destinations: BTreeSet<&PathBuf> =
        report.nlu.files.iter().map(|f| &f.destination).collect();
    assert_eq!(destinations.len(), 3);
    for staged in &report.nlu.files {
        assert_eq!(fs::read(&staged.source).unwrap(), fs::read(&staged.destination).unwrap());
        assert_eq!(staged.sha256.len(), 64);
    }
}

#[test]
fn test_partition_both_matches_single_partitions() {
    let data = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    write(&data.path().join("stories.md"), STORIES);
    write(&data.path().join("nested").join("nlu.md"), NLU);
    write(&data.path().join("nested").join("more_stories.md"), "## happy path\n");
    write(&data.path().join("nlu.json"), r#"{"rasa_nlu_data": {}}"#);
    let config = staging_config(staging.path());

    let (both_core, both_nlu) = partition_both([data.path()], None, &config).unwrap();
    let core = partition_for_core([data.path()], None, &config).unwrap();
    let nlu = partition_for_nlu([data.path()], None, &config).unwrap();

    assert_eq!(staged_contents(&both_core), staged_contents(&core));
    assert_eq!(staged_contents(&both_nlu), staged_contents(&nlu));
    assert_eq!(staged_contents(&core).len(), 2);
    assert_eq!(staged_contents(&nlu).len(), 2);
}

#[test]
fn test_categories_are_disjoint() {
    let data = TempDir::new().unwrap();
    write(&data.path().join("stories.md"), STORIES);
    write(&data.path().join("nlu.md"), NLU);
    write(&data.path().join("empty.md"), "");
    write(&data.path().join("x").join("nlu.json"), r#"{"rasa_nlu_data": false}"#);

    let classified =
        discover_training_files([data.path()], None, &FileDiscoveryConfig::default()).unwrap();

    assert_eq!(classified.len(), 4);
    assert!(classified.core.is_disjoint(&classified.nlu));
    assert!(classified.core.contains(&data.path().join("empty.md")));
}

#[test]
fn test_import_policy_replaces_caller_roots() {
    let project = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let ignored = project.path().join("ignored");
    let skill = project.path().join("skills").join("weather");
    write(&ignored.join("nlu.md"), NLU);
    write(&skill.join("nlu.md"), NLU);

    let policy = ImportedDirectories::new([skill.clone()]);
    let report = partition_both_with_report(
        [&ignored],
        Some(&policy as &dyn ImportPolicy),
        &staging_config(staging.path()),
    )
    .unwrap();

    assert_eq!(report.nlu.file_count(), 1);
    assert_eq!(report.nlu.files[0].source, skill.join("nlu.md"));
}

#[test]
fn test_excluded_directories_contribute_no_files() {
    let project = TempDir::new().unwrap();
    let root = project.path().join("data");
    write(&root.join("core").join("stories.md"), STORIES);
    write(&root.join("other").join("nlu.md"), NLU);

    struct ExcludeNamed(PathBuf, &'static str);
    impl ImportPolicy for ExcludeNamed {
        fn is_empty(&self) -> bool {
            false
        }
        fn training_paths(&self) -> Vec<PathBuf> {
            vec![self.0.clone()]
        }
        fn is_imported(&self, directory: &Path) -> bool {
            directory.file_name().and_then(|n| n.to_str()) != Some(self.1)
        }
    }
    let policy = ExcludeNamed(root.clone(), "other");

    let classified = discover_training_files(
        Vec::<PathBuf>::new(),
        Some(&policy as &dyn ImportPolicy),
        &FileDiscoveryConfig::default(),
    )
    .unwrap();

    assert_eq!(classified.core.len(), 1);
    assert!(classified.nlu.is_empty());
}

#[test]
fn test_missing_root_is_reported() {
    let project = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let missing = project.path().join("missing");

    let err = partition_both([&missing], None, &staging_config(staging.path())).unwrap_err();
    assert!(err.to_string().contains("missing"));
    assert_eq!(err.path(), missing.as_path());
}

#[test]
fn test_empty_roots_are_skipped() {
    let data = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    write(&data.path().join("nlu.md"), NLU);

    let roots = vec![PathBuf::new(), data.path().to_path_buf()];
    let nlu = partition_for_nlu(&roots, None, &staging_config(staging.path())).unwrap();
    assert_eq!(staged_contents(&nlu).len(), 1);
}
