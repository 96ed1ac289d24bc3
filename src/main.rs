use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;
use training_data_discover::constants::STAGING_DIR_ENV;
use training_data_discover::services::partition_category;
use training_data_discover::{
    partition_both_with_report, AppConfig, DataCategory, FileDiscoveryConfig, ImportPolicy,
    ImportedDirectories, PartitionConfig, PartitionReport, StagingConfig, StagingReport,
};

/// Which staging directories to produce
#[derive(Debug, Clone, Copy)]
enum Mode {
    Both,
    Only(DataCategory),
}

#[derive(Debug, Clone)]
struct RunRequest {
    roots: Vec<PathBuf>,
    policy: ImportedDirectories,
    mode: Mode,
    report_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("Training Data Discover")
        .version("0.1")
        .about("Finds training files, splits them into core and NLU data and stages each set")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set the log level (trace, debug, info, warn, error)")
                .default_value("info"),
        )
        .arg(
            Arg::new("import")
                .long("import")
                .value_name("DIR")
                .help("Imported directory; when given, replaces the positional roots")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("imports-file")
                .long("imports-file")
                .value_name("FILE")
                .help("JSON file listing imported directories: {\"imports\": [..]}"),
        )
        .arg(
            Arg::new("staging-dir")
                .long("staging-dir")
                .value_name("DIR")
                .help("Parent directory for staging directories (default: system temp dir)"),
        )
        .arg(
            Arg::new("follow-links")
                .long("follow-links")
                .help("Follow symbolic links while walking")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_name("MODE")
                .help("Which categories to stage")
                .value_parser(["both", "core", "nlu"])
                .default_value("both"),
        )
        .arg(
            Arg::new("report-json")
                .long("report-json")
                .help("Print the staging report as JSON to stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("roots")
                .value_name("ROOT")
                .help("Directories to scan for training files")
                .num_args(0..),
        )
        .get_matches();

    let log_level = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| "info".to_string());

    // Initialize logging
    initialize_logging(&log_level)?;

    // Load environment variables
    load_environment_variables();

    let config = create_app_config(&matches, log_level);
    let request = create_run_request(&matches)?;

    run_application(config, request).await
}

/// Pure function to create application configuration from CLI arguments
fn create_app_config(matches: &clap::ArgMatches, log_level: String) -> AppConfig {
    let staging_parent = matches
        .get_one::<String>("staging-dir")
        .cloned()
        .or_else(|| env::var(STAGING_DIR_ENV).ok().filter(|dir| !dir.is_empty()))
        .map(PathBuf::from);

    AppConfig {
        partition: PartitionConfig {
            discovery: FileDiscoveryConfig {
                follow_links: matches.get_flag("follow-links"),
            },
            staging: StagingConfig {
                staging_parent,
                ..StagingConfig::default()
            },
        },
        log_level,
    }
}

fn create_run_request(matches: &clap::ArgMatches) -> Result<RunRequest> {
    let roots: Vec<PathBuf> = matches
        .get_many::<String>("roots")
        .map(|values| values.map(PathBuf::from).collect())
        .unwrap_or_default();

    let mut imports: Vec<PathBuf> = matches
        .get_many::<String>("import")
        .map(|values| values.map(PathBuf::from).collect())
        .unwrap_or_default();

    if let Some(file) = matches.get_one::<String>("imports-file") {
        let loaded = ImportedDirectories::from_json_file(file)?;
        imports.extend(loaded.imports().iter().cloned());
    }

    let policy = ImportedDirectories::new(imports);
    if roots.is_empty() && policy.is_empty() {
        anyhow::bail!("No training roots given: pass ROOT directories or --import");
    }
    if !roots.is_empty() && !policy.is_empty() {
        warn!("Imports are configured, ignoring {} positional roots", roots.len());
    }

    let mode = match matches.get_one::<String>("mode").map(String::as_str) {
        Some("core") => Mode::Only(DataCategory::CoreData),
        Some("nlu") => Mode::Only(DataCategory::NluData),
        _ => Mode::Both,
    };

    Ok(RunRequest {
        roots,
        policy,
        mode,
        report_json: matches.get_flag("report-json"),
    })
}

/// Initialize structured logging with tracing
fn initialize_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}

/// Load a `.env` file if one exists
fn load_environment_variables() {
    if dotenvy::dotenv().is_err() {
        info!("No .env file found, using system environment variables");
    }

    if let Ok(dir) = env::var(STAGING_DIR_ENV) {
        info!("Environment variable {} is set: {}", STAGING_DIR_ENV, dir);
    }
}

/// Main application logic; file work runs on a blocking task
async fn run_application(config: AppConfig, request: RunRequest) -> Result<()> {
    info!("Starting training data discovery");
    info!("Configuration: {:#?}", config);

    let report_json = request.report_json;
    let outcome = tokio::task::spawn_blocking(move || run_partition(&config.partition, request))
        .await
        .context("Partition task failed")??;

    match &outcome {
        Outcome::Both(report) => {
            print_staging_report(&report.core);
            print_staging_report(&report.nlu);
        }
        Outcome::Single(report) => print_staging_report(report),
    }

    if report_json {
        let json = match &outcome {
            Outcome::Both(report) => serde_json::to_string_pretty(report)?,
            Outcome::Single(report) => serde_json::to_string_pretty(report)?,
        };
        println!("{json}");
    }

    info!("Training data discovery completed successfully");
    Ok(())
}

enum Outcome {
    Both(PartitionReport),
    Single(StagingReport),
}

fn run_partition(config: &PartitionConfig, request: RunRequest) -> Result<Outcome> {
    let policy: Option<&dyn ImportPolicy> = if request.policy.is_empty() {
        None
    } else {
        Some(&request.policy as &dyn ImportPolicy)
    };

    let outcome = match request.mode {
        Mode::Both => Outcome::Both(partition_both_with_report(&request.roots, policy, config)?),
        Mode::Only(category) => {
            Outcome::Single(partition_category(&request.roots, policy, category, config)?)
        }
    };

    Ok(outcome)
}

/// Print a staging report through the log
fn print_staging_report(report: &StagingReport) {
    info!("=== {} STAGING REPORT ===", report.category.to_string().to_uppercase());
    info!("Directory: {}", report.directory.display());
    info!("Files staged: {}", report.file_count());
    info!("Total bytes: {}", report.total_bytes());
}
