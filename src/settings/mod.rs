//! Run settings
//!
//! Merges CLI arguments over the configuration file over built-in defaults
//! into one immutable [`AuditSettings`] value.

mod file;

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::defaults;
use crate::hcp::QueryMode;

pub use file::AuditConfig;

/// Effective settings for one audit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSettings {
    pub tfe_url: String,
    pub mode: QueryMode,
    pub max_workers: usize,
    /// Raw `--orgs` value (file path or comma-separated list)
    pub explicit_orgs: Option<String>,
    /// `organizations` from the config file
    pub configured_orgs: Vec<String>,
    pub report: ReportTarget,
    pub batch: bool,
}

/// Where the CSV report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    /// Exactly this file
    File(PathBuf),
    /// A timestamped file in this directory
    Directory(PathBuf),
}

impl AuditSettings {
    /// Merge CLI arguments with a loaded (already validated) config file
    pub fn resolve(cli: &Cli, config: &AuditConfig) -> Self {
        let mode = cli.mode.or(config.mode).unwrap_or_default();
        let max_workers = cli
            .max_workers
            .map(usize::from)
            .or(config.max_workers)
            .unwrap_or(defaults::MAX_WORKERS);

        let report = match &cli.output {
            Some(path) => ReportTarget::File(path.clone()),
            None => ReportTarget::Directory(cli.output_dir.clone()),
        };

        Self {
            tfe_url: config.tfe_url().to_string(),
            mode,
            max_workers,
            explicit_orgs: cli.orgs.clone(),
            configured_orgs: config.organizations().to_vec(),
            report,
            batch: cli.batch,
        }
    }
}
