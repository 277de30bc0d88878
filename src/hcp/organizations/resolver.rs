//! Organization resolution
//!
//! Decides which organizations a run processes. Sources are mutually
//! exclusive and tried in order:
//!
//! 1. `--orgs`: a file with one name per line, or a comma-separated list
//! 2. `organizations` from the config file
//! 3. every organization the token can see on the platform

use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::future::Future;
use std::path::Path;

use crate::error::{Result, TfeError};

/// Where the resolved organization names came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgSource {
    /// `--orgs` pointed at a file
    File,
    /// `--orgs` was a comma-separated list
    List,
    /// `organizations` key of the config file
    Config,
    /// Listed from the platform
    Platform,
}

impl std::fmt::Display for OrgSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrgSource::File => write!(f, "orgs file"),
            OrgSource::List => write!(f, "orgs list"),
            OrgSource::Config => write!(f, "config file"),
            OrgSource::Platform => write!(f, "platform"),
        }
    }
}

/// Resolved, deduplicated organization names in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOrganizations {
    pub names: Vec<String>,
    pub source: OrgSource,
}

/// Resolve the organizations to audit
///
/// `fetch_all` is only invoked when neither `explicit` nor `configured`
/// provides names. Fails with [`TfeError::Config`] when the final set is empty.
pub async fn resolve_organizations<F, Fut>(
    explicit: Option<&str>,
    configured: &[String],
    fetch_all: F,
) -> Result<ResolvedOrganizations>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<String>>>,
{
    let (raw, source) = match explicit.filter(|arg| !arg.trim().is_empty()) {
        Some(arg) => parse_explicit_orgs(arg)?,
        None if !configured.is_empty() => {
            debug!("Using {} organizations from config file", configured.len());
            (configured.to_vec(), OrgSource::Config)
        }
        None => {
            debug!("No organizations given, fetching all from platform");
            (fetch_all().await?, OrgSource::Platform)
        }
    };

    let names = dedup_first_seen(raw);
    if names.is_empty() {
        return Err(TfeError::Config(format!(
            "no organizations to process (source: {})",
            source
        )));
    }

    info!("Found {} orgs from {}", names.len(), source);
    debug!("Orgs: {:?}", names);

    Ok(ResolvedOrganizations { names, source })
}

/// Parse `--orgs`: a readable file path wins, otherwise a comma-separated list
fn parse_explicit_orgs(arg: &str) -> Result<(Vec<String>, OrgSource)> {
    let path = Path::new(arg);
    if path.is_file() {
        debug!("Reading organizations from file: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            TfeError::Config(format!(
                "Failed to read organizations file {}: {}",
                path.display(),
                e
            ))
        })?;
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        return Ok((names, OrgSource::File));
    }

    let names = arg
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();
    Ok((names, OrgSource::List))
}

/// Drop repeated names, keeping the first occurrence
fn dedup_first_seen(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(names.len());
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
