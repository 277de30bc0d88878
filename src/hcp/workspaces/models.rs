//! Workspace data models

use clap::ValueEnum;
use serde::Deserialize;

/// Workspace query strategy, fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Deserialize)]
pub enum QueryMode {
    /// Exact workspace total per organization
    #[default]
    #[serde(rename = "count")]
    Count,
    /// Only whether any workspace exists (cheaper per organization)
    #[value(name = "empty-only")]
    #[serde(rename = "empty-only")]
    ExistsOnly,
}

impl QueryMode {
    /// Upper-case label used in the summary banner
    pub fn label(&self) -> &'static str {
        match self {
            QueryMode::Count => "COUNT",
            QueryMode::ExistsOnly => "EMPTY-ONLY",
        }
    }
}

impl std::fmt::Display for QueryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryMode::Count => write!(f, "count"),
            QueryMode::ExistsOnly => write!(f, "empty-only"),
        }
    }
}

/// Outcome of probing one organization's workspaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceQueryResult {
    /// Exact workspace count (count mode)
    Count(u32),
    /// Whether at least one workspace exists (empty-only mode)
    Exists(bool),
    /// The organization does not exist on the platform
    NotFound,
    /// Any other failure, with a human-readable cause
    Error(String),
}

/// Minimal workspace item returned by probe requests
///
/// Probes never read workspace attributes; only the list length matters.
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceRef {
    pub id: String,
}
