//! tfe-ws-audit - Audit Terraform Enterprise organizations for workspaces
//!
//! Checks a set of organizations on one TFE instance, either counting their
//! workspaces or only checking whether any exist, and writes one CSV row per
//! organization plus a summary.
//!
//! # Features
//!
//! - Organizations from a file, a comma-separated list, the config file, or
//!   everything visible to the token
//! - Bounded concurrency with results kept in input order
//! - One failing organization never aborts the run
//! - Single-item page probes, so large organizations cost one request
//!
//! # Example
//!
//! ```bash
//! # Count workspaces in every organization
//! tfe-ws-audit -c config.yaml
//!
//! # Only check whether two organizations have workspaces
//! tfe-ws-audit -c config.yaml --orgs acme,globex --mode empty-only
//!
//! # Unattended run with ten workers
//! tfe-ws-audit -c config.yaml --orgs orgs.txt -w 10 --batch -o report.csv
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod logging;
pub mod output;
pub mod settings;
pub mod ui;

pub use audit::{audit_organizations, summarize, CancellationFlag, OrgRecord, RunSummary};
pub use cli::Cli;
pub use error::{Result, TfeError};
pub use hcp::{
    resolve_organizations, QueryMode, TfeClient, TokenResolver, WorkspaceApi,
    WorkspaceQueryResult,
};
pub use settings::{AuditConfig, AuditSettings, ReportTarget};
