//! Workspace audit engine
//!
//! Runs one worker per organization under a bounded pool, collects one
//! [`OrgRecord`] per organization and folds them into a [`RunSummary`].

pub mod coordinator;
mod record;
mod summary;
#[cfg(test)]
pub(crate) mod testing;
pub mod worker;

pub use coordinator::{audit_organizations, CancellationFlag};
pub use record::OrgRecord;
pub use summary::{summarize, RunSummary};
pub use worker::process_organization;
