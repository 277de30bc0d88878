//! Run summary statistics

use crate::error::{Result, TfeError};

use super::OrgRecord;

/// Aggregate counts over all records of a run
///
/// `with_workspaces + without_workspaces + errored == total`, and `total` is
/// never zero: [`summarize`] refuses an empty record set, so percentages are
/// always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    total: usize,
    with_workspaces: usize,
    without_workspaces: usize,
    errored: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn with_workspaces(&self) -> usize {
        self.with_workspaces
    }

    pub fn without_workspaces(&self) -> usize {
        self.without_workspaces
    }

    pub fn errored(&self) -> usize {
        self.errored
    }

    /// `count` as a percentage of all processed organizations
    pub fn percent_of_total(&self, count: usize) -> f64 {
        count as f64 / self.total as f64 * 100.0
    }
}

/// Fold records into a [`RunSummary`]
///
/// A record is errored iff its `error` is set, regardless of mode. Otherwise
/// it has workspaces iff its count is positive or its flag is true.
///
/// Requires at least one record; the organization resolver already rejects
/// empty runs, so an empty slice here is reported as a configuration error.
pub fn summarize(records: &[OrgRecord]) -> Result<RunSummary> {
    if records.is_empty() {
        return Err(TfeError::Config(
            "cannot summarize a run with no organizations".to_string(),
        ));
    }

    let mut summary = RunSummary {
        total: records.len(),
        with_workspaces: 0,
        without_workspaces: 0,
        errored: 0,
    };

    for record in records {
        match record.has_any_workspaces() {
            None => summary.errored += 1,
            Some(true) => summary.with_workspaces += 1,
            Some(false) => summary.without_workspaces += 1,
        }
    }

    Ok(summary)
}
