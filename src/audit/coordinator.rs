//! Bounded fan-out of workers across organizations

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::report;
use crate::hcp::{QueryMode, WorkspaceApi};

use super::worker::{log_outcome, query_organization};
use super::OrgRecord;

/// Cooperative cancellation shared between the signal handler and the pool
///
/// Checked once before each organization starts; requests already in flight
/// run to completion.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that no further organizations start
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Audit every organization with at most `max_workers` queries in flight
///
/// Organizations are started in the given order and reported as they
/// finish. The returned records are in the given order, one per organization,
/// whatever happened to each query.
pub async fn audit_organizations<A>(
    api: &A,
    organizations: &[String],
    mode: QueryMode,
    max_workers: usize,
    progress: &Option<ProgressBar>,
    cancel: &CancellationFlag,
) -> Vec<OrgRecord>
where
    A: WorkspaceApi + ?Sized,
{
    let total = organizations.len();
    // buffer_unordered(0) would never poll a worker
    let max_workers = max_workers.max(1);

    debug!(
        "Processing {} organizations in {} mode with {} workers",
        total, mode, max_workers
    );

    let units = organizations.iter().enumerate().map(move |(index, org)| async move {
        if cancel.is_cancelled() {
            debug!("Skipping org {} after cancellation", org);
            return (index, OrgRecord::failed(org, mode, report::CANCELLED_MESSAGE));
        }
        (index, query_organization(org, mode, api).await)
    });

    let mut completions = stream::iter(units).buffer_unordered(max_workers);
    let mut results: Vec<(usize, OrgRecord)> = Vec::with_capacity(total);
    let mut completed = 0usize;

    while let Some((index, record)) = completions.next().await {
        completed += 1;
        let line = format!("[{}/{}] Finished processing org {}", completed, total, record.org);
        let report_completion = || {
            if record.error.as_deref() != Some(report::CANCELLED_MESSAGE) {
                log_outcome(&record);
            }
            info!("{}", line);
        };
        match progress {
            Some(pb) => {
                pb.suspend(report_completion);
                pb.inc(1);
                pb.set_message(record.org.clone());
            }
            None => report_completion(),
        }
        results.push((index, record));
    }

    if cancel.is_cancelled() {
        let skipped = results
            .iter()
            .filter(|(_, r)| r.error.as_deref() == Some(report::CANCELLED_MESSAGE))
            .count();
        warn!("Run cancelled; {} organizations were skipped", skipped);
    }

    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, record)| record).collect()
}
