//! Per-organization worker

use log::{debug, error, info};

use crate::hcp::{QueryMode, WorkspaceApi};

use super::OrgRecord;

/// Audit a single organization and log its outcome
///
/// Every failure is captured in the returned record; nothing propagates.
pub async fn process_organization<A>(org: &str, mode: QueryMode, api: &A) -> OrgRecord
where
    A: WorkspaceApi + ?Sized,
{
    let record = query_organization(org, mode, api).await;
    log_outcome(&record);
    record
}

/// Query one organization without logging the outcome
pub(crate) async fn query_organization<A>(org: &str, mode: QueryMode, api: &A) -> OrgRecord
where
    A: WorkspaceApi + ?Sized,
{
    debug!("Checking workspaces for org: {}", org);
    OrgRecord::from_result(org, mode, api.query_workspaces(org, mode).await)
}

/// Log one record: info on success, error on failure
pub(crate) fn log_outcome(record: &OrgRecord) {
    if let Some(msg) = &record.error {
        error!("Error checking workspaces for org {}: {}", record.org, msg);
        return;
    }
    match record.has_any_workspaces() {
        Some(true) => match record.workspace_count {
            Some(n) => info!("Organization {} has {} workspaces", record.org, n),
            None => info!("Organization {} has workspaces", record.org),
        },
        _ => info!("Organization {} has no workspaces", record.org),
    }
}
