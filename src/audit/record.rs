//! Per-organization audit record

use crate::config::report;
use crate::hcp::{QueryMode, WorkspaceQueryResult};

/// Outcome of auditing one organization
///
/// On success exactly one of `workspace_count` (count mode) or
/// `has_workspaces` (empty-only mode) is set. On failure only `error` is set.
/// `mode` tells the serializer which column set to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgRecord {
    pub org: String,
    pub mode: QueryMode,
    pub workspace_count: Option<u32>,
    pub has_workspaces: Option<bool>,
    pub error: Option<String>,
}

impl OrgRecord {
    /// Build a record from a workspace query result
    pub fn from_result(org: &str, mode: QueryMode, result: WorkspaceQueryResult) -> Self {
        let mut record = Self {
            org: org.to_string(),
            mode,
            workspace_count: None,
            has_workspaces: None,
            error: None,
        };

        match result {
            WorkspaceQueryResult::Count(n) => record.workspace_count = Some(n),
            WorkspaceQueryResult::Exists(b) => record.has_workspaces = Some(b),
            WorkspaceQueryResult::NotFound => {
                record.error = Some(report::NOT_FOUND_MESSAGE.to_string())
            }
            WorkspaceQueryResult::Error(msg) => record.error = Some(msg),
        }

        record
    }

    /// Build a failed record without querying the API
    pub fn failed(org: &str, mode: QueryMode, message: &str) -> Self {
        Self::from_result(org, mode, WorkspaceQueryResult::Error(message.to_string()))
    }

    /// Whether the query for this organization failed
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Whether the organization has any workspace
    ///
    /// Derived from the count in count mode; `None` for failed records.
    pub fn has_any_workspaces(&self) -> Option<bool> {
        if self.is_error() {
            return None;
        }
        self.has_workspaces
            .or_else(|| self.workspace_count.map(|n| n > 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_result_sets_only_count() {
        let record = OrgRecord::from_result("acme", QueryMode::Count, WorkspaceQueryResult::Count(6));
        assert_eq!(record.workspace_count, Some(6));
        assert_eq!(record.has_workspaces, None);
        assert_eq!(record.error, None);
        assert_eq!(record.has_any_workspaces(), Some(true));
    }

    #[test]
    fn test_zero_count_has_no_workspaces() {
        let record =
            OrgRecord::from_result("empty-co", QueryMode::Count, WorkspaceQueryResult::Count(0));
        assert_eq!(record.has_any_workspaces(), Some(false));
    }

    #[test]
    fn test_exists_result_sets_only_flag() {
        let record = OrgRecord::from_result(
            "acme",
            QueryMode::ExistsOnly,
            WorkspaceQueryResult::Exists(true),
        );
        assert_eq!(record.workspace_count, None);
        assert_eq!(record.has_workspaces, Some(true));
        assert_eq!(record.has_any_workspaces(), Some(true));
    }

    #[test]
    fn test_not_found_sets_error_message() {
        let record =
            OrgRecord::from_result("ghost", QueryMode::Count, WorkspaceQueryResult::NotFound);
        assert_eq!(record.error.as_deref(), Some("organization not found"));
        assert_eq!(record.workspace_count, None);
        assert_eq!(record.has_workspaces, None);
        assert_eq!(record.has_any_workspaces(), None);
    }

    #[test]
    fn test_failed_record() {
        let record = OrgRecord::failed("acme", QueryMode::ExistsOnly, "boom");
        assert!(record.is_error());
        assert_eq!(record.error.as_deref(), Some("boom"));
        assert_eq!(record.mode, QueryMode::ExistsOnly);
    }
}
