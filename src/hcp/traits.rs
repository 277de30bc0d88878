//! Common traits for TFE API access

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::hcp::workspaces::{QueryMode, WorkspaceQueryResult};
use crate::hcp::PaginationMeta;

/// Read-only API surface the audit engine depends on
///
/// Implemented by [`crate::hcp::TfeClient`]; tests substitute stubs so the
/// worker and coordinator can run without a server. Implementations must be
/// shareable across concurrent workers without mutation.
#[async_trait]
pub trait WorkspaceApi: Send + Sync {
    /// List every organization name visible to the token, following pagination
    async fn list_all_organizations(&self) -> Result<Vec<String>>;

    /// Probe one organization's workspaces using the mode's query strategy
    ///
    /// Never fails: transport and HTTP failures are folded into
    /// [`WorkspaceQueryResult::NotFound`] or [`WorkspaceQueryResult::Error`].
    async fn query_workspaces(&self, org: &str, mode: QueryMode) -> WorkspaceQueryResult;
}

/// Trait for API responses that contain paginated data
///
/// Implement this trait for any `XResponse` struct to enable use with
/// `TfeClient::fetch_all_pages()` helper.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;
}

/// Generic API list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }
}
