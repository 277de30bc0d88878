//! TFE API client module
//!
//! This module provides read-only access to the Terraform Enterprise API:
//! organization listing and per-organization workspace probes.

mod client;
mod credentials;
pub mod organizations;
pub mod traits;
pub mod workspaces;

use serde::Deserialize;

pub use client::TfeClient;
pub use credentials::TokenResolver;
pub use organizations::{resolve_organizations, OrgSource, Organization, ResolvedOrganizations};
pub use traits::{ApiListResponse, PaginatedResponse, WorkspaceApi};
pub use workspaces::{QueryMode, WorkspaceQueryResult, WorkspaceRef};

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "total-count")]
    pub total_count: u32,
}
