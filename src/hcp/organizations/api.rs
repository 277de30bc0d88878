//! Organization API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::Organization;

impl TfeClient {
    /// Get the names of all organizations accessible to the token, following every page
    pub async fn get_organizations(&self) -> Result<Vec<String>> {
        let path = format!("/{}", api::ORGANIZATIONS);
        debug!("Fetching organizations from: {}{}", self.base_url(), path);

        let orgs = self
            .fetch_all_pages::<Organization, ApiListResponse<Organization>>(&path, "organizations")
            .await?;

        debug!("Retrieved {} organizations", orgs.len());
        Ok(orgs.into_iter().map(|org| org.id).collect())
    }
}
