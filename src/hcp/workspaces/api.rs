//! Workspace API operations

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::{ApiListResponse, WorkspaceApi};
use crate::hcp::TfeClient;

use super::models::{QueryMode, WorkspaceQueryResult, WorkspaceRef};

/// Build the probe path for an organization's workspaces
///
/// Both modes ask for the first page with the smallest page size. Empty-only
/// mode also narrows the sparse fieldset so each item carries almost nothing.
fn build_probe_path(org: &str, mode: QueryMode) -> String {
    let mut path = format!(
        "/{}/{}/{}?page[number]=1&page[size]={}",
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::WORKSPACES,
        api::PROBE_PAGE_SIZE
    );

    if mode == QueryMode::ExistsOnly {
        path.push_str("&fields[workspaces]=name");
    }

    path
}

impl TfeClient {
    /// Probe an organization's workspaces with a single request
    ///
    /// - `Count` reads `meta.pagination.total-count` from the envelope
    /// - `ExistsOnly` only checks whether the first page has any item
    ///
    /// A 404 is reported as [`WorkspaceQueryResult::NotFound`]; every other
    /// failure is returned as an error for the caller to fold.
    pub async fn probe_workspaces(
        &self,
        org: &str,
        mode: QueryMode,
    ) -> Result<WorkspaceQueryResult> {
        let url = format!("{}{}", self.base_url(), build_probe_path(org, mode));
        debug!("Probing workspaces ({} mode) from: {}", mode, url);

        let response = self.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Organization '{}' not found (404)", org);
            return Ok(WorkspaceQueryResult::NotFound);
        }

        let error_context = format!("workspaces for organization '{}'", org);
        let body: ApiListResponse<WorkspaceRef> =
            self.parse_api_response(response, &error_context).await?;

        match mode {
            QueryMode::Count => body
                .meta
                .and_then(|m| m.pagination)
                .map(|p| WorkspaceQueryResult::Count(p.total_count))
                .ok_or_else(|| {
                    TfeError::Json(format!("missing pagination metadata in {}", error_context))
                }),
            QueryMode::ExistsOnly => Ok(WorkspaceQueryResult::Exists(!body.data.is_empty())),
        }
    }
}

#[async_trait]
impl WorkspaceApi for TfeClient {
    async fn list_all_organizations(&self) -> Result<Vec<String>> {
        self.get_organizations().await
    }

    async fn query_workspaces(&self, org: &str, mode: QueryMode) -> WorkspaceQueryResult {
        match self.probe_workspaces(org, mode).await {
            Ok(result) => result,
            Err(e) => WorkspaceQueryResult::Error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn workspaces_page(count: usize, total_count: u32) -> serde_json::Value {
        let data: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "id": format!("ws-{}", i),
                    "type": "workspaces",
                    "attributes": { "name": format!("workspace-{}", i) }
                })
            })
            .collect();
        serde_json::json!({
            "data": data,
            "meta": {
                "pagination": {
                    "current-page": 1,
                    "total-pages": total_count,
                    "total-count": total_count
                }
            }
        })
    }

    #[test]
    fn test_build_probe_path_count() {
        let path = build_probe_path("acme", QueryMode::Count);
        assert_eq!(
            path,
            "/organizations/acme/workspaces?page[number]=1&page[size]=1"
        );
    }

    #[test]
    fn test_build_probe_path_exists_only() {
        let path = build_probe_path("acme", QueryMode::ExistsOnly);
        assert!(path.ends_with("&fields[workspaces]=name"));
        assert!(path.contains("page[size]=1"));
    }

    #[test]
    fn test_build_probe_path_encodes_org() {
        let path = build_probe_path("odd org/name", QueryMode::Count);
        assert!(path.starts_with("/organizations/odd%20org%2Fname/workspaces?"));
    }

    #[tokio::test]
    async fn test_count_mode_reads_total_count() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces"))
            .and(query_param("page[number]", "1"))
            .and(query_param("page[size]", "1"))
            .and(query_param_is_missing("fields[workspaces]"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspaces_page(1, 6)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client.query_workspaces("acme", QueryMode::Count).await;
        assert_eq!(result, WorkspaceQueryResult::Count(6));
    }

    #[tokio::test]
    async fn test_count_mode_zero_workspaces() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/empty-co/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspaces_page(0, 0)))
            .mount(&mock_server)
            .await;

        let result = client.query_workspaces("empty-co", QueryMode::Count).await;
        assert_eq!(result, WorkspaceQueryResult::Count(0));
    }

    #[tokio::test]
    async fn test_count_mode_missing_meta_is_error() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
            )
            .mount(&mock_server)
            .await;

        match client.query_workspaces("acme", QueryMode::Count).await {
            WorkspaceQueryResult::Error(msg) => assert!(msg.contains("pagination")),
            other => panic!("Expected Error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_exists_only_mode_with_workspaces() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces"))
            .and(query_param("page[size]", "1"))
            .and(query_param("fields[workspaces]", "name"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "data": [{ "id": "ws-1" }] })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client.query_workspaces("acme", QueryMode::ExistsOnly).await;
        assert_eq!(result, WorkspaceQueryResult::Exists(true));
    }

    #[tokio::test]
    async fn test_exists_only_mode_without_workspaces() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/empty-co/workspaces"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
            )
            .mount(&mock_server)
            .await;

        let result = client
            .query_workspaces("empty-co", QueryMode::ExistsOnly)
            .await;
        assert_eq!(result, WorkspaceQueryResult::Exists(false));
    }

    #[tokio::test]
    async fn test_not_found_maps_to_not_found() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/ghost/workspaces"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        for mode in [QueryMode::Count, QueryMode::ExistsOnly] {
            let result = client.query_workspaces("ghost", mode).await;
            assert_eq!(result, WorkspaceQueryResult::NotFound);
        }
    }

    #[tokio::test]
    async fn test_server_error_maps_to_error_with_status() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        match client.query_workspaces("acme", QueryMode::Count).await {
            WorkspaceQueryResult::Error(msg) => {
                assert!(msg.contains("503"));
                assert!(msg.contains("acme"));
            }
            other => panic!("Expected Error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_is_error_not_not_found() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        match client.query_workspaces("acme", QueryMode::ExistsOnly).await {
            WorkspaceQueryResult::Error(msg) => assert!(msg.contains("401")),
            other => panic!("Expected Error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        assert!(matches!(
            client.query_workspaces("acme", QueryMode::Count).await,
            WorkspaceQueryResult::Error(_)
        ));
    }

    #[tokio::test]
    async fn test_transport_failure_is_error() {
        // Nothing listens on the discard port
        let client = TfeClient::test_client("http://127.0.0.1:9");
        assert!(matches!(
            client.query_workspaces("acme", QueryMode::Count).await,
            WorkspaceQueryResult::Error(_)
        ));
    }
}
