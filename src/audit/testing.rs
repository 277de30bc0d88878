//! Stub API for audit engine tests
//!
//! Answers workspace queries from a fixed table and records how many queries
//! ran concurrently, without making network calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::error::{Result, TfeError};
use crate::hcp::{QueryMode, WorkspaceApi, WorkspaceQueryResult};

/// Stub implementation of [`WorkspaceApi`]
///
/// Organizations missing from the table answer `NotFound`.
#[derive(Default)]
pub struct StubApi {
    responses: HashMap<String, WorkspaceQueryResult>,
    organizations: Option<Vec<String>>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    queried: Mutex<Vec<String>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `org` with `result`
    pub fn with(mut self, org: &str, result: WorkspaceQueryResult) -> Self {
        self.responses.insert(org.to_string(), result);
        self
    }

    /// Organizations returned by `list_all_organizations`; unset means failure
    pub fn with_organizations(mut self, orgs: &[&str]) -> Self {
        self.organizations = Some(orgs.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Sleep this long inside every query
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Highest number of queries observed in flight at once
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Organizations queried so far, in start order
    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkspaceApi for StubApi {
    async fn list_all_organizations(&self) -> Result<Vec<String>> {
        self.organizations.clone().ok_or_else(|| TfeError::Api {
            status: 500,
            message: "Failed to fetch organizations".to_string(),
        })
    }

    async fn query_workspaces(&self, org: &str, _mode: QueryMode) -> WorkspaceQueryResult {
        self.queried.lock().unwrap().push(org.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        match self.delay {
            Some(delay) => tokio::time::sleep(delay).await,
            None => tokio::task::yield_now().await,
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.responses
            .get(org)
            .cloned()
            .unwrap_or(WorkspaceQueryResult::NotFound)
    }
}
