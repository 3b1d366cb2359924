use std::time::Duration;

use moka::future::Cache;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

const DEFAULT_API_URL: &str = "https://api.github.com";
const CACHE_TTL: Duration = Duration::from_secs(300);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Slice of the GitHub repository object the frontend cares about; the rest
/// of the upstream JSON is dropped on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub fork: bool,
}

/// Proxy for the GitHub repository-listing API.
///
/// Responses are cached per username so a portfolio page being refreshed
/// doesn't hammer the upstream rate limit. The client carries the only
/// explicit timeout in the backend — storage calls rely on the pool.
#[derive(Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    cache: Cache<String, Vec<GithubRepo>>,
    api_url: String,
}

impl GithubClient {
    pub fn new() -> Self {
        Self::with_api_url(
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        )
    }

    pub fn with_api_url(api_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("showfolio-backend")
            .build()
            .expect("reqwest client builds");
        let cache = Cache::builder()
            .time_to_live(CACHE_TTL)
            .max_capacity(1_000)
            .build();

        Self {
            client,
            cache,
            api_url,
        }
    }

    /// List a user's public repositories, newest first as GitHub returns
    /// them. Upstream failures surface as `ServiceError::Upstream`.
    pub async fn list_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<GithubRepo>, ServiceError> {
        if username.trim().is_empty() {
            return Err(ServiceError::BadInput(
                "github username must not be empty".to_string(),
            ));
        }

        if let Some(hit) = self.cache.get(username).await {
            return Ok(hit);
        }

        let url = format!("{}/users/{username}/repos", self.api_url);
        tracing::debug!("fetching github repos from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(format!("github request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Upstream(format!(
                "github responded with {status}"
            )));
        }

        let repos: Vec<GithubRepo> = response
            .json()
            .await
            .map_err(|e| ServiceError::Upstream(format!("github response unreadable: {e}")))?;

        self.cache
            .insert(username.to_string(), repos.clone())
            .await;
        Ok(repos)
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_username_is_rejected_without_a_request() {
        let client = GithubClient::with_api_url("http://127.0.0.1:1".to_string());
        let err = client.list_repositories("  ").await.unwrap_err();
        assert!(matches!(err, ServiceError::BadInput(_)));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_an_upstream_error() {
        // Port 1 refuses connections; no real network traffic leaves the host.
        let client = GithubClient::with_api_url("http://127.0.0.1:1".to_string());
        let err = client.list_repositories("octocat").await.unwrap_err();
        assert!(matches!(err, ServiceError::Upstream(_)));
    }
}
