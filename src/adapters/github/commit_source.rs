//! GitHub implementation of the CommitActivitySource port.
//!
//! Uses the commit search API: the `total_count` of commits authored by the
//! handle with an `author-date` on the mission date is exactly the
//! cumulative daily total the commit-sync mission consumes. An unset token
//! falls back to unauthenticated access with GitHub's lower rate limits.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::foundation::{DomainError, ErrorCode, GithubHandle, MissionDate};
use crate::ports::CommitActivitySource;

/// Configuration for the GitHub commit source.
#[derive(Debug, Clone)]
pub struct GithubSourceConfig {
    /// Personal access token; optional, raises rate limits when present.
    token: Option<Secret<String>>,
    /// Base URL for the API (default: https://api.github.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GithubSourceConfig {
    /// Creates an unauthenticated configuration with defaults.
    pub fn new() -> Self {
        Self {
            token: None,
            base_url: "https://api.github.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the access token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(Secret::new(token.into()));
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GithubSourceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// GitHub-backed commit activity source.
pub struct GithubCommitSource {
    config: GithubSourceConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct CommitSearchResponse {
    total_count: i64,
}

impl GithubCommitSource {
    /// Creates a new source with the given configuration.
    ///
    /// # Errors
    ///
    /// - `InternalError` if the HTTP client cannot be constructed
    pub fn new(config: GithubSourceConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent("habitpet")
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { config, client })
    }

    fn search_url(&self) -> String {
        format!("{}/search/commits", self.config.base_url)
    }

    fn search_query(handle: &GithubHandle, date: MissionDate) -> String {
        format!("author:{} author-date:{}", handle, date)
    }
}

#[async_trait]
impl CommitActivitySource for GithubCommitSource {
    async fn commits_on(
        &self,
        handle: &GithubHandle,
        date: MissionDate,
    ) -> Result<i64, DomainError> {
        let mut request = self
            .client
            .get(self.search_url())
            .query(&[("q", Self::search_query(handle, date))])
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            DomainError::new(
                ErrorCode::ExternalServiceError,
                format!("GitHub request failed: {}", e),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, handle = %handle, "GitHub commit search failed");
            return Err(DomainError::new(
                ErrorCode::ExternalServiceError,
                format!("GitHub returned {}: {}", status, body),
            ));
        }

        let parsed: CommitSearchResponse = response.json().await.map_err(|e| {
            DomainError::new(
                ErrorCode::ExternalServiceError,
                format!("Failed to parse GitHub response: {}", e),
            )
        })?;

        Ok(parsed.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_scopes_author_and_date() {
        let handle = GithubHandle::new("octocat").unwrap();
        let date = MissionDate::from_ymd(2025, 6, 1).unwrap();
        assert_eq!(
            GithubCommitSource::search_query(&handle, date),
            "author:octocat author-date:2025-06-01"
        );
    }

    #[test]
    fn search_url_uses_configured_base() {
        let config = GithubSourceConfig::new().with_base_url("http://localhost:9999");
        let source = GithubCommitSource::new(config).unwrap();
        assert_eq!(source.search_url(), "http://localhost:9999/search/commits");
    }

    #[test]
    fn config_defaults_to_public_api() {
        let config = GithubSourceConfig::default();
        assert_eq!(config.base_url, "https://api.github.com");
        assert!(config.token.is_none());
    }
}
