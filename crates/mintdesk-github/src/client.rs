//! GitHub REST client: request building and status handling.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;

use crate::error::GithubError;
use crate::types::{GithubEvent, Repository, UserProfile};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("mintdesk/", env!("CARGO_PKG_VERSION"));
const ERROR_BODY_LIMIT: usize = 200;

/// The three reads the desktop needs. Implemented by [`GithubClient`] and by
/// test doubles.
#[async_trait]
pub trait GithubApi: Send + Sync {
    async fn fetch_user(&self) -> Result<UserProfile, GithubError>;

    /// Up to 100 repositories, most recently updated first.
    async fn fetch_repositories(&self) -> Result<Vec<Repository>, GithubError>;

    /// Up to 100 entries of the public event feed.
    async fn fetch_events(&self) -> Result<Vec<GithubEvent>, GithubError>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
    pub username: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            username: String::new(),
            timeout: Duration::from_secs(15),
        }
    }
}

pub struct GithubClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl GithubClient {
    pub fn new(config: ClientConfig) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| GithubError::Network(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn username(&self) -> &str {
        &self.config.username
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GithubError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GitHub request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let remaining = response
                .headers()
                .get("x-ratelimit-remaining")
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), remaining.as_deref(), &body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GithubError::Parse(e.to_string()))
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn fetch_user(&self) -> Result<UserProfile, GithubError> {
        self.get_json(&format!("users/{}", self.config.username))
            .await
    }

    async fn fetch_repositories(&self) -> Result<Vec<Repository>, GithubError> {
        self.get_json(&format!(
            "users/{}/repos?sort=updated&per_page=100",
            self.config.username
        ))
        .await
    }

    async fn fetch_events(&self) -> Result<Vec<GithubEvent>, GithubError> {
        self.get_json(&format!(
            "users/{}/events/public?per_page=100",
            self.config.username
        ))
        .await
    }
}

/// Map a non-success response to an error. GitHub reports an exhausted quota
/// either as 429 or as 403 with a zero remaining count.
pub(crate) fn status_error(status: u16, ratelimit_remaining: Option<&str>, body: &str) -> GithubError {
    if status == 429 || (status == 403 && ratelimit_remaining == Some("0")) {
        return GithubError::RateLimited;
    }
    GithubError::Status {
        status,
        body: body.chars().take(ERROR_BODY_LIMIT).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> GithubClient {
        GithubClient::new(ClientConfig {
            api_base: base.into(),
            username: "octocat".into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn url_joins_base_and_path() {
        assert_eq!(
            client("https://api.github.com").url("users/octocat"),
            "https://api.github.com/users/octocat"
        );
        assert_eq!(
            client("http://localhost:9000/").url("/users/octocat"),
            "http://localhost:9000/users/octocat"
        );
    }

    #[test]
    fn username_accessor() {
        assert_eq!(client(DEFAULT_API_BASE).username(), "octocat");
    }

    #[test]
    fn rate_limit_detection() {
        assert!(matches!(status_error(429, None, ""), GithubError::RateLimited));
        assert!(matches!(
            status_error(403, Some("0"), "API rate limit exceeded"),
            GithubError::RateLimited
        ));
        assert!(matches!(
            status_error(403, Some("12"), "forbidden"),
            GithubError::Status { status: 403, .. }
        ));
    }

    #[test]
    fn status_error_truncates_body() {
        let body = "x".repeat(500);
        match status_error(500, None, &body) {
            GithubError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body.len(), ERROR_BODY_LIMIT);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn not_found_is_permanent() {
        let err = status_error(404, None, r#"{"message":"Not Found"}"#);
        assert!(!err.is_transient());
    }
}
