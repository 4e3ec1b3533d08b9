//! GitHub data service configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Profile whose repositories and stats are shown.
    pub username: String,
    /// Repository names hidden from the projects panel (case-insensitive).
    pub excluded_repos: Vec<String>,
    pub api_base: String,
    /// Maximum number of repository cards.
    pub repo_limit: usize,
    pub cache_ttl_secs: u64,
    /// Retries after the first attempt for transient failures.
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            username: "anjisha616".into(),
            excluded_repos: vec![
                "cafe-clone".into(),
                "netflix-clone".into(),
                "starbucks-clone".into(),
                "anjisha616".into(),
            ],
            api_base: "https://api.github.com".into(),
            repo_limit: 6,
            cache_ttl_secs: 300,
            max_retries: 3,
            initial_backoff_ms: 500,
            max_backoff_ms: 8_000,
            request_timeout_secs: 15,
        }
    }
}
