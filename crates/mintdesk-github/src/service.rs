//! Cached, retrying access to the GitHub data behind the desktop panels.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::cache::{CacheKey, CacheValue, TtlCache};
use crate::client::GithubApi;
use crate::error::GithubError;
use crate::filter::select_showcase;
use crate::retry::{with_retry, RetryPolicy};
use crate::stats::build_stats;
use crate::types::{GithubEvent, GithubStats, Repository, UserProfile};

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Repository names never shown, compared case-insensitively.
    pub excluded_repos: Vec<String>,
    pub repo_limit: usize,
    pub cache_ttl: Duration,
    pub retry: RetryPolicy,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            excluded_repos: Vec::new(),
            repo_limit: 6,
            cache_ttl: Duration::from_secs(300),
            retry: RetryPolicy::default(),
        }
    }
}

pub struct GithubService {
    api: Arc<dyn GithubApi>,
    settings: ServiceSettings,
    cache: RwLock<TtlCache<CacheKey, CacheValue>>,
}

impl GithubService {
    pub fn new(api: Arc<dyn GithubApi>, settings: ServiceSettings) -> Self {
        let cache = RwLock::new(TtlCache::new(settings.cache_ttl));
        Self {
            api,
            settings,
            cache,
        }
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    pub async fn get_user(&self) -> Result<UserProfile, GithubError> {
        if let Some(CacheValue::User(user)) = self.cache.read().await.get(&CacheKey::User) {
            return Ok(user.clone());
        }
        let api = &self.api;
        let user = with_retry(&self.settings.retry, "user", || api.fetch_user()).await?;
        self.store(CacheKey::User, CacheValue::User(user.clone())).await;
        Ok(user)
    }

    /// Every repository the API returned, unfiltered.
    pub async fn get_all_repositories(&self) -> Result<Vec<Repository>, GithubError> {
        if let Some(CacheValue::Repositories(repos)) =
            self.cache.read().await.get(&CacheKey::Repositories)
        {
            return Ok(repos.clone());
        }
        let api = &self.api;
        let repos = with_retry(&self.settings.retry, "repositories", || {
            api.fetch_repositories()
        })
        .await?;
        self.store(
            CacheKey::Repositories,
            CacheValue::Repositories(repos.clone()),
        )
        .await;
        Ok(repos)
    }

    /// Repositories for the projects panel: no forks, no excluded names,
    /// most starred first, at most `repo_limit`.
    pub async fn get_repositories(&self) -> Result<Vec<Repository>, GithubError> {
        let repos = self.get_all_repositories().await?;
        let selected = select_showcase(
            &repos,
            &self.settings.excluded_repos,
            self.settings.repo_limit,
        );
        tracing::debug!(
            total = repos.len(),
            shown = selected.len(),
            "repositories selected"
        );
        Ok(selected)
    }

    pub async fn get_events(&self) -> Result<Vec<GithubEvent>, GithubError> {
        if let Some(CacheValue::Events(events)) = self.cache.read().await.get(&CacheKey::Events) {
            return Ok(events.clone());
        }
        let api = &self.api;
        let events = with_retry(&self.settings.retry, "events", || api.fetch_events()).await?;
        self.store(CacheKey::Events, CacheValue::Events(events.clone())).await;
        Ok(events)
    }

    /// Profile counts, recent commits and top languages. Languages are
    /// counted over all repositories, not just the showcased ones.
    pub async fn get_stats(&self) -> Result<GithubStats, GithubError> {
        let (user, repos, events) = tokio::try_join!(
            self.get_user(),
            self.get_all_repositories(),
            self.get_events()
        )?;
        Ok(build_stats(&user, &repos, &events))
    }

    /// Cache a fresh response, dropping whatever has expired meanwhile.
    async fn store(&self, key: CacheKey, value: CacheValue) {
        let mut cache = self.cache.write().await;
        let purged = cache.purge_expired(Instant::now());
        if purged > 0 {
            tracing::debug!(purged, "expired GitHub responses dropped");
        }
        cache.insert(key, value);
    }

    /// Forget every cached response.
    pub async fn invalidate(&self) {
        self.cache.write().await.clear();
        tracing::debug!("GitHub cache cleared");
    }
}
