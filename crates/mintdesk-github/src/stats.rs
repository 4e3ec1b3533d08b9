//! Aggregations for the stats panel.

use crate::types::{GithubEvent, GithubStats, LanguageCount, Repository, UserProfile};

pub const TOP_LANGUAGES: usize = 5;

/// Commits summed over push events.
pub fn recent_commits(events: &[GithubEvent]) -> usize {
    events
        .iter()
        .filter(|e| e.is_push())
        .map(|e| e.payload.commits.len())
        .sum()
}

/// Languages by number of repositories, most used first. Ties keep the order
/// in which the languages were first seen.
pub fn top_languages(repos: &[Repository], n: usize) -> Vec<LanguageCount> {
    let mut counts: Vec<LanguageCount> = Vec::new();
    for lang in repos.iter().filter_map(|r| r.language.as_deref()) {
        match counts.iter_mut().find(|c| c.name == lang) {
            Some(c) => c.repos += 1,
            None => counts.push(LanguageCount {
                name: lang.to_string(),
                repos: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.repos.cmp(&a.repos));
    counts.truncate(n);
    counts
}

pub fn build_stats(
    user: &UserProfile,
    repos: &[Repository],
    events: &[GithubEvent],
) -> GithubStats {
    GithubStats {
        login: user.login.clone(),
        public_repos: user.public_repos,
        followers: user.followers,
        following: user.following,
        recent_commits: recent_commits(events),
        top_languages: top_languages(repos, TOP_LANGUAGES),
        profile_url: user.html_url.clone(),
    }
}
