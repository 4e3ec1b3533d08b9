//! GitHub REST payloads, trimmed to the fields the desktop shows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub html_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    pub html_url: String,
    pub fork: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitRef {
    pub sha: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPayload {
    pub commits: Vec<CommitRef>,
}

/// One entry of the public event feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: EventPayload,
}

impl GithubEvent {
    pub fn is_push(&self) -> bool {
        self.kind == "PushEvent"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub name: String,
    pub repos: usize,
}

/// Aggregated numbers for the stats panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubStats {
    pub login: String,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    /// Commits across push events in the recent public feed.
    pub recent_commits: usize,
    pub top_languages: Vec<LanguageCount>,
    pub profile_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_profile_from_api_json() {
        let json = r#"{
            "login": "octocat",
            "id": 1,
            "name": null,
            "public_repos": 8,
            "followers": 100,
            "following": 9,
            "html_url": "https://github.com/octocat"
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.name, None);
        assert_eq!(user.public_repos, 8);
        assert_eq!(user.followers, 100);
    }

    #[test]
    fn repository_ignores_unknown_fields() {
        let json = r#"{
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "description": null,
            "stargazers_count": 80,
            "forks_count": 9,
            "language": "Rust",
            "html_url": "https://github.com/octocat/Hello-World",
            "fork": false,
            "owner": {"login": "octocat"}
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.description, None);
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert!(!repo.fork);
    }

    #[test]
    fn push_event_commits() {
        let json = r#"[
            {"type": "PushEvent", "payload": {"commits": [{"sha": "a"}, {"sha": "b"}]}},
            {"type": "WatchEvent", "payload": {"action": "started"}},
            {"type": "PushEvent", "payload": {}}
        ]"#;
        let events: Vec<GithubEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 3);
        assert!(events[0].is_push());
        assert_eq!(events[0].payload.commits.len(), 2);
        assert!(!events[1].is_push());
        assert!(events[2].payload.commits.is_empty());
    }
}
