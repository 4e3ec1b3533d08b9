//! Text rendering of the GitHub-backed panels.

use mintdesk_common::{AppId, ProjectFilter};
use mintdesk_github::{GithubStats, Repository};

pub const PROJECTS_APP: &str = "projects";
pub const GITHUB_APP: &str = "github";

pub const PROJECTS_ERROR: &str = "Failed to load projects. Please try again later.";
pub const STATS_ERROR: &str = "Failed to load GitHub stats.";

const RULE_WIDTH: usize = 47;

pub struct FigmaProject {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

const FIGMA_URL: &str = "https://www.figma.com/files/team/1375711861175707486/project/237173255";

pub const FIGMA_PROJECTS: [FigmaProject; 3] = [
    FigmaProject {
        name: "UI Component Library",
        description: "Comprehensive design system with reusable components",
        url: FIGMA_URL,
    },
    FigmaProject {
        name: "Mobile App Designs",
        description: "Collection of mobile UI/UX designs",
        url: FIGMA_URL,
    },
    FigmaProject {
        name: "Landing Pages",
        description: "Modern landing page concepts",
        url: FIGMA_URL,
    },
];

/// Whether the app's body comes from GitHub.
pub fn is_remote_panel(app_id: &AppId) -> bool {
    matches!(app_id.as_str(), PROJECTS_APP | GITHUB_APP)
}

fn rule() -> String {
    "═".repeat(RULE_WIDTH)
}

fn filter_bar(filter: ProjectFilter) -> String {
    [
        (ProjectFilter::All, "All"),
        (ProjectFilter::Github, "GitHub"),
        (ProjectFilter::Figma, "Figma"),
    ]
    .iter()
    .map(|(f, label)| {
        if *f == filter {
            format!("[{label}]")
        } else {
            format!(" {label} ")
        }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

fn projects_header(filter: ProjectFilter) -> String {
    format!("Projects\n{}\n", filter_bar(filter))
}

pub fn render_repo_card(repo: &Repository) -> String {
    format!(
        "🗂️ {}\n   {}\n   ⭐ {}  🔄 {}  {}\n   {}",
        repo.name,
        repo.description.as_deref().unwrap_or("No description"),
        repo.stargazers_count,
        repo.forks_count,
        repo.language.as_deref().unwrap_or("Code"),
        repo.html_url,
    )
}

pub fn render_figma_card(project: &FigmaProject) -> String {
    format!(
        "🎨 {}\n   {}\n   Figma Design\n   {}",
        project.name, project.description, project.url
    )
}

/// Repository cards followed by the Figma entries, narrowed by `filter`.
pub fn render_projects(repos: &[Repository], filter: ProjectFilter) -> String {
    let mut cards = Vec::new();
    if filter != ProjectFilter::Figma {
        cards.extend(repos.iter().map(render_repo_card));
    }
    if filter != ProjectFilter::Github {
        cards.extend(FIGMA_PROJECTS.iter().map(render_figma_card));
    }
    if cards.is_empty() {
        cards.push("(no projects)".to_string());
    }
    format!("{}\n{}", projects_header(filter), cards.join("\n\n"))
}

pub fn render_projects_loading(filter: ProjectFilter) -> String {
    format!("{}\nLoading projects...", projects_header(filter))
}

fn prompt(username: &str) -> String {
    format!("anjisha@portfolio:~$ github-stats --user {username}")
}

pub fn render_stats_loading(username: &str) -> String {
    format!("{}\nFetching GitHub statistics...", prompt(username))
}

/// Terminal-style statistics block.
pub fn render_stats(username: &str, stats: &GithubStats) -> String {
    let mut lines = vec![
        prompt(username),
        "📊 GITHUB STATISTICS".to_string(),
        rule(),
        format!("Total Repositories:     {}", stats.public_repos),
        format!("Total Commits (recent): {}", stats.recent_commits),
        format!("Followers:              {}", stats.followers),
        format!("Following:              {}", stats.following),
        String::new(),
        "💻 TOP LANGUAGES".to_string(),
        rule(),
    ];
    lines.extend(
        stats
            .top_languages
            .iter()
            .map(|l| format!("{:<20} {} repos", l.name, l.repos)),
    );

    let profile = if stats.profile_url.is_empty() {
        format!("https://github.com/{username}")
    } else {
        stats.profile_url.clone()
    };
    lines.push(String::new());
    lines.push("📈 CONTRIBUTION GRAPH".to_string());
    lines.push(rule());
    lines.push(format!("https://ghchart.rshah.org/{username}"));
    lines.push(String::new());
    lines.push(format!("View Full GitHub Profile → {profile}"));
    lines.join("\n")
}

/// Inline failure body: the panel's error text plus how to retry.
pub fn render_failure(app_id: &AppId, error: &str) -> String {
    format!("{error}\nType `refresh {app_id}` to try again.")
}

/// Error text shown by a panel when its load fails.
pub fn error_text(app_id: &AppId) -> &'static str {
    if app_id.as_str() == GITHUB_APP {
        STATS_ERROR
    } else {
        PROJECTS_ERROR
    }
}
