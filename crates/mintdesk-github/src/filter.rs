//! Repository selection for the projects panel.

use crate::types::Repository;

fn is_excluded(name: &str, excluded: &[String]) -> bool {
    excluded.iter().any(|e| e.eq_ignore_ascii_case(name))
}

/// Drop forks and excluded names, order by stars (stable), keep `limit`.
pub fn select_showcase(repos: &[Repository], excluded: &[String], limit: usize) -> Vec<Repository> {
    let mut selected: Vec<Repository> = repos
        .iter()
        .filter(|r| !r.fork && !is_excluded(&r.name, excluded))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    selected.truncate(limit);
    selected
}
