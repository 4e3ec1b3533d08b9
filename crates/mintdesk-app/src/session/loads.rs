//! Background loads of the GitHub panels.
//!
//! Loads run as tokio tasks and report back over the [`EventBus`]; the loop
//! applies the results with `replace_content` on its own thread. Every load
//! carries a per-app sequence number and only the newest one may render, so
//! a slow earlier load never overwrites a later one.
//!
//! [`EventBus`]: mintdesk_common::EventBus

use std::io::Write;
use std::sync::Arc;

use mintdesk_common::{AppId, DeskError, Event, ProjectFilter};
use mintdesk_github::GithubService;
use mintdesk_wm::TextSurface;

use super::core::Session;
use crate::panels;

impl<W: Write> Session<W> {
    /// Fetch the body of a remote panel in the background. Offline, the
    /// panel fails immediately.
    pub(super) fn start_load(&mut self, app_id: &AppId) {
        let Some(service) = self.github.clone() else {
            let body = panels::render_failure(app_id, panels::error_text(app_id));
            self.wm.replace_content(app_id, TextSurface::boxed(body));
            tracing::debug!(app = %app_id, "offline, panel not loaded");
            return;
        };

        let sender = self.bus.sender();
        let app_id = app_id.clone();
        let username = self.username.clone();
        let filter = self.filter;
        self.next_load += 1;
        let seq = self.next_load;
        self.loads.insert(app_id.clone(), seq);
        self.pending += 1;
        tracing::debug!(app = %app_id, seq, filter = ?filter, "panel load started");

        tokio::spawn(async move {
            let event = load_panel(&service, app_id, seq, &username, filter).await;
            if sender.send(event).is_err() {
                tracing::debug!("panel load finished after the session ended");
            }
        });
    }

    /// Apply a bus event to the desktop.
    pub(super) fn apply_event(&mut self, event: Event) -> Result<(), DeskError> {
        let Some((app_id, seq)) = event.panel_load() else {
            return Ok(());
        };
        self.pending = self.pending.saturating_sub(1);
        if self.loads.get(app_id) != Some(&seq) {
            tracing::debug!(app = %app_id, seq, "stale panel result dropped");
            return Ok(());
        }
        self.loads.remove(app_id);

        match event {
            Event::PanelReady { app_id, body, .. } => {
                if self.wm.replace_content(&app_id, TextSurface::boxed(body)) {
                    writeln!(self.out, "{app_id}: loaded")?;
                } else {
                    tracing::debug!(app = %app_id, "panel closed before its load finished");
                }
            }
            Event::PanelFailed { app_id, error, .. } => {
                let body = panels::render_failure(&app_id, &error);
                if self.wm.replace_content(&app_id, TextSurface::boxed(body)) {
                    writeln!(self.out, "{app_id}: {error}")?;
                }
            }
            Event::Unknown => {}
        }
        Ok(())
    }
}

async fn load_panel(
    service: &Arc<GithubService>,
    app_id: AppId,
    seq: u64,
    username: &str,
    filter: ProjectFilter,
) -> Event {
    let result = match app_id.as_str() {
        panels::GITHUB_APP => service
            .get_stats()
            .await
            .map(|stats| panels::render_stats(username, &stats)),
        _ => service
            .get_repositories()
            .await
            .map(|repos| panels::render_projects(&repos, filter)),
    };

    match result {
        Ok(body) => Event::PanelReady { app_id, seq, body },
        Err(e) => {
            tracing::warn!(app = %app_id, error = %e, "panel load failed");
            let error = panels::error_text(&app_id).to_string();
            Event::PanelFailed { app_id, seq, error }
        }
    }
}
