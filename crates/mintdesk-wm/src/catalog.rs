//! Static title and icon lookup for desktop apps.

use mintdesk_common::{AppId, Point};

/// Display metadata of an app window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMeta {
    pub title: String,
    pub icon: String,
}

pub const FALLBACK_ICON: &str = "📄";

/// Origin used when neither the caller nor the settings place a window.
pub const DEFAULT_POSITION: Point = Point::new(100.0, 80.0);

const CATALOG: &[(&str, &str, &str)] = &[
    ("about", "About_Me.txt", "📁"),
    ("experience", "Experience.md", "💼"),
    ("skills", "System Monitor - Skills", "⚙️"),
    ("projects", "Files - Projects", "🗂️"),
    ("github", "Terminal - GitHub Stats", "📊"),
    ("contact", "Thunderbird - Contact", "📧"),
    ("resume", "Resume.pdf", "📄"),
];

/// Staggered origins so freshly opened windows do not overlap exactly.
pub const DEFAULT_POSITIONS: &[(&str, Point)] = &[
    ("about", Point::new(100.0, 80.0)),
    ("skills", Point::new(150.0, 100.0)),
    ("projects", Point::new(200.0, 120.0)),
    ("github", Point::new(120.0, 90.0)),
    ("contact", Point::new(180.0, 110.0)),
    ("experience", Point::new(140.0, 95.0)),
];

/// Resolve title and icon. Unknown ids use the id as title.
pub fn resolve_meta(app_id: &AppId) -> AppMeta {
    CATALOG
        .iter()
        .find(|(id, _, _)| *id == app_id.as_str())
        .map(|(_, title, icon)| AppMeta {
            title: (*title).to_string(),
            icon: (*icon).to_string(),
        })
        .unwrap_or_else(|| AppMeta {
            title: app_id.to_string(),
            icon: FALLBACK_ICON.to_string(),
        })
}

/// Ids of every app the launcher knows about.
pub fn known_apps() -> impl Iterator<Item = AppId> {
    CATALOG.iter().map(|(id, _, _)| AppId::from(*id))
}
