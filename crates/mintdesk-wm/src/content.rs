//! Content surfaces and the provider seam.

use std::collections::HashMap;

use mintdesk_common::AppId;

/// Body shown when the provider has nothing for an app.
pub const CONTENT_NOT_FOUND: &str = "Content not found";

/// A window body. Owned by its window record and dropped with it.
pub trait Surface {
    fn render(&self) -> String;
}

/// Supplies the initial body for a window.
pub trait ContentProvider {
    fn content(&self, app_id: &AppId) -> Option<Box<dyn Surface>>;
}

/// Plain text surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSurface {
    text: String,
}

impl TextSurface {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn boxed(text: impl Into<String>) -> Box<dyn Surface> {
        Box::new(Self::new(text))
    }

    pub fn not_found() -> Self {
        Self::new(CONTENT_NOT_FOUND)
    }
}

impl Surface for TextSurface {
    fn render(&self) -> String {
        self.text.clone()
    }
}

/// Provider backed by a fixed map of texts.
#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    pages: HashMap<AppId, String>,
}

impl StaticContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, app_id: impl Into<AppId>, text: impl Into<String>) -> Self {
        self.pages.insert(app_id.into(), text.into());
        self
    }
}

impl ContentProvider for StaticContent {
    fn content(&self, app_id: &AppId) -> Option<Box<dyn Surface>> {
        self.pages.get(app_id).map(|text| TextSurface::boxed(text.clone()))
    }
}

/// Provider with no content at all; every window shows the placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContent;

impl ContentProvider for NoContent {
    fn content(&self, _app_id: &AppId) -> Option<Box<dyn Surface>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_surface_renders_text() {
        assert_eq!(TextSurface::new("hello").render(), "hello");
        assert_eq!(TextSurface::not_found().render(), CONTENT_NOT_FOUND);
    }

    #[test]
    fn static_content_lookup() {
        let provider = StaticContent::new().with_page("about", "Hi there");
        let body = provider.content(&AppId::from("about")).unwrap();
        assert_eq!(body.render(), "Hi there");
        assert!(provider.content(&AppId::from("skills")).is_none());
    }

    #[test]
    fn no_content_is_always_none() {
        assert!(NoContent.content(&AppId::from("about")).is_none());
    }
}
