use crate::document::{Content, Page};
use tracing::warn;
use tracker_core::view::port::{Element, View};

/// # Summary
/// `View` implementation writing into a `Page`.
///
/// # Invariants
/// - Alerts are queued on the page; the host drains and shows them
///   (`Page::drain_alerts`), since a static page cannot block on a dialog.
#[derive(Clone)]
pub struct PageView {
    page: Page,
}

impl PageView {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

impl View for PageView {
    /// # Summary
    /// Queue a blocking message for the host.
    ///
    /// # Logic
    /// 1. Log it at `warn`.
    /// 2. Append it to the page's alert queue, drained by `Page::drain_alerts`.
    fn alert(&self, message: &str) {
        warn!(message, "Alert");
        self.page.update(|doc| doc.alerts.push(message.to_string()));
    }

    /// Add or remove `class` on the page body; repeated calls are idempotent.
    fn set_body_class(&self, class: &str, enabled: bool) {
        self.page.update(|doc| {
            if enabled {
                doc.body_classes.insert(class.to_string());
            } else {
                doc.body_classes.remove(class);
            }
        });
    }

    /// Replace the container content with plain text, escaped on render.
    fn set_text(&self, target: Element, text: &str) {
        self.page
            .update(|doc| doc.contents.insert(target, Content::Text(text.to_string())));
    }

    /// Replace the container content with a trusted fragment.
    fn set_html(&self, target: Element, html: &str) {
        self.page
            .update(|doc| doc.contents.insert(target, Content::Html(html.to_string())));
    }
}
