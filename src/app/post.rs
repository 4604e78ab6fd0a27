//! Post page controller
//!
//! Resolves the requested post from the URL, parses its front-matter,
//! delegates body rendering to the markdown renderer, and populates the
//! metadata fields. Every failure substitutes an inline notice at the point
//! of occurrence; nothing propagates past this controller.

use crate::config::ViewConfig;
use crate::content::{frontmatter, tags};
use crate::error::ViewError;
use crate::fetch::beacon::VisitBeacon;
use crate::fetch::{self, Fetch};
use crate::helpers::date::display_date;
use crate::helpers::html::html_escape;
use crate::helpers::url::post_href;
use crate::render::card::render_tag_links;
use crate::render::{markdown, notice, Shell, Slot};
use crate::view::AddressBar;

pub struct PostPage {
    config: ViewConfig,
}

impl PostPage {
    pub fn new(config: ViewConfig) -> Self {
        Self { config }
    }

    /// Show the post named by the `slug` URL parameter.
    ///
    /// A missing identifier or a failed retrieval degrades to a notice in the
    /// content slot; the rest of the shell stays untouched and interactive.
    /// The visit beacon fires only after a successful render.
    pub async fn show(
        &self,
        fetcher: &dyn Fetch,
        beacon: &dyn VisitBeacon,
        bar: &dyn AddressBar,
        shell: &mut dyn Shell,
    ) {
        let Some(slug) = bar.get("slug").filter(|s| !s.is_empty()) else {
            shell.apply(Slot::Content, &notice(&ViewError::NotSpecified.to_string()));
            return;
        };

        let raw = match fetch::load_document(fetcher, &self.config, &slug).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("{}", e);
                shell.apply(Slot::Content, &notice("failed to load post"));
                return;
            }
        };

        let doc = frontmatter::parse(&raw);

        let title = doc.scalar("title").unwrap_or(&slug);
        shell.apply(Slot::Title, &html_escape(title));

        if let Some(date) = doc.scalar("date") {
            shell.apply(Slot::Date, &html_escape(&display_date(date)));
        }

        let post_tags = tags::normalize_meta(doc.metadata.get("tags"));
        shell.apply(Slot::Tags, &render_tag_links(&self.config, &post_tags));

        let content = markdown::defer_images(&markdown::render(&doc.body));
        shell.apply(Slot::Content, &content);

        beacon.notify(&post_href(&self.config, &slug));
    }
}
