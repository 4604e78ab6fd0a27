//! Index page controller
//!
//! Orchestrates index load -> tag aggregation -> search filtering ->
//! pagination -> card rendering. The post collection is loaded once per page
//! view; typing and page navigation re-enter the pipeline from the filter and
//! pager stages without another retrieval.

use crate::config::ViewConfig;
use crate::content::{tags, PostSummary};
use crate::error::ViewError;
use crate::fetch::{self, Fetch};
use crate::render::card::{render_card, render_tag_bar};
use crate::render::pager::render_pager;
use crate::render::{Shell, Slot};
use crate::view::pager::{total_pages, PageWindow};
use crate::view::{search, AddressBar, PageState};

/// The index view over one loaded snapshot of the post collection.
pub struct IndexPage {
    config: ViewConfig,
    posts: Vec<PostSummary>,
}

impl IndexPage {
    /// Load the published index. A failure here is surfaced by the caller as
    /// an inline notice; there is no retry.
    pub async fn load(fetcher: &dyn Fetch, config: ViewConfig) -> Result<Self, ViewError> {
        let posts = fetch::load_index(fetcher, &config).await?;
        Ok(Self { config, posts })
    }

    /// Build a view directly over an already-resolved collection.
    pub fn with_posts(config: ViewConfig, posts: Vec<PostSummary>) -> Self {
        Self { config, posts }
    }

    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    /// Render the view for the current URL state plus the transient query.
    ///
    /// State is recomputed from the address bar on every render. When the
    /// requested page exceeds the result set, the clamped page is written
    /// back to the URL so history reflects what is actually shown.
    pub fn render(&self, query: &str, bar: &mut dyn AddressBar, shell: &mut dyn Shell) {
        let state = PageState::read(bar, query);

        let counts = tags::aggregate(&self.posts, self.config.tag_limit);
        shell.apply(
            Slot::TagBar,
            &render_tag_bar(&self.config, &counts, state.tag.as_deref()),
        );

        let by_tag: Vec<&PostSummary> = match state.tag.as_deref() {
            Some(tag) => self
                .posts
                .iter()
                .filter(|post| post.tags.iter().any(|t| t == tag))
                .collect(),
            None => self.posts.iter().collect(),
        };
        let hits = search::filter(&by_tag, &state.query);

        let total = total_pages(hits.len(), self.config.per_page);
        let page = state.page.min(total);
        if page != state.page {
            tracing::debug!("clamping page {} to {}", state.page, page);
            bar.set_page(if page == 1 { None } else { Some(page) });
        }

        let start = (page - 1) * self.config.per_page;
        let cards: String = hits
            .iter()
            .skip(start)
            .take(self.config.per_page)
            .map(|post| render_card(&self.config, post))
            .collect();
        shell.apply(Slot::Grid, &cards);

        let window = PageWindow::build(page, total, self.config.pager_window);
        shell.apply(
            Slot::Pager,
            &render_pager(&self.config, &window, state.tag.as_deref()),
        );

        let label = if hits.len() == 1 {
            "1 post".to_string()
        } else {
            format!("{} posts", hits.len())
        };
        shell.apply(Slot::ResultCount, &label);
    }

    /// Explicit navigation to a page link: persist the target to the URL,
    /// re-render, and scroll back to the top.
    pub fn goto_page(
        &self,
        page: usize,
        query: &str,
        bar: &mut dyn AddressBar,
        shell: &mut dyn Shell,
    ) {
        bar.set_page(if page <= 1 { None } else { Some(page) });
        self.render(query, bar, shell);
        shell.scroll_to_top();
    }

    /// A new search query restarts from the first page.
    pub fn search(&self, query: &str, bar: &mut dyn AddressBar, shell: &mut dyn Shell) {
        bar.set_page(None);
        self.render(query, bar, shell);
    }
}
