//! blogview: a client-side browsing engine for markdown-backed static blogs
//!
//! The engine consumes an already-published post index and raw markdown
//! documents, and produces a navigable view: tag-frequency chips, free-text
//! search, URL-synchronized pagination, and rendered post bodies. Content
//! generation and the page shell itself are external collaborators.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod helpers;
pub mod render;
pub mod view;

use config::ViewConfig;
use error::ViewError;
use fetch::Fetch;

/// The engine entry point: configuration plus controller constructors.
#[derive(Clone)]
pub struct Viewer {
    pub config: ViewConfig,
}

impl Viewer {
    pub fn new(config: ViewConfig) -> Self {
        Self { config }
    }

    /// Load the index view for one page view.
    pub async fn index_page(&self, fetcher: &dyn Fetch) -> Result<app::IndexPage, ViewError> {
        app::IndexPage::load(fetcher, self.config.clone()).await
    }

    /// The post view controller.
    pub fn post_page(&self) -> app::PostPage {
        app::PostPage::new(self.config.clone())
    }
}
