//! Resource retrieval
//!
//! One index fetch and at most one document fetch per page view, no retries.
//! Retrieval goes through the [`Fetch`] capability so controllers stay
//! testable without a network; the real implementation is a thin reqwest
//! client that bypasses HTTP caches, since every view must observe the latest
//! published state.

pub mod beacon;

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;

use crate::config::ViewConfig;
use crate::content::{PostIndex, PostSummary};
use crate::error::ViewError;
use crate::helpers::url;

/// Retrieves a text resource by site-relative path.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch_text(&self, path: &str) -> Result<String, ViewError>;
}

/// HTTP fetcher over a site base URL.
pub struct HttpFetcher {
    client: reqwest::Client,
    base: String,
}

impl HttpFetcher {
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, ViewError> {
        let url = format!("{}{}", self.base, path);
        tracing::debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| ViewError::load(&url, e))?
            .error_for_status()
            .map_err(|e| ViewError::load(&url, e))?;

        response.text().await.map_err(|e| ViewError::load(&url, e))
    }
}

/// Retrieve and parse the published post index. One attempt per page view.
pub async fn load_index(
    fetcher: &dyn Fetch,
    config: &ViewConfig,
) -> Result<Vec<PostSummary>, ViewError> {
    let path = url::index_path(config);
    let payload = fetcher.fetch_text(&path).await?;

    let index: PostIndex =
        serde_json::from_str(&payload).map_err(|e| ViewError::load(&path, e))?;
    tracing::info!("loaded {} posts from index", index.posts.len());
    Ok(index.posts)
}

/// Retrieve the raw markdown document for a slug. One attempt per page view.
pub async fn load_document(
    fetcher: &dyn Fetch,
    config: &ViewConfig,
    slug: &str,
) -> Result<String, ViewError> {
    fetcher.fetch_text(&url::document_path(config, slug)).await
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory fetcher serving canned responses, counting calls.
    pub struct MapFetcher {
        responses: HashMap<String, String>,
        pub calls: AtomicUsize,
    }

    impl MapFetcher {
        pub fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                responses: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Fetch for MapFetcher {
        async fn fetch_text(&self, path: &str) -> Result<String, ViewError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .get(path)
                .cloned()
                .ok_or_else(|| ViewError::load(path, "not found"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MapFetcher;
    use super::*;

    #[tokio::test]
    async fn test_load_index() {
        let fetcher = MapFetcher::new(&[(
            "/blog/posts/index.json",
            r#"{"posts": [{"id": 1, "title": "A", "date": "2024-01-01"}]}"#,
        )]);
        let posts = load_index(&fetcher, &ViewConfig::default()).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_load_index_unparsable_payload() {
        let fetcher = MapFetcher::new(&[("/blog/posts/index.json", "<html>not json</html>")]);
        let err = load_index(&fetcher, &ViewConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ViewError::Load { .. }));
    }

    #[tokio::test]
    async fn test_load_index_missing_resource() {
        let fetcher = MapFetcher::new(&[]);
        assert!(load_index(&fetcher, &ViewConfig::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_load_document() {
        let fetcher = MapFetcher::new(&[("/blog/posts/hello.md", "---\ntitle: T\n---\nBody")]);
        let raw = load_document(&fetcher, &ViewConfig::default(), "hello")
            .await
            .unwrap();
        assert!(raw.starts_with("---"));
    }
}
