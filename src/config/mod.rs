//! View configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the browsing engine.
///
/// Defaults match the published layout of the blog: the index lives at
/// `<root>posts/index.json`, raw documents at `<root>posts/<slug>.md`, and
/// each post's canonical page at `<root><id>/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Root path the blog is served under, with a trailing slash.
    pub root: String,

    /// Index resource path, relative to `root`.
    pub index_path: String,

    /// Raw document path pattern, relative to `root`. `:slug` is substituted.
    pub post_path: String,

    /// Visit beacon path, relative to `root`.
    pub beacon_path: String,

    /// Posts per index page.
    pub per_page: usize,

    /// Maximum number of tag chips surfaced in the tag bar.
    pub tag_limit: usize,

    /// Width of the numbered pager window.
    pub pager_window: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            root: "/blog/".to_string(),
            index_path: "posts/index.json".to_string(),
            post_path: "posts/:slug.md".to_string(),
            beacon_path: "api/visit".to_string(),
            per_page: 12,
            tag_limit: 12,
            pager_window: 7,
        }
    }
}

impl ViewConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ViewConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.per_page, 12);
        assert_eq!(config.tag_limit, 12);
        assert_eq!(config.pager_window, 7);
        assert_eq!(config.root, "/blog/");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: ViewConfig = serde_yaml::from_str("per_page: 6\n").unwrap();
        assert_eq!(config.per_page, 6);
        assert_eq!(config.index_path, "posts/index.json");
    }
}
