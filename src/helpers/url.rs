//! URL helper functions

use crate::config::ViewConfig;

/// Join a path under the configured blog root.
///
/// # Examples
/// ```ignore
/// url_for(&config, "posts/index.json") // -> "/blog/posts/index.json"
/// ```
pub fn url_for(config: &ViewConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Canonical page URL for a post identifier, e.g. `/blog/3/`.
pub fn post_href(config: &ViewConfig, identifier: &str) -> String {
    url_for(config, &format!("{}/", identifier))
}

/// Index view URL carrying an optional tag filter and a page number.
///
/// Page 1 is the canonical parameter-free form; the `page` parameter only
/// appears for later pages.
pub fn index_href(config: &ViewConfig, tag: Option<&str>, page: usize) -> String {
    let mut href = url_for(config, "");
    let mut sep = '?';

    if let Some(tag) = tag {
        href.push(sep);
        href.push_str("tag=");
        href.push_str(&encode_query_value(tag));
        sep = '&';
    }
    if page > 1 {
        href.push(sep);
        href.push_str(&format!("page={}", page));
    }
    href
}

/// Path of the raw markdown document for a slug.
pub fn document_path(config: &ViewConfig, slug: &str) -> String {
    url_for(config, &config.post_path.replace(":slug", slug))
}

/// Path of the published index resource.
pub fn index_path(config: &ViewConfig) -> String {
    url_for(config, &config.index_path)
}

/// Percent-encode a query parameter value.
pub fn encode_query_value(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, percent_encoding::NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let config = ViewConfig::default();
        assert_eq!(url_for(&config, "posts/index.json"), "/blog/posts/index.json");
        assert_eq!(url_for(&config, ""), "/blog/");
    }

    #[test]
    fn test_post_href() {
        let config = ViewConfig::default();
        assert_eq!(post_href(&config, "3"), "/blog/3/");
        assert_eq!(post_href(&config, "my-post"), "/blog/my-post/");
    }

    #[test]
    fn test_index_href() {
        let config = ViewConfig::default();
        assert_eq!(index_href(&config, None, 1), "/blog/");
        assert_eq!(index_href(&config, None, 3), "/blog/?page=3");
        assert_eq!(index_href(&config, Some("rust"), 1), "/blog/?tag=rust");
        assert_eq!(index_href(&config, Some("rust"), 2), "/blog/?tag=rust&page=2");
    }

    #[test]
    fn test_index_href_encodes_tag() {
        let config = ViewConfig::default();
        assert_eq!(
            index_href(&config, Some("a b"), 1),
            "/blog/?tag=a%20b"
        );
    }

    #[test]
    fn test_document_path() {
        let config = ViewConfig::default();
        assert_eq!(document_path(&config, "hello"), "/blog/posts/hello.md");
    }
}
