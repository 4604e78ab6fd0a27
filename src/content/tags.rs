//! Tag normalization and aggregation

use indexmap::IndexMap;

use super::frontmatter::MetaValue;
use super::post::PostSummary;

/// Normalize a list of tags: trim each element and drop empties, preserving
/// order. Idempotent.
pub fn normalize_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a scalar tag value, splitting on commas in left-to-right order.
pub fn normalize_scalar(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize the `tags` entry of a parsed document, whatever shape it took.
pub fn normalize_meta(value: Option<&MetaValue>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(MetaValue::List(items)) => normalize_list(items),
        Some(MetaValue::Scalar(s)) => normalize_scalar(s),
    }
}

/// A tag and its occurrence count across the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Count tag occurrences across the full post collection, case-sensitively,
/// and return up to `limit` entries by descending count. The sort is stable,
/// so ties keep first-seen order.
pub fn aggregate(posts: &[PostSummary], limit: usize) -> Vec<TagCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for post in posts {
        for tag in &post.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}
