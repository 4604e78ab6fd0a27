//! Free-text search over the loaded post collection
//!
//! Pure and synchronous: filtering never re-issues a network retrieval.

use crate::content::PostSummary;

/// Narrow a collection by a case-insensitive substring query over the
/// concatenation of title, excerpt, and tags. An empty or whitespace-only
/// query is a no-op, not "match nothing".
pub fn filter<'a>(posts: &[&'a PostSummary], query: &str) -> Vec<&'a PostSummary> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return posts.to_vec();
    }

    posts
        .iter()
        .filter(|post| haystack(post).contains(&needle))
        .copied()
        .collect()
}

fn haystack(post: &PostSummary) -> String {
    format!(
        "{} {} {}",
        post.title,
        post.excerpt.as_deref().unwrap_or(""),
        post.tags.join(" ")
    )
    .to_lowercase()
}
