//! Post summary model
//!
//! One entry of the published index. The collection is produced offline by the
//! site generator; the engine treats it as an immutable snapshot for the life
//! of a page view and never re-sorts it (the generator publishes newest-first).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::tags;

/// Stable post identifier as published in the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{}", n),
            PostId::Text(s) => f.write_str(s),
        }
    }
}

/// One entry in the published post index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostSummary {
    /// Stable id assigned by the generator. Used in canonical URLs.
    pub id: Option<PostId>,

    /// Source file slug. Fallback identifier when `id` is absent.
    pub slug: Option<String>,

    pub title: String,

    /// ISO-8601 date string, formatted for display at render time.
    pub date: String,

    pub excerpt: Option<String>,

    /// Normalized on deserialization: a scalar (possibly comma-separated)
    /// or a list both become an ordered list of trimmed non-empty strings.
    #[serde(deserialize_with = "tag_field", default)]
    pub tags: Vec<String>,

    pub thumbnail: Option<String>,

    #[serde(rename = "readingMinutes")]
    pub reading_minutes: Option<u32>,
}

impl Default for PostSummary {
    fn default() -> Self {
        Self {
            id: None,
            slug: None,
            title: String::new(),
            date: String::new(),
            excerpt: None,
            tags: Vec::new(),
            thumbnail: None,
            reading_minutes: None,
        }
    }
}

impl PostSummary {
    /// The identifier used in URLs: `id` when present, otherwise `slug`.
    ///
    /// Uniqueness across the index is the generator's responsibility; an
    /// entry missing both fields yields an empty identifier.
    pub fn identifier(&self) -> String {
        match (&self.id, &self.slug) {
            (Some(id), _) => id.to_string(),
            (None, Some(slug)) => slug.clone(),
            (None, None) => String::new(),
        }
    }
}

/// The published index payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PostIndex {
    #[serde(default)]
    pub posts: Vec<PostSummary>,
}

/// Deserializer accepting a tag list, a scalar string, or nothing.
///
/// A scalar may itself be a comma-separated list; either shape ends up as the
/// normalized ordered list the rest of the engine works with.
fn tag_field<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};

    struct TagField;

    impl<'de> Visitor<'de> for TagField {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(tags::normalize_scalar(value))
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(tags::normalize_list(&vec))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(TagField)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_prefers_id() {
        let post: PostSummary =
            serde_json::from_str(r#"{"id": 3, "slug": "hello", "title": "Hello"}"#).unwrap();
        assert_eq!(post.identifier(), "3");
    }

    #[test]
    fn test_identifier_falls_back_to_slug() {
        let post: PostSummary = serde_json::from_str(r#"{"slug": "hello"}"#).unwrap();
        assert_eq!(post.identifier(), "hello");
    }

    #[test]
    fn test_tags_from_list() {
        let post: PostSummary =
            serde_json::from_str(r#"{"title": "T", "tags": [" ai ", "rust", ""]}"#).unwrap();
        assert_eq!(post.tags, vec!["ai", "rust"]);
    }

    #[test]
    fn test_tags_from_comma_scalar() {
        let post: PostSummary =
            serde_json::from_str(r#"{"title": "T", "tags": "ai, rust , "}"#).unwrap();
        assert_eq!(post.tags, vec!["ai", "rust"]);
    }

    #[test]
    fn test_index_payload() {
        let index: PostIndex = serde_json::from_str(
            r#"{"posts": [{"id": 1, "title": "A", "date": "2024-01-01"}]}"#,
        )
        .unwrap();
        assert_eq!(index.posts.len(), 1);
        assert_eq!(index.posts[0].date, "2024-01-01");
    }

    #[test]
    fn test_reading_minutes_camel_case() {
        let post: PostSummary =
            serde_json::from_str(r#"{"title": "T", "readingMinutes": 4}"#).unwrap();
        assert_eq!(post.reading_minutes, Some(4));
    }
}
