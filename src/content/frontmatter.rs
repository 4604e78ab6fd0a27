//! Front-matter parsing
//!
//! Best-effort single-level key/value scanner over a `---`-fenced leading
//! block. This is deliberately not a YAML parser: the published documents only
//! ever use `key: value` lines and `[a, b]` style inline lists, and a document
//! that does not parse must degrade to "no metadata" rather than fail.

use indexmap::IndexMap;

/// A metadata value: either a scalar string or an inline list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Scalar(String),
    List(Vec<String>),
}

impl MetaValue {
    /// The scalar form of the value, if it has one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::Scalar(s) => Some(s),
            MetaValue::List(_) => None,
        }
    }
}

/// Result of splitting a raw document into metadata and body.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub metadata: IndexMap<String, MetaValue>,
    pub body: String,
}

impl ParsedDocument {
    fn without_metadata(raw: &str) -> Self {
        Self {
            metadata: IndexMap::new(),
            body: raw.to_string(),
        }
    }

    /// Scalar metadata lookup.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(MetaValue::as_str)
    }
}

/// Parse a raw document into metadata and body.
///
/// The document must start with a `---` line for a front-matter block to be
/// recognized. An absent or unterminated block yields empty metadata and the
/// original text as body, byte for byte. Inside the block, the first colon on
/// a line separates key from value; lines without a colon are skipped; a value
/// wrapped in `[...]` splits on commas into a trimmed, empty-dropped list.
/// Duplicate keys are last-write-wins.
pub fn parse(raw: &str) -> ParsedDocument {
    if !raw.starts_with("---") {
        return ParsedDocument::without_metadata(raw);
    }

    let Some(end) = raw[3..].find("\n---") else {
        return ParsedDocument::without_metadata(raw);
    };
    let end = end + 3;

    let block = raw[3..end].trim();
    let body = raw[end + 4..].trim_start().to_string();

    let mut metadata = IndexMap::new();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_string();
        let value = value.trim();

        let parsed = if value.starts_with('[') && value.ends_with(']') {
            MetaValue::List(
                value[1..value.len() - 1]
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        } else {
            MetaValue::Scalar(value.to_string())
        };
        metadata.insert(key, parsed);
    }

    ParsedDocument { metadata, body }
}
