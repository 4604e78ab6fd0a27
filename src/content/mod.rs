//! Content module - post summaries, front-matter, and tags

pub mod frontmatter;
pub mod post;
pub mod tags;

pub use frontmatter::{MetaValue, ParsedDocument};
pub use post::{PostId, PostIndex, PostSummary};
pub use tags::TagCount;
