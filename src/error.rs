//! Engine error types

use thiserror::Error;

/// Errors surfaced by the browsing engine.
///
/// Both variants are terminal for the operation that produced them: the
/// controller that observes one substitutes an inline notice and carries on,
/// it never retries and never tears down the page shell.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A resource retrieval failed (non-success status, transport error, or
    /// a payload that could not be parsed).
    #[error("failed to load {url}: {reason}")]
    Load { url: String, reason: String },

    /// The post view was entered without a post identifier in the URL.
    #[error("no post specified")]
    NotSpecified,
}

impl ViewError {
    pub fn load(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Load {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
