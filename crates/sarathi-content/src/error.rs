//! Error types for the content client and query layer.

use thiserror::Error;

/// Result type alias using `ContentError`.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors reaching or decoding the remote content store.
///
/// The query layer performs no retries; callers (the page renderers) are
/// the error boundary and map every variant to an empty state or a
/// not-found page.
#[derive(Error, Debug)]
pub enum ContentError {
    /// No project id configured; queries fail predictably at request time.
    #[error("content store not configured: missing project id")]
    NotConfigured,

    /// Transport-level failure talking to the store.
    #[error("content store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("content store returned status {status}")]
    UnexpectedStatus { status: u16 },

    /// The store's response body did not match the expected record shape.
    #[error("failed to decode content store response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ContentError {
    /// Whether this failure stems from missing configuration rather than a
    /// reachable-but-unhappy store.
    #[must_use]
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_display() {
        let err = ContentError::NotConfigured;
        assert!(err.to_string().contains("not configured"));
        assert!(err.is_not_configured());
    }

    #[test]
    fn test_unexpected_status_display() {
        let err = ContentError::UnexpectedStatus { status: 502 };
        assert!(err.to_string().contains("502"));
        assert!(!err.is_not_configured());
    }
}
