/// Structured error types for cityscout-core normalizers.
///
/// Every variant describes an upstream response that could not be mapped
/// into a stored record. Callers treat these as malformed-upstream failures.
use thiserror::Error;

/// Error raised while mapping an upstream payload into a record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    /// Upstream returned an empty candidate list where one was required
    #[error("{api} returned no candidates for '{query}'")]
    NoCandidates { api: &'static str, query: String },

    /// Unix timestamp outside the representable date range
    #[error("Invalid timestamp '{value}': out of range")]
    InvalidTimestamp { value: i64 },
}

/// Result type alias for normalizer operations
pub type Result<T> = std::result::Result<T, NormalizeError>;

impl NormalizeError {
    /// Create a no-candidates error
    pub fn no_candidates(api: &'static str, query: impl Into<String>) -> Self {
        Self::NoCandidates {
            api,
            query: query.into(),
        }
    }
}
