//! Shared error type across watchtower crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, WatchtowerError>;

/// Unified error type used by core and api.
#[derive(Debug, Error)]
pub enum WatchtowerError {
    /// An instrument with this name is already registered.
    #[error("duplicate metric: {0}")]
    DuplicateMetric(String),
    /// Instrument name or help text is not acceptable for exposition.
    #[error("invalid metric: {0}")]
    InvalidMetric(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl WatchtowerError {
    /// Whether the error happened while building the instrument set.
    pub fn is_registration(&self) -> bool {
        matches!(
            self,
            WatchtowerError::DuplicateMetric(_) | WatchtowerError::InvalidMetric(_)
        )
    }
}
