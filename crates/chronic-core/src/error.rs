//! Error types for chronic-core.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading configuration, building the rule table, or rendering a report.
///
/// Matching itself never fails; see [`crate::diagnose`].
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or rule file could not be read or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A rule breaks a table invariant (empty name, zero or unreachable trigger count).
    #[error("invalid rule for '{disease}': {reason}")]
    InvalidRule {
        /// Disease the rule belongs to.
        disease: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Two rules share the same disease name.
    #[error("duplicate disease in rule table: {0}")]
    DuplicateDisease(String),

    /// JSON report serialization failed.
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
