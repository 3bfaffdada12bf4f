//! Application error types

use quiver_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A domain precondition failed; the session state is unchanged.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The request URL does not parse.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The active body representation does not resolve.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A multipart row carries an unparseable content-type override.
    #[error("invalid content type {value:?} for part {part:?}")]
    InvalidPartContentType {
        /// The part (row key) carrying the override.
        part: String,
        /// The rejected content-type string.
        value: String,
    },

    /// The body type is octet-stream but no file is attached.
    #[error("no file attached for binary body")]
    MissingBinaryFile,
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
