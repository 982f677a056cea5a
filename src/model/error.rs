//! Error types for photon.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the command-line shell
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Subscriber setup failures
//!   - [`MetadataError`](crate::model::MetadataError) - Field metadata read/parse failures
//!   - `std::io::Error` - Reading input lines
//!   - `serde_json::Error` - Printing the query request
//! - [`FragmentError`] - A location fragment that does not decode to a state
//!
//! # Recovery Strategy
//!
//! Fragment errors are **never fatal**. A malformed fragment is what a user gets after
//! hand-editing or truncating a shared link; the state holder logs it and falls back to the
//! empty state. Everything wrapped by `AppError` is fatal for the shell and reported on
//! stderr.

use thiserror::Error;

/// Top-level error for the command-line shell.
///
/// # Examples
///
/// ```no_run
/// use photon::model::error::AppError;
/// use photon::model::FieldsMetadata;
///
/// fn load() -> Result<FieldsMetadata, AppError> {
///     // MetadataError converts to AppError via From
///     Ok(FieldsMetadata::from_path("fields.json".as_ref())?)
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Field metadata file could not be loaded.
    #[error("Field metadata error: {0}")]
    Metadata(#[from] crate::model::MetadataError),

    /// Reading input lines failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The query request could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors decoding a location fragment into a state.
///
/// Callers degrade to the empty state on any of these; they exist so the cause can be
/// logged.
///
/// # Examples
///
/// ```
/// use photon::model::error::FragmentError;
/// use photon::state::fragment;
///
/// assert_eq!(fragment::decode(""), Err(FragmentError::Empty));
/// assert!(matches!(
///     fragment::decode("not-json"),
///     Err(FragmentError::InvalidJson { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    /// The location carries no fragment.
    #[error("Fragment is empty")]
    Empty,

    /// Percent-decoding produced bytes that are not UTF-8.
    #[error("Fragment is not valid percent-encoded UTF-8: {message}")]
    Encoding {
        /// Decoder error message.
        message: String,
    },

    /// Decoded text is not a state document.
    ///
    /// The message is extracted from `serde_json` rather than wrapping its error, so the
    /// type stays `Clone + PartialEq`.
    #[error("Fragment is not a valid state document: {message}")]
    InvalidJson {
        /// Parser error message.
        message: String,
    },
}
