//! Error types for the multiview application.
//!
//! This module defines the top of the error taxonomy using `thiserror`. Domain failures
//! compose into [`AppError`] via `From` conversions so the command-line shell can use `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the command-line shell
//!   - [`ConfigError`] - Config file could not be read or parsed
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//!   - [`ShareLinkError`] - Page URL cannot carry a shareable query
//!   - `serde_json::Error` - JSON report could not be rendered
//!   - `std::io::Error` - Writing the report to stdout failed
//!
//! # What is *not* an error
//!
//! The session core never fails. An unparseable video URL is an absent result, an
//! operation naming an unknown entry id is a no-op, and a malformed shared-link token is
//! skipped. None of those paths produce a value of any type in this module.

use crate::codec::ShareLinkError;
use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes of the shell.
///
/// # Examples
///
/// ```
/// use multiview::codec::ShareLinkError;
/// use multiview::model::error::AppError;
///
/// let err: AppError = ShareLinkError::CannotBeABase("mailto:a@b".to_string()).into();
/// assert!(err.to_string().contains("mailto:a@b"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be loaded.
    ///
    /// **Recovery**: Print the path and reason, exit non-zero. A *missing* config file
    /// is never reported here; defaults are used instead.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber initialization failed.
    ///
    /// **Recovery**: Print and exit. Logging directory creation failures land here.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The configured or supplied page URL cannot host a shareable link.
    #[error("Share link error: {0}")]
    ShareLink(#[from] ShareLinkError),

    /// JSON report serialization failed.
    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),

    /// Writing output failed (e.g. broken pipe).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
