// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the site configuration crate.
//!
//! This module defines the errors that can occur while loading and validating
//! style-scan and dev-server configuration. All errors use `thiserror` for proper
//! error handling and conversion.

use thiserror::Error;

/// The main error type for configuration loading.
///
/// Every variant is reported synchronously at load time. There is no transient
/// failure mode, so none of these errors are retried. The enum is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking backwards
/// compatibility.
///
/// # Examples
///
/// ```
/// use sitecfg::domain::errors::ConfigError;
///
/// fn resolve_base() -> Result<(), ConfigError> {
///     Err(ConfigError::UnresolvablePreset {
///         preset: "evidence".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A referenced base preset could not be located by any resolver.
    #[error("Missing preset: '{preset}' could not be resolved")]
    UnresolvablePreset {
        /// The preset reference that failed to resolve
        preset: String,
    },

    /// No content globs were declared, which would produce an empty style sheet.
    #[error("Empty content scope: at least one content glob is required")]
    EmptyContentScope,

    /// A content glob could not be compiled.
    #[error("Invalid content glob '{pattern}': {reason}")]
    InvalidContentGlob {
        /// The offending pattern
        pattern: String,
        /// Why the pattern was rejected
        reason: String,
    },

    /// A malformed hostname, allow-list entry, bind address or port.
    #[error("Invalid host entry '{entry}': {reason}")]
    InvalidHostEntry {
        /// The offending entry
        entry: String,
        /// Why the entry was rejected
        reason: String,
    },

    /// The server listens on all interfaces but trusts no host names.
    #[error(
        "Insecure configuration: bind host '{bind_host}' exposes the server on all interfaces with an empty allowed-hosts list"
    )]
    InsecureExposure {
        /// The bind host that widened exposure
        bind_host: String,
    },

    /// An error occurred in a configuration document or preset source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates an `InvalidHostEntry` error for the given entry.
    pub fn invalid_host(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidHostEntry {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error widens or misdeclares network exposure.
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            ConfigError::InvalidHostEntry { .. } | ConfigError::InsecureExposure { .. }
        )
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
