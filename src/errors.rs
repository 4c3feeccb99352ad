//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can abort a mirror run, and `ConfigError` for problems detected while the
//! configuration snapshot is being assembled.

use thiserror::Error;

/// Errors raised while resolving and validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required setting was not provided by any source.
    #[error("Missing required setting '{option}' (flag --{option}, env {env}, or config file key)")]
    Missing {
        /// The config key / long flag name.
        option: String,
        /// The environment variable that could have provided it.
        env: String,
    },

    /// A setting was provided but its value is not acceptable.
    #[error("Invalid value for '{option}': {reason}")]
    InvalidValue {
        /// The config key / long flag name.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The config file exists but could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML or has wrongly typed keys.
    #[error("Failed to parse config file '{path}': {source}")]
    FileParse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The file name match pattern does not compile.
    #[error("Invalid match regex '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors that abort a mirror run.
///
/// Every variant is fatal for the run; the binary prints the message and
/// exits with a non-zero status. The walker handles the single tolerated
/// failure (directory creation) itself and never surfaces it here.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Connection failure, timeout, or any other transport-level failure.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with a status code outside the accepted set.
    #[error("failed to fetch data: {status} ({url})")]
    UnexpectedStatus { url: String, status: u16 },

    /// The remote API reported a logical error (HTML page title or JSON `message`).
    #[error("{0}")]
    Remote(String),

    /// The listing response carried neither an error nor a `value` field.
    #[error("api response not found")]
    ListingNotFound,

    /// The `value` array could not be read as a list of entries.
    #[error("Malformed listing entries: {0}")]
    MalformedListing(#[source] serde_json::Error),

    /// Local file or directory access failed.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
