//! Typed errors for the fallible (`try_*`) client API.

use std::path::PathBuf;

use thiserror::Error;

/// A transfer failure that produced no HTTP response.
///
/// Timeouts are deliberately absent: a timeout normalizes to the
/// [`NONE`](crate::StatusCode::NONE) response shape and is never an error.
/// The infallible API (`get`/`post`/`download`) flattens these variants into
/// [`UNDEFINED_ERROR`](crate::StatusCode::UNDEFINED_ERROR) responses.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Transport-level failure: DNS resolution, connection refused, TLS
    /// negotiation, or a broken body stream.
    #[error("network error requesting {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Filesystem error while writing a download.
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The destination path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The supplied URL could not be parsed.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },
}

impl TransferError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }
}

// No From<reqwest::Error> / From<std::io::Error>: the variants need url/path
// context the source errors don't carry, so the helper constructors are the
// conversion points.
