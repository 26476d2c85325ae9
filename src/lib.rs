//! Webfetch Library
//!
//! A thin convenience layer over HTTP for scripts and tools that want one
//! call per exchange: send a GET or POST, or download a file, and always get
//! back the same response shape of status code, headers, and content.
//!
//! Failures that never produced an HTTP response are folded into that shape
//! too: a timeout becomes the [`StatusCode::NONE`] sentinel with an empty
//! body, and any other transport failure becomes
//! [`StatusCode::UNDEFINED_ERROR`] with the failure description as body. The
//! `try_` methods on [`Client`] expose typed errors instead for callers who
//! want them.
//!
//! # Architecture
//!
//! - [`client`] - Request and download execution
//! - [`status`] - Status codes, including vendor extensions and sentinels
//! - [`response`] - The uniform response shape
//! - [`content_type`] - Common MIME type constants
//! - [`user_agent`] - Common User-Agent string constants

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod content_type;
pub mod response;
pub mod status;
pub mod user_agent;

// Re-export commonly used types
pub use client::{
    Client, DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DownloadOptions,
    RequestOptions, TransferError,
};
pub use response::{Content, Headers, Response};
pub use status::StatusCode;
pub use user_agent::default_user_agent;
