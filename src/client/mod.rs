//! HTTP client wrapper for simple request and download workflows.
//!
//! This module provides the [`Client`] struct plus the option types that
//! feed it. Every operation comes in two flavors: an infallible form that
//! always yields a [`Response`] (timeouts become the
//! [`NONE`](crate::StatusCode::NONE) shape, everything else that fails
//! becomes [`UNDEFINED_ERROR`](crate::StatusCode::UNDEFINED_ERROR)), and a
//! `try_` form that surfaces [`TransferError`] for callers who want to match
//! on the failure.

mod destination;
mod error;
mod headers;
mod timeout;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use reqwest::Method;
use reqwest::blocking::RequestBuilder;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use tracing::{debug, info};
use url::Url;

pub use error::TransferError;
pub use timeout::{DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};

use crate::response::{Content, Headers, Response};
use crate::status::StatusCode;
use crate::user_agent;
use headers::ParsedHeaders;
use timeout::{CONNECT_TIMEOUT_SECS, clamp_timeout};

/// Per-request options for [`Client::get_with`] and [`Client::post_with`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Flat `"Name: Value"` header lines. Malformed lines are dropped.
    pub headers: Vec<String>,
    /// Request body, sent verbatim as UTF-8 bytes on any method.
    pub body: Option<String>,
    /// Total request deadline in seconds, covering connect through body
    /// read. Clamped to `[10ms, i32::MAX ms]`.
    pub timeout_secs: f64,
}

impl Default for RequestOptions {
    fn default() -> Self {
        RequestOptions {
            headers: Vec::new(),
            body: None,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Per-download options for [`Client::download_with`].
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Flat `"Name: Value"` header lines. Malformed lines are dropped.
    pub headers: Vec<String>,
    /// Total request deadline in seconds; downloads default much higher
    /// than requests.
    pub timeout_secs: f64,
    /// Destination directory. `None` means the user's Downloads folder.
    pub dest_dir: Option<PathBuf>,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        DownloadOptions {
            headers: Vec::new(),
            timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            dest_dir: None,
        }
    }
}

/// HTTP client for one-call requests and file downloads.
///
/// Designed to be created once and reused, taking advantage of connection
/// pooling.
///
/// # Example
///
/// ```no_run
/// use webfetch::Client;
///
/// let client = Client::new();
/// let response = client.get("https://example.com");
/// println!("{}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    user_agent: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client that identifies itself with the crate's own
    /// User-Agent.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_user_agent(user_agent::default_user_agent())
    }

    /// Creates a client with an explicit default User-Agent. A per-request
    /// `"User-Agent: …"` header line still overrides it.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self {
            http,
            user_agent: user_agent.into(),
        }
    }

    /// Sends a GET request with default options.
    ///
    /// Never fails: timeouts yield the [`NONE`](StatusCode::NONE) shape and
    /// other failures yield [`UNDEFINED_ERROR`](StatusCode::UNDEFINED_ERROR)
    /// with the failure description as body.
    #[must_use]
    pub fn get(&self, url: &str) -> Response {
        self.get_with(url, &RequestOptions::default())
    }

    /// Sends a GET request with explicit options, never failing.
    #[must_use]
    pub fn get_with(&self, url: &str, options: &RequestOptions) -> Response {
        flatten(self.try_get(url, options))
    }

    /// Sends a POST request with default options, never failing.
    #[must_use]
    pub fn post(&self, url: &str) -> Response {
        self.post_with(url, &RequestOptions::default())
    }

    /// Sends a POST request with explicit options, never failing.
    #[must_use]
    pub fn post_with(&self, url: &str, options: &RequestOptions) -> Response {
        flatten(self.try_post(url, options))
    }

    /// Downloads `url` into the default Downloads directory, never failing.
    #[must_use]
    pub fn download(&self, url: &str) -> Response {
        self.download_with(url, &DownloadOptions::default())
    }

    /// Downloads `url` with explicit options, never failing.
    #[must_use]
    pub fn download_with(&self, url: &str, options: &DownloadOptions) -> Response {
        flatten(self.try_download_with(url, options))
    }

    /// Sends a GET request, surfacing transfer failures as errors.
    ///
    /// A timeout is still `Ok` with the [`NONE`](StatusCode::NONE) shape, and
    /// a non-2xx status is still an ordinary `Ok` response.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Network`] when the request never produced a
    /// response (DNS failure, connection refused, TLS error).
    pub fn try_get(&self, url: &str, options: &RequestOptions) -> Result<Response, TransferError> {
        self.execute(Method::GET, url, options)
    }

    /// Sends a POST request, surfacing transfer failures as errors.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`try_get`](Self::try_get).
    pub fn try_post(&self, url: &str, options: &RequestOptions) -> Result<Response, TransferError> {
        self.execute(Method::POST, url, options)
    }

    /// Downloads `url` with default options, surfacing failures as errors.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`try_download_with`](Self::try_download_with).
    pub fn try_download(&self, url: &str) -> Result<Response, TransferError> {
        self.try_download_with(url, &DownloadOptions::default())
    }

    /// Downloads `url` to disk, surfacing transfer failures as errors.
    ///
    /// The destination file name comes from the URL path (or a timestamp when
    /// the path has none) and is disambiguated against existing files. A
    /// non-2xx status downloads nothing; the response body text is returned
    /// instead so the caller can inspect the server's error page.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::InvalidUrl`] for unparseable URLs,
    /// [`TransferError::Network`] for transport failures, and
    /// [`TransferError::Io`] for filesystem failures at the destination.
    pub fn try_download_with(
        &self,
        url: &str,
        options: &DownloadOptions,
    ) -> Result<Response, TransferError> {
        debug!(url = %url, "starting download");

        let parsed_url = Url::parse(url).map_err(|_| TransferError::invalid_url(url))?;

        let parsed = headers::parse_header_lines(&options.headers);
        let request = self.prepare(self.http.get(url), &parsed, None, options.timeout_secs);

        let response = match request.send() {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Ok(Response::timed_out()),
            Err(e) => return Err(TransferError::network(url, e)),
        };

        let status = StatusCode::from(response.status());
        let response_headers = Headers::from(response.headers());

        if !response.status().is_success() {
            debug!(status = %status, "download refused, returning body text");
            let text = match response.text() {
                Ok(text) => text,
                Err(e) if e.is_timeout() => return Ok(Response::timed_out()),
                Err(e) => return Err(TransferError::network(url, e)),
            };
            return Ok(Response {
                status,
                headers: response_headers,
                content: Content::Body(text),
            });
        }

        let dir = options
            .dest_dir
            .clone()
            .unwrap_or_else(destination::default_downloads_dir);
        std::fs::create_dir_all(&dir).map_err(|e| TransferError::io(dir.clone(), e))?;

        let name = destination::file_name_from_url(&parsed_url)
            .unwrap_or_else(|| destination::unix_timestamp().to_string());
        let file_path = destination::resolve_unique_path(&dir, &name);
        debug!(path = %file_path.display(), "resolved destination path");

        let file = File::create(&file_path).map_err(|e| TransferError::io(file_path.clone(), e))?;
        let mut writer = BufWriter::new(file);

        let streamed = stream_to_writer(response, &mut writer, url, &file_path);
        let bytes = match streamed {
            Ok(bytes) => bytes,
            Err(stream_error) => {
                // Remove the partial file rather than leaving incomplete data.
                drop(writer);
                debug!(path = %file_path.display(), "cleaning up partial file after error");
                let _ = std::fs::remove_file(&file_path);
                return match stream_error {
                    StreamError::TimedOut => Ok(Response::timed_out()),
                    StreamError::Failed(error) => Err(error),
                };
            }
        };

        info!(path = %file_path.display(), bytes, "download complete");

        Ok(Response {
            status,
            headers: response_headers,
            content: Content::SavedPath(file_path),
        })
    }

    /// Shared GET/POST executor.
    fn execute(
        &self,
        method: Method,
        url: &str,
        options: &RequestOptions,
    ) -> Result<Response, TransferError> {
        debug!(method = %method, url = %url, "sending request");

        let parsed = headers::parse_header_lines(&options.headers);
        let request = self.prepare(
            self.http.request(method, url),
            &parsed,
            options.body.as_deref(),
            options.timeout_secs,
        );

        let response = match request.send() {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Ok(Response::timed_out()),
            Err(e) => return Err(TransferError::network(url, e)),
        };

        let status = StatusCode::from(response.status());
        let response_headers = Headers::from(response.headers());
        debug!(status = %status, "received response");

        let text = match response.text() {
            Ok(text) => text,
            Err(e) if e.is_timeout() => return Ok(Response::timed_out()),
            Err(e) => return Err(TransferError::network(url, e)),
        };

        Ok(Response {
            status,
            headers: response_headers,
            content: Content::Body(text),
        })
    }

    /// Applies parsed headers, body, and timeout to an outgoing request.
    fn prepare(
        &self,
        mut request: RequestBuilder,
        parsed: &ParsedHeaders,
        body: Option<&str>,
        timeout_secs: f64,
    ) -> RequestBuilder {
        request = request.headers(parsed.extra.clone());

        let user_agent = parsed.user_agent.as_deref().unwrap_or(&self.user_agent);
        request = request.header(USER_AGENT, user_agent);

        if let Some(content_type) = &parsed.content_type {
            request = request.header(CONTENT_TYPE, content_type.clone());
        }
        if let Some(body) = body {
            request = request.body(body.as_bytes().to_vec());
        }

        request.timeout(clamp_timeout(timeout_secs))
    }
}

/// Flattens a transfer result into the infallible response shape.
fn flatten(result: Result<Response, TransferError>) -> Response {
    result.unwrap_or_else(|error| {
        debug!(error = %error, "flattening transfer error");
        Response::undefined_error(error.to_string())
    })
}

enum StreamError {
    TimedOut,
    Failed(TransferError),
}

/// Copies the response body to the writer, returning bytes written.
///
/// Extracted so the caller can clean up the partial file on any failure.
fn stream_to_writer(
    mut response: reqwest::blocking::Response,
    writer: &mut BufWriter<File>,
    url: &str,
    file_path: &std::path::Path,
) -> Result<u64, StreamError> {
    let bytes = response.copy_to(writer).map_err(|e| {
        if e.is_timeout() {
            StreamError::TimedOut
        } else {
            StreamError::Failed(TransferError::network(url, e))
        }
    })?;

    writer
        .flush()
        .map_err(|e| StreamError::Failed(TransferError::io(file_path.to_path_buf(), e)))?;

    Ok(bytes)
}
