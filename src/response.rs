//! The uniform response value returned by every client operation.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::status::StatusCode;

/// Response headers as name/value pairs.
///
/// Order is preserved as received from the transport; lookup with
/// [`Headers::get`] is case-insensitive per HTTP semantics, returning the
/// first match. Repeated header names are kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    /// An empty header set.
    #[must_use]
    pub const fn new() -> Self {
        Headers(Vec::new())
    }

    /// Appends a name/value pair, keeping insertion order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Returns the first value for `name`, compared case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Number of header entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no headers were captured (e.g. after a timeout).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl From<&reqwest::header::HeaderMap> for Headers {
    fn from(map: &reqwest::header::HeaderMap) -> Self {
        let mut headers = Headers::new();
        for (name, value) in map {
            // Non-UTF-8 header values are rare; render them lossily rather
            // than dropping the entry.
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            headers.push(name.as_str(), value);
        }
        headers
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// What a [`Response`] carries: body text for requests, a file path for
/// downloads. The variant is decided by the operation, never by inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Content {
    /// Decoded response body text. Also used for the empty timeout body and
    /// for failure descriptions on `UNDEFINED_ERROR` responses.
    Body(String),
    /// Path the downloaded body was written to.
    SavedPath(PathBuf),
}

/// Normalized result of a single HTTP exchange.
///
/// Every operation returns this shape: a status (which may be the
/// [`NONE`](StatusCode::NONE) or [`UNDEFINED_ERROR`](StatusCode::UNDEFINED_ERROR)
/// sentinel), the response headers, and the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Outcome code of the exchange.
    pub status: StatusCode,
    /// Response headers; empty for timeouts and undefined errors.
    pub headers: Headers,
    /// Body text or saved file path, depending on the operation.
    pub content: Content,
}

impl Response {
    /// Builds the timeout shape: status [`NONE`](StatusCode::NONE), no
    /// headers, empty body. A distinguishable normal result, not an error.
    #[must_use]
    pub fn timed_out() -> Self {
        Response {
            status: StatusCode::NONE,
            headers: Headers::new(),
            content: Content::Body(String::new()),
        }
    }

    /// Builds the undefined-error shape: status
    /// [`UNDEFINED_ERROR`](StatusCode::UNDEFINED_ERROR), no headers, the
    /// failure description as body.
    #[must_use]
    pub fn undefined_error(message: impl Into<String>) -> Self {
        Response {
            status: StatusCode::UNDEFINED_ERROR,
            headers: Headers::new(),
            content: Content::Body(message.into()),
        }
    }

    /// The body text, if this response carries one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Body(text) => Some(text),
            Content::SavedPath(_) => None,
        }
    }

    /// The saved file path, if this response came from a download.
    #[must_use]
    pub fn saved_path(&self) -> Option<&Path> {
        match &self.content {
            Content::SavedPath(path) => Some(path),
            Content::Body(_) => None,
        }
    }

    /// True when the request timed out (status [`NONE`](StatusCode::NONE)).
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.status == StatusCode::NONE
    }

    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
