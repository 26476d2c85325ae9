//! Parser for flat `"Name: Value"` header lines.
//!
//! Splitting rule: a line must split on `':'` into exactly two parts; lines
//! with zero or two-plus colons are dropped silently (logged at debug, never
//! surfaced to the caller). `User-Agent` and `Content-Type` are routed to
//! dedicated fields instead of the generic header set, matched by exact
//! string comparison, NOT case-insensitively: `"user-agent: x"` lands in the
//! generic set. This preserves the historical behavior; callers who vary
//! casing get a plain header instead of the dedicated field.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};

/// Outcome of parsing a header-line list.
#[derive(Debug, Default)]
pub(crate) struct ParsedHeaders {
    /// Value of an exact-match `"User-Agent: …"` line, if present.
    pub user_agent: Option<String>,
    /// Value of an exact-match `"Content-Type: …"` line, if present.
    pub content_type: Option<String>,
    /// Everything else, ready to attach to the outgoing request.
    pub extra: HeaderMap,
}

/// Splits raw header lines into the transport-ready form.
///
/// Values are trimmed of surrounding whitespace so `"Accept: text/html"`
/// yields `"text/html"`. Names that are not valid HTTP tokens are dropped
/// with a warning, matching the parser's lenient contract.
pub(crate) fn parse_header_lines(lines: &[String]) -> ParsedHeaders {
    let mut parsed = ParsedHeaders::default();

    for line in lines {
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() != 2 {
            debug!(line = %line, "dropping malformed header line");
            continue;
        }
        let name = parts[0];
        let value = parts[1].trim();

        match name {
            "User-Agent" => parsed.user_agent = Some(value.to_string()),
            "Content-Type" => parsed.content_type = Some(value.to_string()),
            _ => {
                let Ok(header_name) = name.parse::<HeaderName>() else {
                    warn!(name = %name, "dropping header with invalid name");
                    continue;
                };
                let Ok(header_value) = value.parse::<HeaderValue>() else {
                    warn!(name = %name, "dropping header with invalid value");
                    continue;
                };
                parsed.extra.append(header_name, header_value);
            }
        }
    }

    parsed
}
