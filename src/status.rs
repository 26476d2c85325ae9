//! HTTP status code table.
//!
//! [`StatusCode`] is a thin newtype over `i32` rather than a closed enum so
//! that codes missing from the table below survive a round-trip through
//! [`StatusCode::from_code`] unchanged. The table covers the standard IANA
//! registry plus common vendor extensions (Cloudflare 520-530, load-balancer
//! 460/463/561, nginx 444/494-499) and two sentinels used by the client
//! normalization: [`StatusCode::NONE`] for timeouts and
//! [`StatusCode::UNDEFINED_ERROR`] for failures with no HTTP response.

use std::fmt;

use serde::{Serialize, Serializer};

/// Numeric outcome of an HTTP exchange, plus the two client-side sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(i32);

/// Single data table for the named codes. Each row is `(NAME, code)` with its
/// doc comment; `name()` and the associated constants are both generated from
/// it so the numeric data cannot drift.
macro_rules! status_codes {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident, $code:literal);
        )+
    ) => {
        impl StatusCode {
            $(
                $(#[$docs])*
                pub const $name: StatusCode = StatusCode($code);
            )+

            /// Returns the symbolic name for a known code, `None` otherwise.
            #[must_use]
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $( $code => Some(stringify!($name)), )+
                    _ => None,
                }
            }
        }
    };
}

status_codes! {
    // Custom sentinels, not part of any HTTP registry.

    /// The exchange failed without producing an HTTP response; the failure
    /// description is carried in the response content.
    (UNDEFINED_ERROR, -1);
    /// No response: the request timed out before the remote answered.
    (NONE, 0);

    // 1xx informational.

    /// Request headers received; the client should proceed with the body.
    (CONTINUE, 100);
    /// The server agreed to switch protocols as requested.
    (SWITCHING_PROTOCOLS, 101);
    /// (WebDAV) Request received and processing, no response available yet.
    (PROCESSING, 102);
    /// Some response headers returned ahead of the final message.
    (EARLY_HINTS, 103);
    /// The cached response is stale (its age exceeds the allowed lifetime).
    (RESPONSE_IS_STALE, 110);
    /// The cache could not validate the response against the origin server.
    (REVALIDATION_FAILED, 111);
    /// The cache is intentionally disconnected from the network.
    (DISCONNECTED_OPERATION, 112);
    /// The cache chose a freshness lifetime greater than 24 hours and the
    /// response is older than 24 hours.
    (HEURISTIC_EXPIRATION, 113);
    /// Arbitrary, non-specific warning.
    (MISCELLANEOUS_WARNING, 199);

    // 2xx success.

    /// Standard response for a successful request.
    (OK, 200);
    /// The request resulted in a new resource being created.
    (CREATED, 201);
    /// Accepted for processing, but processing has not completed.
    (ACCEPTED, 202);
    /// A transforming proxy returned a modified version of the origin's 200.
    (NON_AUTHORITATIVE_INFORMATION, 203);
    /// Processed successfully, no content returned.
    (NO_CONTENT, 204);
    /// Processed successfully; the requester should reset its document view.
    (RESET_CONTENT, 205);
    /// (RFC 7233) Partial resource delivered in answer to a Range header.
    (PARTIAL_CONTENT, 206);
    /// (WebDAV) The body contains multiple separate response codes.
    (MULTI_STATUS, 207);
    /// (WebDAV) DAV binding members already enumerated earlier in the response.
    (ALREADY_REPORTED, 208);
    /// A proxy applied a transformation to the representation.
    (TRANSFORMATION_APPLIED, 214);
    /// (RFC 3229) Response is the result of instance manipulations.
    (IM_USED, 226);
    /// Same as 199 but indicating a persistent warning.
    (MISCELLANEOUS_PERSISTENT_WARNING, 299);

    // 3xx redirection.

    /// Multiple options for the resource; the client may choose.
    (MULTIPLE_CHOICES, 300);
    /// This and all future requests should use the given URI.
    (MOVED_PERMANENTLY, 301);
    /// The client should look at another URL (previously "Moved temporarily").
    (FOUND, 302);
    /// The response can be found under another URI using GET.
    (SEE_OTHER, 303);
    /// (RFC 7232) Not modified since the version in the request headers.
    (NOT_MODIFIED, 304);
    /// The resource is only available through the proxy given in the response.
    (USE_PROXY, 305);
    /// No longer used; originally "subsequent requests should use this proxy".
    (SWITCH_PROXY, 306);
    /// Repeat the request against another URI, keeping the original for later.
    (TEMPORARY_REDIRECT, 307);
    /// (RFC 7538) This and all future requests should use the given URI.
    (PERMANENT_REDIRECT, 308);

    // 4xx client errors.

    /// The server cannot process the request due to a client error.
    (BAD_REQUEST, 400);
    /// (RFC 7235) Authentication is required and has failed or is missing.
    (UNAUTHORIZED, 401);
    /// Reserved for future use.
    (PAYMENT_REQUIRED, 402);
    /// The request was valid but the server refuses to act on it.
    (FORBIDDEN, 403);
    /// The resource could not be found but may be available later.
    (NOT_FOUND, 404);
    /// The request method is not supported for this resource.
    (METHOD_NOT_ALLOWED, 405);
    /// The resource can only generate content unacceptable per Accept headers.
    (NOT_ACCEPTABLE, 406);
    /// (RFC 7235) The client must first authenticate with the proxy.
    (PROXY_AUTHENTICATION_REQUIRED, 407);
    /// The server timed out waiting for the request.
    (REQUEST_TIMEOUT, 408);
    /// Conflict in the current state of the resource (e.g. edit conflict).
    (CONFLICT, 409);
    /// The resource is gone and will not be available again.
    (GONE, 410);
    /// The request did not specify the length of its content.
    (LENGTH_REQUIRED, 411);
    /// (RFC 7232) A request precondition was not met.
    (PRECONDITION_FAILED, 412);
    /// (RFC 7231) The request is larger than the server will process.
    (PAYLOAD_TOO_LARGE, 413);
    /// (RFC 7231) The URI was too long for the server to process.
    (URI_TOO_LONG, 414);
    /// (RFC 7231) The request entity has an unsupported media type.
    (UNSUPPORTED_MEDIA_TYPE, 415);
    /// (RFC 7233) The requested byte range cannot be supplied.
    (RANGE_NOT_SATISFIABLE, 416);
    /// The Expect request-header requirements cannot be met.
    (EXPECTATION_FAILED, 417);
    /// (RFC 2324) April Fools' joke code from 1998.
    (IM_A_TEAPOT, 418);
    /// (Laravel) CSRF token missing or expired.
    (PAGE_EXPIRED, 419);
    /// (Twitter) Rate limited by version 1 of the Search and Trends API.
    (ENHANCE_YOUR_CALM, 420);
    /// (RFC 7540) Directed at a server unable to produce a response.
    (MISDIRECTED_REQUEST, 421);
    /// (WebDAV) Well-formed request with semantic errors.
    (UNPROCESSABLE_ENTITY, 422);
    /// (WebDAV) The resource being accessed is locked.
    (LOCKED, 423);
    /// (WebDAV) A request this one depended on failed.
    (FAILED_DEPENDENCY, 424);
    /// (RFC 8470) The server will not risk processing a replayable request.
    (TOO_EARLY, 425);
    /// The client should switch to the protocol given in the Upgrade header.
    (UPGRADE_REQUIRED, 426);
    /// (RFC 6585) The origin server requires the request to be conditional.
    (PRECONDITION_REQUIRED, 428);
    /// (RFC 6585) Too many requests in a given amount of time.
    (TOO_MANY_REQUESTS, 429);
    /// (RFC 6585) Header fields, individually or collectively, too large.
    (REQUEST_HEADER_FIELDS_TOO_LARGE, 431);
    /// (Microsoft) The client's session has expired and must log in again.
    (LOGIN_TIMEOUT, 440);
    /// (nginx) Return no information and close the connection immediately.
    (NO_RESPONSE, 444);
    /// (Microsoft) The request should be retried with required information.
    (RETRY_WITH, 449);
    /// (Microsoft) Windows Parental Controls are blocking the page.
    (BLOCKED_BY_WINDOWS_PARENTAL_CONTROLS, 450);
    /// (RFC 7725) Access denied in response to a legal demand.
    (UNAVAILABLE_FOR_LEGAL_REASONS, 451);
    /// (AWS ELB) Client closed the connection before the idle timeout.
    (ELB460, 460);
    /// (AWS ELB) X-Forwarded-For header with more than 30 IP addresses.
    (ELB463, 463);
    /// (nginx) Client sent too large a request or too long a header line.
    (REQUEST_HEADER_TOO_LARGE, 494);
    /// (nginx) The client provided an invalid certificate.
    (SSL_CERTIFICATE_ERROR, 495);
    /// (nginx) A client certificate is required but was not provided.
    (SSL_CERTIFICATE_REQUIRED, 496);
    /// (nginx) Plain HTTP request sent to a port listening for HTTPS.
    (HTTP_REQUEST_SENT_TO_HTTPS_PORT, 497);
    /// (nginx) The client closed the request before the server responded.
    (CLIENT_CLOSED_REQUEST, 499);

    // 5xx server errors.

    /// Generic server error with no more specific message available.
    (INTERNAL_SERVER_ERROR, 500);
    /// The server does not recognize or cannot fulfil the request method.
    (NOT_IMPLEMENTED, 501);
    /// Invalid response received from an upstream server.
    (BAD_GATEWAY, 502);
    /// The server cannot handle the request right now.
    (SERVICE_UNAVAILABLE, 503);
    /// No timely response received from an upstream server.
    (GATEWAY_TIMEOUT, 504);
    /// The HTTP protocol version in the request is not supported.
    (HTTP_VERSION_NOT_SUPPORTED, 505);
    /// (RFC 2295) Transparent content negotiation produced a circular reference.
    (VARIANT_ALSO_NEGOTIATES, 506);
    /// (WebDAV) Unable to store the representation needed for the request.
    (INSUFFICIENT_STORAGE, 507);
    /// (WebDAV) Infinite loop detected while processing the request.
    (LOOP_DETECTED, 508);
    /// (Apache/cPanel) The administrator-set bandwidth limit was exceeded.
    (BANDWIDTH_LIMIT_EXCEEDED, 509);
    /// (RFC 2774) Further request extensions are required.
    (NOT_EXTENDED, 510);
    /// (RFC 6585) The client must authenticate to gain network access.
    (NETWORK_AUTHENTICATION_REQUIRED, 511);
    /// (Cloudflare) The origin returned an empty, unknown, or unexpected
    /// response.
    (WEB_SERVER_RETURNED_AN_UNKNOWN_ERROR, 520);
    /// (Cloudflare) The origin refused connections.
    (WEB_SERVER_IS_DOWN, 521);
    /// (Cloudflare) Timed out contacting the origin.
    (CONNECTION_TIMED_OUT, 522);
    /// (Cloudflare) The origin is unreachable.
    (ORIGIN_IS_UNREACHABLE, 523);
    /// (Cloudflare) TCP connection completed but no timely HTTP response.
    (A_TIMEOUT_OCCURRED, 524);
    /// (Cloudflare) SSL/TLS handshake with the origin failed.
    (SSL_HANDSHAKE_FAILED, 525);
    /// (Cloudflare) The origin's SSL certificate could not be validated.
    (INVALID_SSL_CERTIFICATE, 526);
    /// (Cloudflare) Interrupted connection to the origin's Railgun server.
    (RAILGUN_ERROR, 527);
    /// (Qualys SSLLabs) The site cannot process the request.
    (SITE_IS_OVERLOADED, 529);
    /// (Cloudflare) Returned alongside an accompanying 1xxx error.
    (CLOUDFLARE_ERROR, 530);
    /// (AWS ELB) Authentication error from a server behind a load balancer.
    (ELB_UNAUTHORIZED, 561);
    /// (Informal) Network read timeout behind a proxy.
    (NETWORK_READ_TIMEOUT_ERROR, 598);
    /// (Informal) Network connect timeout behind a proxy.
    (NETWORK_CONNECT_TIMEOUT_ERROR, 599);
}

impl StatusCode {
    /// Wraps a raw numeric code. Codes outside the table are kept verbatim so
    /// an exotic server status is never silently rewritten.
    #[must_use]
    pub const fn from_code(code: i32) -> StatusCode {
        StatusCode(code)
    }

    /// The numeric code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// True for 1xx codes.
    #[must_use]
    pub const fn is_informational(self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// True for 2xx codes.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// True for 3xx codes.
    #[must_use]
    pub const fn is_redirection(self) -> bool {
        self.0 >= 300 && self.0 < 400
    }

    /// True for 4xx codes.
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    /// True for 5xx codes.
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        self.0 >= 500 && self.0 < 600
    }

    /// True for the client-side sentinels ([`NONE`](Self::NONE) and
    /// [`UNDEFINED_ERROR`](Self::UNDEFINED_ERROR)): no HTTP exchange completed.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        self.0 <= 0
    }
}

impl From<reqwest::StatusCode> for StatusCode {
    fn from(status: reqwest::StatusCode) -> Self {
        StatusCode(i32::from(status.as_u16()))
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} {}", self.0, name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.0)
    }
}
