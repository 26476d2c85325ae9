//! Timeout defaults and the seconds-to-`Duration` clamp.

use std::time::Duration;

/// Default timeout for `get`/`post`, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: f64 = 10.0;

/// Default timeout for `download`, in seconds.
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: f64 = 600.0;

/// Connection-establishment cap, fixed at client build time. The per-request
/// timeout is a total deadline that also covers connecting, so the effective
/// connect limit is the smaller of the two.
pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Floor so a timeout that would round to zero milliseconds cannot disable
/// (or instantly fire) the deadline.
const MIN_TIMEOUT_MILLIS: u64 = 10;

/// Cap at the largest value the original transport accepted rather than
/// overflowing on absurd inputs.
const MAX_TIMEOUT_MILLIS: u64 = i32::MAX as u64;

/// Converts a caller-supplied timeout in seconds to a transport `Duration`.
/// The result becomes the request's total deadline, from connect through the
/// end of the body.
///
/// Sub-millisecond, negative, and NaN inputs clamp to a 10 ms floor; values
/// above `i32::MAX` milliseconds (about 24.8 days) clamp to that cap.
pub(crate) fn clamp_timeout(seconds: f64) -> Duration {
    let millis = seconds * 1000.0;
    if millis.is_nan() || millis < 1.0 {
        return Duration::from_millis(MIN_TIMEOUT_MILLIS);
    }
    if millis > MAX_TIMEOUT_MILLIS as f64 {
        return Duration::from_millis(MAX_TIMEOUT_MILLIS);
    }
    Duration::from_millis(millis as u64)
}
