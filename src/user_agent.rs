//! User-Agent string constants and the default client identity.
//!
//! The table mirrors a handful of well-known agent strings for callers who
//! want to present as a particular client. The crate's own identity comes
//! from [`default_user_agent`] and is explicit `Client` configuration; there
//! is no process-wide mutable identity.

/// Googlebot crawler.
pub const GOOGLE_BOT: &str = "Googlebot/2.1 (+http://www.google.com/bot.html)";
/// Apple TV media player.
pub const APPLE_TV: &str = "AppleTV6,2/11.1";

/// Opera on 64-bit Windows (Presto engine).
pub const OPERA_WINDOWS: &str =
    "Opera/9.80 (Windows NT 6.2; Win64; x64) Presto/2.12.388 Version/12.16";
/// Opera on Linux (Presto engine).
pub const OPERA_LINUX: &str = "Opera/10.00 (X11; Linux i686; U; en) Presto/2.2.0";
/// Opera Mini on J2ME handsets.
pub const OPERA_MINI: &str =
    "Opera/10.61 (J2ME/MIDP; Opera Mini/5.1.21219/19.999; en-US; rv:1.9.3a5) WebKit/534.5 Presto/2.6.30";

/// Firefox on 64-bit Windows.
pub const MOZILLA_WINDOWS: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:71.0) Gecko/20100101 Firefox/71.0";
/// Firefox on Linux.
pub const MOZILLA_LINUX: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:70.0) Gecko/20100101 Firefox/70.0";
/// Firefox on Ubuntu.
pub const MOZILLA_UBUNTU: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:70.0) Gecko/20100101 Firefox/70.0";
/// Android WebView (Chrome engine).
pub const MOZILLA_ANDROID: &str = "Mozilla/5.0 (Linux; Android 10; AKA-L29 Build/HONORAKA-L29; wv) \
    AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/78.0.3904.108 Mobile Safari/537.36";
/// Internet Explorer 2.0 on Windows 3.1.
pub const MOZILLA_LEGACY_WINDOWS: &str = "Mozilla/1.22 (compatible; MSIE 2.0; Windows 3.1)";
/// Konqueror on Linux.
pub const MOZILLA_LEGACY_LINUX: &str =
    "Mozilla/1.22 (compatible; Konqueror/4.3; Linux) KHTML/4.3.5 (like Gecko)";

/// Default User-Agent identifying this crate and its version.
///
/// Used when neither [`Client::with_user_agent`](crate::Client::with_user_agent)
/// nor a `"User-Agent: …"` header line overrides it.
#[must_use]
pub fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("webfetch/{version}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent_carries_crate_version() {
        let ua = default_user_agent();
        assert_eq!(
            ua.strip_prefix("webfetch/"),
            Some(env!("CARGO_PKG_VERSION")),
            "default UA must be webfetch/<version>: {ua}"
        );
    }

    #[test]
    fn test_table_values_are_plausible_header_values() {
        for ua in [
            GOOGLE_BOT,
            APPLE_TV,
            OPERA_WINDOWS,
            OPERA_LINUX,
            OPERA_MINI,
            MOZILLA_WINDOWS,
            MOZILLA_LINUX,
            MOZILLA_UBUNTU,
            MOZILLA_ANDROID,
            MOZILLA_LEGACY_WINDOWS,
            MOZILLA_LEGACY_LINUX,
        ] {
            assert!(!ua.is_empty());
            assert!(ua.is_ascii(), "UA must be a valid header value: {ua}");
            assert!(!ua.contains('\n'), "UA must be single-line: {ua}");
        }
    }
}
