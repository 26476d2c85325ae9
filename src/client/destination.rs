//! Destination-path resolution for downloads.
//!
//! The file name comes from the URL's path portion (percent-decoded last
//! segment); when the URL yields nothing usable the current Unix timestamp
//! stands in. Collisions are avoided by prefixing `[1] `, `[2] `, … `[999] `
//! to the file name; if every slot is taken the timestamp is prefixed instead
//! without re-checking, and a warning is logged since that fallback can still
//! collide.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};
use url::Url;

/// Collision disambiguator bound. Beyond this the timestamp fallback is used.
const MAX_COLLISION_SUFFIX: u32 = 999;

/// Seconds since the Unix epoch, `0` if the clock reads before 1970.
pub(crate) fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Extracts the file name from the URL's path portion.
///
/// The last non-empty path segment is percent-decoded; anything before a
/// remaining path separator is discarded so a decoded `%2F` cannot escape the
/// destination directory.
pub(crate) fn file_name_from_url(url: &Url) -> Option<String> {
    let mut segments = url.path_segments()?;
    let last = segments.next_back()?;
    if last.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(last).map_or_else(
        |e| {
            debug!(segment = %last, error = %e, "URL decoding failed, using raw segment");
            last.to_string()
        },
        std::borrow::Cow::into_owned,
    );
    let name = decoded
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .to_string();
    (!name.is_empty()).then_some(name)
}

/// The user's Downloads directory: `$HOME/Downloads` (or
/// `%USERPROFILE%\Downloads` on Windows), falling back to `./Downloads` when
/// no home is set.
pub(crate) fn default_downloads_dir() -> PathBuf {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    home.join("Downloads")
}

/// Resolves a destination path under `dir` that does not already exist.
///
/// Tries `name`, then `[1] name` … `[999] name`; when all are taken, prefixes
/// the current timestamp instead. That final candidate is not re-checked, so
/// it can still collide, so a warning is emitted.
pub(crate) fn resolve_unique_path(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    for index in 1..=MAX_COLLISION_SUFFIX {
        let suggested = dir.join(format!("[{index}] {name}"));
        if !suggested.exists() {
            return suggested;
        }
    }

    let timestamp = unix_timestamp();
    warn!(
        dir = %dir.display(),
        name = %name,
        "all {MAX_COLLISION_SUFFIX} collision slots taken, falling back to timestamp prefix"
    );
    dir.join(format!("[{timestamp}] {name}"))
}
