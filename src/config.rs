use std::path::PathBuf;
use std::time::Duration;

/// Cache file name used when a feed URL has no usable last path segment.
pub const FEED_FILE: &str = "prices.json";

/// Period of the newest snapshot in the built-in sample.
pub const SAMPLE_LATEST_PERIOD: &str = "2025-01-03";

/// Period of the snapshot preceding [`SAMPLE_LATEST_PERIOD`].
pub const SAMPLE_PREVIOUS_PERIOD: &str = "2024-11-30";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// A cached feed older than this is re-downloaded.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("petroleum-prices")
    } else {
        PathBuf::from(".petroleum-prices-cache")
    }
}
