//! Local file cache for remote price feeds.
//!
//! Downloads a feed into the cache directory and serves the cached copy
//! until it is older than `max_age`. Offline mode never touches the network.

use crate::config;
use crate::error::{PriceError, Result};
use crate::models::PriceRecord;
use crate::source;
use reqwest::blocking::Client;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Downloads and caches price feed files.
pub struct CacheManager {
    /// Directory where cached files are stored.
    pub cache_dir: PathBuf,
    /// If true, never download (use cached files only).
    pub offline: bool,
    /// Cached files older than this are considered stale.
    pub max_age: Duration,
    timeout: Duration,
    client: Option<Client>,
}

impl CacheManager {
    /// Create a new cache manager.
    ///
    /// If `cache_dir` is `None`, uses the platform-appropriate default cache directory.
    /// Creates the cache directory if it does not exist.
    pub fn new(
        cache_dir: Option<PathBuf>,
        offline: bool,
        timeout: Duration,
        max_age: Duration,
    ) -> Result<Self> {
        let dir = cache_dir.unwrap_or_else(config::default_cache_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            cache_dir: dir,
            offline,
            max_age,
            timeout,
            client: None,
        })
    }

    /// Lazy HTTP client, created on first use.
    pub fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| PriceError::InvalidArgument("HTTP client unavailable".into()))
    }

    /// Local path a feed URL is cached under.
    ///
    /// The file name is a hash of the full URL followed by the URL's last
    /// path segment, so distinct feeds never share a cache file and a
    /// `.gz` feed keeps its suffix.
    pub fn feed_path(&self, url: &str) -> PathBuf {
        let path = url.split(|c: char| c == '?' || c == '#').next().unwrap_or(url);
        let segment: String = path
            .rsplit('/')
            .next()
            .unwrap_or("")
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
            .collect();
        let segment = if segment.is_empty() || segment.chars().all(|c| c == '.') {
            config::FEED_FILE.to_string()
        } else {
            segment
        };

        let mut hasher = DefaultHasher::new();
        url.hash(&mut hasher);
        self.cache_dir
            .join(format!("{:016x}-{}", hasher.finish(), segment))
    }

    /// Whether a cached file is missing or older than `max_age`.
    pub fn is_stale(&self, path: &Path) -> bool {
        let modified = match fs::metadata(path).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(_) => return true,
        };
        match SystemTime::now().duration_since(modified) {
            Ok(age) => age > self.max_age,
            // Modified in the future: clock skew, treat as fresh.
            Err(_) => false,
        }
    }

    /// Download a single file.
    ///
    /// Downloads to a temp file first and renames on success, so an
    /// interrupted download never leaves a corrupt partial file behind.
    fn download_file(&mut self, url: &str, dest: &Path) -> Result<()> {
        tracing::info!(url, dest = %dest.display(), "downloading price feed");

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_dest = dest.with_extension(format!(
            "{}.tmp",
            dest.extension().and_then(|e| e.to_str()).unwrap_or("")
        ));

        let client = self.client()?.clone();
        let result = (|| -> Result<()> {
            let resp = client.get(url).send()?.error_for_status()?;
            let bytes = resp.bytes()?;
            fs::write(&tmp_dest, &bytes)?;
            fs::rename(&tmp_dest, dest)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_dest);
        }

        result
    }

    /// Ensure the feed at `url` is cached locally, downloading if needed.
    ///
    /// In offline mode a stale cached copy is still served; a missing one
    /// fails with [`PriceError::NotFound`].
    pub fn ensure_feed(&mut self, url: &str) -> Result<PathBuf> {
        let local_path = self.feed_path(url);

        if self.is_stale(&local_path) {
            if self.offline {
                if local_path.exists() {
                    tracing::debug!(path = %local_path.display(), "offline: serving stale feed");
                    return Ok(local_path);
                }
                return Err(PriceError::NotFound(format!(
                    "Feed {} not cached and offline mode is enabled",
                    url
                )));
            }
            self.download_file(url, &local_path)?;
        }

        Ok(local_path)
    }

    /// Load the records of a cached feed, downloading it if needed.
    ///
    /// If the cached file is corrupt it is deleted so the next call
    /// re-downloads a fresh copy.
    pub fn load_feed(&mut self, url: &str) -> Result<Vec<PriceRecord>> {
        let path = self.ensure_feed(url)?;

        match source::read_records_file(&path) {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded cached feed");
                Ok(records)
            }
            Err(PriceError::Json(e)) => {
                let message = format!(
                    "Cache file '{}' was corrupt and has been removed. \
                     Retry to re-download. Original error: {}",
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("unknown"),
                    e
                );
                tracing::warn!(path = %path.display(), error = %e, "corrupt cache file, removing");
                let _ = fs::remove_file(&path);
                Err(PriceError::NotFound(message))
            }
            Err(e) => Err(e),
        }
    }

    /// Remove all cached files and recreate the cache directory.
    pub fn clear(&self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }
}
