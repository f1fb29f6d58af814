//! Read-only data sources for price records.
//!
//! [`PriceSource`] is the seam between the statistics and wherever the
//! records come from: the built-in sample, a JSON file, or a remote feed.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use flate2::read::GzDecoder;

use crate::cache::CacheManager;
use crate::dataset;
use crate::error::{PriceError, Result};
use crate::models::PriceRecord;
use crate::stats;

// ---------------------------------------------------------------------------
// PriceSource
// ---------------------------------------------------------------------------

/// Produces the records of a price dataset.
pub trait PriceSource: Send + Sync {
    /// Every record, in dataset order.
    fn records(&self) -> Result<Vec<PriceRecord>>;

    /// Records of a single period, in dataset order.
    fn records_for_period(&self, period: &str) -> Result<Vec<PriceRecord>> {
        let records = self.records()?;
        Ok(stats::latest_records_for(&records, period)
            .cloned()
            .collect())
    }

    /// Short human-readable description, used in logs and `Display`.
    fn describe(&self) -> String;
}

// ---------------------------------------------------------------------------
// StaticSource
// ---------------------------------------------------------------------------

/// A fixed, in-memory set of records.
#[derive(Debug, Clone)]
pub struct StaticSource {
    records: Vec<PriceRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    /// The built-in sample dataset.
    pub fn sample() -> Self {
        Self::new(dataset::sample_records())
    }
}

impl PriceSource for StaticSource {
    fn records(&self) -> Result<Vec<PriceRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("static({} records)", self.records.len())
    }
}

// ---------------------------------------------------------------------------
// JsonFileSource
// ---------------------------------------------------------------------------

/// A JSON array of records on disk. Files ending in `.gz` are decompressed.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PriceSource for JsonFileSource {
    fn records(&self) -> Result<Vec<PriceRecord>> {
        if !self.path.exists() {
            return Err(PriceError::NotFound(format!(
                "Price file {} does not exist",
                self.path.display()
            )));
        }
        read_records_file(&self.path)
    }

    fn describe(&self) -> String {
        format!("file({})", self.path.display())
    }
}

// ---------------------------------------------------------------------------
// FeedSource
// ---------------------------------------------------------------------------

/// A remote JSON feed, fetched and cached through a [`CacheManager`].
pub struct FeedSource {
    url: String,
    cache: Mutex<CacheManager>,
}

impl FeedSource {
    pub fn new(url: impl Into<String>, cache: CacheManager) -> Self {
        Self {
            url: url.into(),
            cache: Mutex::new(cache),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Remove the cached copy so the next load downloads again.
    pub fn clear_cache(&self) -> Result<()> {
        self.lock()?.clear()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, CacheManager>> {
        self.cache
            .lock()
            .map_err(|_| PriceError::InvalidArgument("Cache lock poisoned".into()))
    }
}

impl PriceSource for FeedSource {
    fn records(&self) -> Result<Vec<PriceRecord>> {
        self.lock()?.load_feed(&self.url)
    }

    fn describe(&self) -> String {
        format!("feed({})", self.url)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a JSON array of records, handling `.gz` files transparently.
pub(crate) fn read_records_file(path: &Path) -> Result<Vec<PriceRecord>> {
    let file = File::open(path)?;
    let records = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        serde_json::from_reader(BufReader::new(GzDecoder::new(file)))?
    } else {
        serde_json::from_reader(BufReader::new(file))?
    };
    Ok(records)
}
