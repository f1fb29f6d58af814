//! Nigerian petroleum retail-price SDK for Rust.
//!
//! Loads state-by-state retail prices for PMS, AGO, DPK and LPG from a
//! [`PriceSource`] (the built-in sample, a JSON file, or a remote feed) and
//! derives the figures a price dashboard shows: per-fuel averages for a
//! period, period-on-period changes, the summary table and demo chart series.
//!
//! # Quick start
//!
//! ```
//! use petroleum_prices::{FuelType, PetroleumPrices};
//!
//! let prices = PetroleumPrices::builder().build().unwrap();
//!
//! let current = prices.average_price("2025-01-03", FuelType::Pms).unwrap();
//! let previous = prices.average_price("2024-11-30", FuelType::Pms).unwrap();
//! let change = prices.price_change(current, previous).unwrap();
//! assert!(!change.is_positive);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod chart;
pub mod config;
pub mod dataset;
#[cfg(feature = "duckdb")]
pub mod duckdb_source;
pub mod error;
pub mod models;
pub mod queries;
pub mod source;
pub mod sql_builder;
pub mod stats;

#[cfg(feature = "async")]
pub use async_client::AsyncPetroleumPrices;
pub use cache::CacheManager;
pub use chart::SeriesGenerator;
#[cfg(feature = "duckdb")]
pub use duckdb_source::DuckDbSource;
pub use error::{PriceError, Result};
pub use models::{ChartPoint, ChartRange, FuelPrices, FuelSummary, FuelType, PriceChange, PriceRecord};
pub use source::{FeedSource, JsonFileSource, PriceSource, StaticSource};
pub use sql_builder::SqlBuilder;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// PetroleumPricesBuilder
// ---------------------------------------------------------------------------

enum SourceSpec {
    Sample,
    JsonFile(PathBuf),
    Feed(String),
    Custom(Box<dyn PriceSource>),
}

/// Builder for configuring and constructing a [`PetroleumPrices`] instance.
///
/// Use [`PetroleumPrices::builder()`] to obtain a builder, pick a source,
/// and call [`build()`](PetroleumPricesBuilder::build). Without an explicit
/// source the built-in sample dataset is used.
pub struct PetroleumPricesBuilder {
    source: SourceSpec,
    cache_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
    max_age: Duration,
}

impl Default for PetroleumPricesBuilder {
    fn default() -> Self {
        Self {
            source: SourceSpec::Sample,
            cache_dir: None,
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
            max_age: config::DEFAULT_MAX_AGE,
        }
    }
}

impl PetroleumPricesBuilder {
    /// Use the built-in sample dataset.
    pub fn sample(mut self) -> Self {
        self.source = SourceSpec::Sample;
        self
    }

    /// Load records from a JSON array on disk (`.json` or `.json.gz`).
    pub fn json_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = SourceSpec::JsonFile(path.as_ref().to_path_buf());
        self
    }

    /// Load records from a remote JSON feed, cached locally.
    pub fn feed(mut self, url: impl Into<String>) -> Self {
        self.source = SourceSpec::Feed(url.into());
        self
    }

    /// Use any other [`PriceSource`].
    pub fn source<S: PriceSource + 'static>(mut self, source: S) -> Self {
        self.source = SourceSpec::Custom(Box::new(source));
        self
    }

    /// Set a custom cache directory for feed downloads.
    ///
    /// If not set, the platform-appropriate default cache directory is used
    /// (e.g. `~/.cache/petroleum-prices` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, feeds are never downloaded and only previously cached
    /// copies are used. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for feed downloads. Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Age after which a cached feed is downloaded again. Defaults to 24 hours.
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Build the SDK and load the records once from the chosen source.
    pub fn build(self) -> Result<PetroleumPrices> {
        let source: Box<dyn PriceSource> = match self.source {
            SourceSpec::Sample => Box::new(StaticSource::sample()),
            SourceSpec::JsonFile(path) => Box::new(JsonFileSource::new(path)),
            SourceSpec::Feed(url) => {
                let cache =
                    CacheManager::new(self.cache_dir, self.offline, self.timeout, self.max_age)?;
                Box::new(FeedSource::new(url, cache))
            }
            SourceSpec::Custom(source) => source,
        };

        let records = source.records()?;
        tracing::info!(source = %source.describe(), count = records.len(), "loaded price records");
        Ok(PetroleumPrices { source, records })
    }
}

// ---------------------------------------------------------------------------
// PetroleumPrices
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Holds the loaded records and exposes the statistics and query
/// interfaces as lightweight borrowing wrappers.
///
/// Created via [`PetroleumPrices::builder()`].
pub struct PetroleumPrices {
    source: Box<dyn PriceSource>,
    records: Vec<PriceRecord>,
}

impl PetroleumPrices {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> PetroleumPricesBuilder {
        PetroleumPricesBuilder::default()
    }

    /// The loaded records, in dataset order.
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the record query interface (state/region/period filters).
    pub fn query(&self) -> queries::RecordQuery<'_> {
        queries::RecordQuery::new(&self.records)
    }

    /// Access the fuel summary table interface.
    pub fn summaries(&self) -> queries::SummaryQuery<'_> {
        queries::SummaryQuery::new(&self.records)
    }

    // -- Statistics ----------------------------------------------------------

    /// Records of `period`, in dataset order. See [`stats::latest_records_for`].
    pub fn latest_records_for<'a>(
        &'a self,
        period: &'a str,
    ) -> impl Iterator<Item = &'a PriceRecord> + Clone + 'a {
        stats::latest_records_for(&self.records, period)
    }

    /// Average `fuel` price across the records of `period`.
    pub fn average_price(&self, period: &str, fuel: FuelType) -> Result<f64> {
        stats::average_price(&self.records, period, fuel)
    }

    /// Signed and percentage change between two averages.
    pub fn price_change(&self, current: f64, previous: f64) -> Result<PriceChange> {
        stats::price_change(current, previous)
    }

    /// A chart series for `fuel` anchored on its average in the latest period.
    pub fn chart(
        &self,
        generator: &mut SeriesGenerator,
        fuel: FuelType,
        range: ChartRange,
    ) -> Result<Vec<ChartPoint>> {
        let period = stats::latest_period(&self.records)
            .ok_or_else(|| PriceError::empty("<latest>"))?;
        generator.generate_anchored(&self.records, &period, fuel, range)
    }

    // -- Utility methods -----------------------------------------------------

    /// Reload records from the source, replacing the loaded set.
    ///
    /// Returns the number of records now loaded. On failure the previous
    /// records are kept.
    pub fn refresh(&mut self) -> Result<usize> {
        let records = self.source.records()?;
        if records != self.records {
            tracing::info!(
                source = %self.source.describe(),
                before = self.records.len(),
                after = records.len(),
                "price records changed on refresh"
            );
        }
        self.records = records;
        Ok(self.records.len())
    }

    /// Return a reference to the underlying source for advanced usage.
    pub fn source(&self) -> &dyn PriceSource {
        self.source.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PetroleumPrices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PetroleumPrices(source={}, records={}, periods=[{}])",
            self.source.describe(),
            self.records.len(),
            stats::periods(&self.records).join(", ")
        )
    }
}
