//! Data sources, feed cache and the `PetroleumPrices` entry point.

mod common;

use common::{record, small_dataset, write_json, write_json_at, write_json_gz};
use petroleum_prices::{
    CacheManager, FeedSource, FuelType, JsonFileSource, PetroleumPrices, PriceError, PriceRecord,
    PriceSource, Result, SeriesGenerator, StaticSource,
};
use petroleum_prices::{config, ChartRange};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const FEED_URL: &str = "https://feeds.invalid/petroleum/prices.json";

// ---------------------------------------------------------------------------
// Builder defaults
// ---------------------------------------------------------------------------

#[test]
fn default_builder_loads_sample() {
    let prices = PetroleumPrices::builder().build().unwrap();
    assert_eq!(prices.records().len(), 12);
    assert_eq!(prices.latest_records_for(config::SAMPLE_LATEST_PERIOD).count(), 4);
    assert_eq!(prices.latest_records_for(config::SAMPLE_PREVIOUS_PERIOD).count(), 8);
}

#[test]
fn display_lists_source_and_periods() {
    let prices = PetroleumPrices::builder().sample().build().unwrap();
    let text = prices.to_string();
    assert!(text.contains("static(12 records)"));
    assert!(text.contains("2024-11-30, 2025-01-03"));
}

#[test]
fn chart_is_anchored_on_latest_period() {
    let prices = PetroleumPrices::builder().build().unwrap();
    let mut gen = SeriesGenerator::seeded(4);
    let series = prices.chart(&mut gen, FuelType::Dpk, ChartRange::OneWeek).unwrap();
    assert_eq!(series.len(), 7);
}

// ---------------------------------------------------------------------------
// StaticSource
// ---------------------------------------------------------------------------

#[test]
fn static_records_for_period_filters() {
    let source = StaticSource::new(small_dataset());
    let recs = source.records_for_period("2025-01-01").unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].state, "Lagos");
    assert_eq!(recs[1].state, "Kano");
}

// ---------------------------------------------------------------------------
// JsonFileSource
// ---------------------------------------------------------------------------

#[test]
fn json_file_round_trips_through_builder() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_json(tmp.path(), "prices.json", &small_dataset());

    let prices = PetroleumPrices::builder().json_file(&path).build().unwrap();
    assert_eq!(prices.records(), small_dataset().as_slice());
}

#[test]
fn json_file_accepts_dataset_field_names() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("raw.json");
    fs::write(
        &path,
        r#"[{"State":"Lagos","Period":"2025-01-03","AGO":1140.58,"PMS":982.29,"DPK":1475,"LPG":1237.5,"Region":"South West"}]"#,
    )
    .unwrap();

    let records = JsonFileSource::new(&path).records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].state, "Lagos");
    assert_eq!(records[0].price(FuelType::Pms), 982.29);
    assert_eq!(records[0].price(FuelType::Dpk), 1475.0);
}

#[test]
fn gzipped_json_file_is_decompressed() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_json_gz(tmp.path(), "prices.json.gz", &small_dataset());

    let records = JsonFileSource::new(&path).records().unwrap();
    assert_eq!(records.len(), 6);
}

#[test]
fn missing_json_file_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let result = PetroleumPrices::builder()
        .json_file(tmp.path().join("nope.json"))
        .build();
    assert!(matches!(result, Err(PriceError::NotFound(_))));
}

#[test]
fn malformed_json_file_is_json_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("bad.json");
    fs::write(&path, "[{\"State\": 1}]").unwrap();
    assert!(matches!(
        JsonFileSource::new(&path).records(),
        Err(PriceError::Json(_))
    ));
}

#[test]
fn refresh_picks_up_file_changes() {
    let tmp = tempfile::tempdir().unwrap();
    let mut data = small_dataset();
    let path = write_json(tmp.path(), "prices.json", &data);

    let mut prices = PetroleumPrices::builder().json_file(&path).build().unwrap();
    assert_eq!(prices.records().len(), 6);

    data.push(record("Oyo", "2025-02-01", "South West", [1105.0, 1160.0, 1390.0, 1345.0]));
    write_json(tmp.path(), "prices.json", &data);

    assert_eq!(prices.refresh().unwrap(), 7);
    assert_eq!(prices.query().by_state("Oyo").len(), 1);
}

#[test]
fn failed_refresh_keeps_previous_records() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_json(tmp.path(), "prices.json", &small_dataset());

    let mut prices = PetroleumPrices::builder().json_file(&path).build().unwrap();
    fs::remove_file(&path).unwrap();

    assert!(prices.refresh().is_err());
    assert_eq!(prices.records().len(), 6);
}

// ---------------------------------------------------------------------------
// FeedSource / CacheManager
// ---------------------------------------------------------------------------

fn cache(dir: &std::path::Path, offline: bool, max_age: Duration) -> CacheManager {
    CacheManager::new(Some(dir.to_path_buf()), offline, Duration::from_secs(5), max_age).unwrap()
}

#[test]
fn fresh_cached_feed_is_served_without_download() {
    let tmp = tempfile::tempdir().unwrap();
    let cm = cache(tmp.path(), true, config::DEFAULT_MAX_AGE);
    write_json_at(&cm.feed_path(FEED_URL), &small_dataset());

    let prices = PetroleumPrices::builder()
        .feed(FEED_URL)
        .cache_dir(tmp.path())
        .build()
        .unwrap();
    assert_eq!(prices.records().len(), 6);
    assert_eq!(prices.source().describe(), format!("feed({})", FEED_URL));
}

#[test]
fn offline_without_cache_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let result = PetroleumPrices::builder()
        .feed(FEED_URL)
        .cache_dir(tmp.path())
        .offline(true)
        .build();
    assert!(matches!(result, Err(PriceError::NotFound(_))));
}

#[test]
fn offline_serves_stale_cache() {
    let tmp = tempfile::tempdir().unwrap();
    let cm = cache(tmp.path(), true, Duration::ZERO);
    let path = cm.feed_path(FEED_URL);
    write_json_at(&path, &small_dataset());
    std::thread::sleep(Duration::from_millis(20));
    assert!(cm.is_stale(&path));

    let source = FeedSource::new(FEED_URL, cm);
    assert_eq!(source.records().unwrap().len(), 6);
}

#[test]
fn corrupt_cached_feed_is_removed() {
    let tmp = tempfile::tempdir().unwrap();
    let cm = cache(tmp.path(), true, config::DEFAULT_MAX_AGE);
    let path = cm.feed_path(FEED_URL);
    fs::write(&path, "{ truncated").unwrap();

    let source = FeedSource::new(FEED_URL, cm);
    assert!(matches!(source.records(), Err(PriceError::NotFound(_))));
    assert!(!path.exists());
}

#[test]
fn gz_feed_uses_gz_cache_file() {
    let tmp = tempfile::tempdir().unwrap();
    let cm = cache(tmp.path(), true, config::DEFAULT_MAX_AGE);
    assert!(cm
        .feed_path("https://feeds.invalid/prices.json.gz")
        .to_string_lossy()
        .ends_with("prices.json.gz"));
    assert!(cm
        .feed_path(FEED_URL)
        .to_string_lossy()
        .ends_with("-prices.json"));
}

#[test]
fn distinct_feeds_use_distinct_cache_files() {
    let tmp = tempfile::tempdir().unwrap();
    let cm = cache(tmp.path(), true, config::DEFAULT_MAX_AGE);

    let lagos = cm.feed_path("https://a.invalid/lagos.json");
    let kano = cm.feed_path("https://b.invalid/kano.json");
    let same_name = cm.feed_path("https://c.invalid/lagos.json");
    assert_ne!(lagos, kano);
    assert_ne!(lagos, same_name);
    assert_eq!(lagos, cm.feed_path("https://a.invalid/lagos.json"));
    assert_eq!(lagos.parent(), Some(tmp.path()));
}

#[test]
fn feed_without_file_segment_uses_default_name() {
    let tmp = tempfile::tempdir().unwrap();
    let cm = cache(tmp.path(), true, config::DEFAULT_MAX_AGE);
    let path = cm.feed_path("https://feeds.invalid/api/?date=2025-01-03");
    assert!(path
        .to_string_lossy()
        .ends_with(&format!("-{}", config::FEED_FILE)));
}

#[test]
fn second_feed_does_not_read_first_feeds_cache() {
    let tmp = tempfile::tempdir().unwrap();
    let first = cache(tmp.path(), true, config::DEFAULT_MAX_AGE);
    write_json_at(&first.feed_path("https://a.invalid/lagos.json"), &small_dataset());

    let second = FeedSource::new(
        "https://b.invalid/kano.json",
        cache(tmp.path(), true, config::DEFAULT_MAX_AGE),
    );
    assert!(matches!(second.records(), Err(PriceError::NotFound(_))));
}

#[test]
fn missing_file_is_stale() {
    let tmp = tempfile::tempdir().unwrap();
    let cm = cache(tmp.path(), true, config::DEFAULT_MAX_AGE);
    assert!(cm.is_stale(&tmp.path().join("absent.json")));
}

#[test]
fn clear_cache_removes_feed() {
    let tmp = tempfile::tempdir().unwrap();
    let cache_dir = tmp.path().join("cache");
    let cm = cache(&cache_dir, true, config::DEFAULT_MAX_AGE);
    let path = cm.feed_path(FEED_URL);
    write_json_at(&path, &small_dataset());

    let source = FeedSource::new(FEED_URL, cm);
    source.clear_cache().unwrap();
    assert!(cache_dir.exists());
    assert!(!path.exists());
}

// ---------------------------------------------------------------------------
// Custom sources
// ---------------------------------------------------------------------------

struct CountingSource {
    loads: Arc<AtomicUsize>,
    records: Mutex<Vec<PriceRecord>>,
}

impl PriceSource for CountingSource {
    fn records(&self) -> Result<Vec<PriceRecord>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.lock().unwrap().clone())
    }

    fn describe(&self) -> String {
        "counting".to_string()
    }
}

#[test]
fn custom_source_is_loaded_once_per_build_and_refresh() {
    let loads = Arc::new(AtomicUsize::new(0));
    let source = CountingSource {
        loads: loads.clone(),
        records: Mutex::new(small_dataset()),
    };

    let mut prices = PetroleumPrices::builder().source(source).build().unwrap();
    assert_eq!(loads.load(Ordering::SeqCst), 1);

    prices.average_price("2025-01-01", FuelType::Ago).unwrap();
    prices.summaries().latest_table().unwrap();
    assert_eq!(loads.load(Ordering::SeqCst), 1);

    prices.refresh().unwrap();
    assert_eq!(loads.load(Ordering::SeqCst), 2);
}

#[test]
fn empty_source_builds_but_averages_fail() {
    let prices = PetroleumPrices::builder()
        .source(StaticSource::new(Vec::new()))
        .build()
        .unwrap();
    assert!(matches!(
        prices.average_price("2025-01-03", FuelType::Pms),
        Err(PriceError::EmptyResultSet { .. })
    ));
    let mut gen = SeriesGenerator::seeded(0);
    assert!(prices
        .chart(&mut gen, FuelType::Pms, ChartRange::OneDay)
        .is_err());
}
