//! Shared fixtures for the petroleum-prices integration tests.

#![allow(dead_code)]

use petroleum_prices::{FuelPrices, PriceRecord};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Build a record with prices given in `PMS, AGO, DPK, LPG` order.
pub fn record(state: &str, period: &str, region: &str, prices: [f64; 4]) -> PriceRecord {
    let [pms, ago, dpk, lpg] = prices;
    PriceRecord::new(state, period, region, FuelPrices { pms, ago, dpk, lpg })
}

/// Three periods, uneven counts, one region spanning two states.
pub fn small_dataset() -> Vec<PriceRecord> {
    vec![
        record("Lagos", "2024-12-01", "South West", [1000.0, 1200.0, 1400.0, 1300.0]),
        record("Ogun", "2024-12-01", "South West", [1010.0, 1210.0, 1390.0, 1310.0]),
        record("Kano", "2024-12-01", "North West", [990.0, 1190.0, 1410.0, 1290.0]),
        record("Lagos", "2025-01-01", "South West", [1100.0, 1180.0, 1400.0, 1350.0]),
        record("Kano", "2025-01-01", "North West", [1080.0, 1170.0, 1420.0, 1330.0]),
        record("Lagos", "2025-02-01", "South West", [1100.0, 1150.0, 1400.0, 1340.0]),
    ]
}

/// Write `records` as a JSON array into `dir/name`.
pub fn write_json(dir: &Path, name: &str, records: &[PriceRecord]) -> PathBuf {
    let path = dir.join(name);
    let json = serde_json::to_string(records).unwrap();
    fs::write(&path, json).unwrap();
    path
}

/// Write `records` as a JSON array at `path`.
pub fn write_json_at(path: &Path, records: &[PriceRecord]) {
    fs::write(path, serde_json::to_string(records).unwrap()).unwrap();
}

/// Write `records` as a gzipped JSON array into `dir/name`.
pub fn write_json_gz(dir: &Path, name: &str, records: &[PriceRecord]) -> PathBuf {
    let path = dir.join(name);
    let file = fs::File::create(&path).unwrap();
    let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    encoder
        .write_all(serde_json::to_string(records).unwrap().as_bytes())
        .unwrap();
    encoder.finish().unwrap();
    path
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
