//! Record filters and distinct-value lookups.

use std::collections::BTreeSet;

use crate::models::{FuelType, PriceRecord};
use crate::stats;

// ---------------------------------------------------------------------------
// RecordQuery
// ---------------------------------------------------------------------------

/// Query interface over a borrowed slice of price records.
///
/// All filters are exact matches and preserve the dataset's order.
pub struct RecordQuery<'a> {
    records: &'a [PriceRecord],
}

impl<'a> RecordQuery<'a> {
    /// Create a new `RecordQuery` over the given records.
    pub fn new(records: &'a [PriceRecord]) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &'a [PriceRecord] {
        self.records
    }

    /// All records for a state, across every period.
    pub fn by_state(&self, state: &str) -> Vec<&'a PriceRecord> {
        self.records.iter().filter(|r| r.state == state).collect()
    }

    /// All records for a region, across every period.
    pub fn by_region(&self, region: &str) -> Vec<&'a PriceRecord> {
        self.records.iter().filter(|r| r.region == region).collect()
    }

    pub fn by_period(&self, period: &str) -> Vec<&'a PriceRecord> {
        self.records.iter().filter(|r| r.period == period).collect()
    }

    /// Look up the record identified by `(state, period)`.
    pub fn get(&self, state: &str, period: &str) -> Option<&'a PriceRecord> {
        self.records
            .iter()
            .find(|r| r.state == state && r.period == period)
    }

    /// Records of the newest period in the dataset.
    ///
    /// Returns an empty vector if the dataset is empty.
    pub fn latest(&self) -> Vec<&'a PriceRecord> {
        match stats::latest_period(self.records) {
            Some(period) => self
                .records
                .iter()
                .filter(|r| r.period == period)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Distinct state names, sorted ascending.
    pub fn states(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.state.as_str()))
    }

    /// Distinct region names, sorted ascending.
    pub fn regions(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.region.as_str()))
    }

    pub fn periods(&self) -> Vec<String> {
        stats::periods(self.records)
    }

    pub fn fuel_types(&self) -> [FuelType; 4] {
        FuelType::ALL
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn distinct<'s>(values: impl Iterator<Item = &'s str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
