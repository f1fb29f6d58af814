//! Per-fuel price table: current average, previous average and change.

use crate::error::{PriceError, Result};
use crate::models::{FuelSummary, PriceRecord};
use crate::stats;

// ---------------------------------------------------------------------------
// SummaryQuery
// ---------------------------------------------------------------------------

/// Builds the rows of the retail price table from a borrowed record slice.
pub struct SummaryQuery<'a> {
    records: &'a [PriceRecord],
}

impl<'a> SummaryQuery<'a> {
    /// Create a new `SummaryQuery` over the given records.
    pub fn new(records: &'a [PriceRecord]) -> Self {
        Self { records }
    }

    /// One row per fuel type comparing `current` against `previous`.
    pub fn table(&self, current: &str, previous: &str) -> Result<Vec<FuelSummary>> {
        stats::fuel_summaries(self.records, current, previous)
    }

    /// The table for the newest period against the one before it.
    ///
    /// Fails with [`PriceError::EmptyResultSet`] if the dataset does not hold
    /// at least two periods.
    pub fn latest_table(&self) -> Result<Vec<FuelSummary>> {
        let (current, previous) = self.latest_pair()?;
        self.table(&current, &previous)
    }

    /// Rows whose product label contains `term`, ignoring case.
    ///
    /// A blank term matches every row.
    pub fn search(&self, term: &str, current: &str, previous: &str) -> Result<Vec<FuelSummary>> {
        let needle = term.trim().to_lowercase();
        let rows = self.table(current, previous)?;
        if needle.is_empty() {
            return Ok(rows);
        }
        Ok(rows
            .into_iter()
            .filter(|row| row.label.to_lowercase().contains(&needle))
            .collect())
    }

    /// [`search`](Self::search) against the newest two periods.
    pub fn search_latest(&self, term: &str) -> Result<Vec<FuelSummary>> {
        let (current, previous) = self.latest_pair()?;
        self.search(term, &current, &previous)
    }

    fn latest_pair(&self) -> Result<(String, String)> {
        let current = stats::latest_period(self.records)
            .ok_or_else(|| PriceError::empty("<latest>"))?;
        let previous = stats::previous_period(self.records, &current)
            .ok_or_else(|| PriceError::empty(&format!("<before {}>", current)))?;
        Ok((current, previous))
    }
}
