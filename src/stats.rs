//! Price statistics over a read-only slice of [`PriceRecord`]s.
//!
//! Every function here is pure: no I/O, no mutation of its input, and the
//! same arguments always give the same result.

use std::collections::BTreeSet;

use crate::error::{PriceError, Result};
use crate::models::{FuelSummary, FuelType, PriceChange, PriceRecord};

/// Records whose period equals `period` exactly, in their original order.
///
/// The returned iterator is lazy and `Clone`, so callers can walk the same
/// selection more than once without re-filtering by hand.
pub fn latest_records_for<'a>(
    records: &'a [PriceRecord],
    period: &'a str,
) -> impl Iterator<Item = &'a PriceRecord> + Clone + 'a {
    records.iter().filter(move |r| r.period == period)
}

/// Arithmetic mean of `fuel` prices across the records of `period`.
///
/// Fails with [`PriceError::EmptyResultSet`] when no record matches.
pub fn average_price(records: &[PriceRecord], period: &str, fuel: FuelType) -> Result<f64> {
    let (sum, count) = latest_records_for(records, period)
        .fold((0.0_f64, 0_usize), |(sum, count), r| (sum + r.price(fuel), count + 1));

    if count == 0 {
        return Err(PriceError::empty(period));
    }
    Ok(sum / count as f64)
}

/// Signed and percentage change from `previous` to `current`.
///
/// Fails with [`PriceError::InvalidDivisor`] when `previous` is zero and with
/// [`PriceError::InvalidArgument`] when either value is not finite.
pub fn price_change(current: f64, previous: f64) -> Result<PriceChange> {
    if previous == 0.0 {
        return Err(PriceError::InvalidDivisor);
    }
    if !current.is_finite() || !previous.is_finite() {
        return Err(PriceError::InvalidArgument(format!(
            "Averages must be finite (current={}, previous={})",
            current, previous
        )));
    }

    let change = current - previous;
    Ok(PriceChange {
        change,
        percentage: change / previous * 100.0,
        is_positive: change >= 0.0,
    })
}

/// Distinct periods present in `records`, oldest first.
pub fn periods(records: &[PriceRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.period.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn latest_period(records: &[PriceRecord]) -> Option<String> {
    records.iter().map(|r| r.period.as_str()).max().map(str::to_string)
}

/// The newest period strictly older than `period`.
pub fn previous_period(records: &[PriceRecord], period: &str) -> Option<String> {
    records
        .iter()
        .map(|r| r.period.as_str())
        .filter(|p| *p < period)
        .max()
        .map(str::to_string)
}

/// Compare the average `fuel` price of `current` against `previous`.
pub fn fuel_summary(
    records: &[PriceRecord],
    fuel: FuelType,
    current: &str,
    previous: &str,
) -> Result<FuelSummary> {
    let current_average = average_price(records, current, fuel)?;
    let previous_average = average_price(records, previous, fuel)?;
    let change = price_change(current_average, previous_average)?;
    let trend = latest_records_for(records, current)
        .map(|r| r.price(fuel))
        .collect();

    Ok(FuelSummary {
        fuel,
        label: fuel.label(),
        current_average,
        previous_average,
        change,
        trend,
    })
}

/// [`fuel_summary`] for every fuel type, in [`FuelType::ALL`] order.
pub fn fuel_summaries(
    records: &[PriceRecord],
    current: &str,
    previous: &str,
) -> Result<Vec<FuelSummary>> {
    FuelType::ALL
        .into_iter()
        .map(|fuel| fuel_summary(records, fuel, current, previous))
        .collect()
}
