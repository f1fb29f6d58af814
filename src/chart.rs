//! Demo chart series.
//!
//! Generates a bounded random walk around a fuel's reference price, the
//! way the dashboard's price chart fills its area plot. The series is
//! illustrative only; it is not derived from historical data beyond the
//! optional anchor average.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{PriceError, Result};
use crate::models::{ChartPoint, ChartRange, FuelType, PriceChange, PriceRecord};
use crate::stats;

/// Fraction of the base price the walk may drift either way.
pub const DEFAULT_BAND_SPREAD: f64 = 0.15;

/// Reference price the walk starts near when no dataset anchor is given.
pub fn base_price(fuel: FuelType) -> f64 {
    match fuel {
        FuelType::Pms => 1052.0,
        FuelType::Ago => 1200.0,
        FuelType::Dpk => 1350.0,
        FuelType::Lpg => 1400.0,
    }
}

// ---------------------------------------------------------------------------
// PriceBand
// ---------------------------------------------------------------------------

/// Inclusive bounds every generated price is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub floor: f64,
    pub ceiling: f64,
}

impl PriceBand {
    pub fn new(floor: f64, ceiling: f64) -> Result<Self> {
        if !floor.is_finite() || !ceiling.is_finite() || floor > ceiling {
            return Err(PriceError::InvalidArgument(format!(
                "Invalid price band [{}, {}]",
                floor, ceiling
            )));
        }
        Ok(Self { floor, ceiling })
    }

    /// Band of `base * (1 ± spread)`.
    pub fn around(base: f64, spread: f64) -> Self {
        let delta = base.abs() * spread.abs();
        Self {
            floor: base - delta,
            ceiling: base + delta,
        }
    }

    pub fn clamp(&self, price: f64) -> f64 {
        price.clamp(self.floor, self.ceiling)
    }
}

// ---------------------------------------------------------------------------
// SeriesGenerator
// ---------------------------------------------------------------------------

/// Random-walk generator for chart series.
///
/// Owns its RNG; use [`seeded`](Self::seeded) for reproducible output.
pub struct SeriesGenerator {
    rng: StdRng,
    band: Option<PriceBand>,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesGenerator {
    /// A generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            band: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            band: None,
        }
    }

    /// Use a fixed band instead of the default spread around the base price.
    pub fn with_band(mut self, band: PriceBand) -> Self {
        self.band = Some(band);
        self
    }

    /// Series for `fuel` around its reference [`base_price`].
    pub fn generate(&mut self, fuel: FuelType, range: ChartRange) -> Vec<ChartPoint> {
        self.walk(base_price(fuel), range)
    }

    /// Series around an explicit base price.
    pub fn generate_from(&mut self, base: f64, range: ChartRange) -> Result<Vec<ChartPoint>> {
        if !base.is_finite() || base <= 0.0 {
            return Err(PriceError::InvalidArgument(format!(
                "Base price must be positive and finite, got {}",
                base
            )));
        }
        Ok(self.walk(base, range))
    }

    /// Series anchored on the dataset's average `fuel` price for `period`.
    pub fn generate_anchored(
        &mut self,
        records: &[PriceRecord],
        period: &str,
        fuel: FuelType,
        range: ChartRange,
    ) -> Result<Vec<ChartPoint>> {
        let base = stats::average_price(records, period, fuel)?;
        self.generate_from(base, range)
    }

    fn walk(&mut self, base: f64, range: ChartRange) -> Vec<ChartPoint> {
        let band = self
            .band
            .unwrap_or_else(|| PriceBand::around(base, DEFAULT_BAND_SPREAD));
        let (volatility_scale, trend_scale, momentum_scale) = if range.is_intraday() {
            (2.0, 1.0, 1.0)
        } else {
            (8.0, 5.0, 3.0)
        };

        let mut price = base - (self.rng.gen::<f64>() * 40.0 - 20.0);
        let mut points = Vec::with_capacity(range.points());

        for index in 0..range.points() {
            let volatility = (self.rng.gen::<f64>() - 0.5) * volatility_scale;
            let trend = (index as f64 * 0.05).sin() * trend_scale;
            let momentum = (self.rng.gen::<f64>() - 0.45) * momentum_scale;

            price = band.clamp(price + volatility + trend + momentum);

            points.push(ChartPoint {
                index,
                price: round_cents(price),
                volume: self.rng.gen::<f64>() * 1_000_000.0 + 500_000.0,
            });
        }

        points
    }
}

/// Change between the last two points of a series.
///
/// Fails with [`PriceError::InvalidArgument`] for series shorter than two points.
pub fn series_change(points: &[ChartPoint]) -> Result<PriceChange> {
    match points {
        [.., previous, current] => stats::price_change(current.price, previous.price),
        _ => Err(PriceError::InvalidArgument(format!(
            "Need at least two points to compute a change, got {}",
            points.len()
        ))),
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
