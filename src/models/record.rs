use serde::{Deserialize, Serialize};

use super::fuel::FuelType;

// ---------------------------------------------------------------------------
// FuelPrices — one price per fuel type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelPrices {
    #[serde(rename = "PMS")]
    pub pms: f64,
    #[serde(rename = "AGO")]
    pub ago: f64,
    #[serde(rename = "DPK")]
    pub dpk: f64,
    #[serde(rename = "LPG")]
    pub lpg: f64,
}

impl FuelPrices {
    pub fn get(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Pms => self.pms,
            FuelType::Ago => self.ago,
            FuelType::Dpk => self.dpk,
            FuelType::Lpg => self.lpg,
        }
    }

    /// Iterate `(fuel, price)` pairs in [`FuelType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FuelType, f64)> + '_ {
        FuelType::ALL.into_iter().map(move |fuel| (fuel, self.get(fuel)))
    }
}

// ---------------------------------------------------------------------------
// PriceRecord — retail prices for one state on one period
// ---------------------------------------------------------------------------

/// A single row of the dataset. `(state, period)` identifies a record.
///
/// Serialized with the dataset's own field names:
/// `{"State", "Period", "Region", "AGO", "PMS", "DPK", "LPG"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceRecord {
    pub state: String,
    /// ISO calendar date (`YYYY-MM-DD`) of the pricing snapshot.
    pub period: String,
    pub region: String,
    #[serde(flatten)]
    pub prices: FuelPrices,
}

impl PriceRecord {
    pub fn new(
        state: impl Into<String>,
        period: impl Into<String>,
        region: impl Into<String>,
        prices: FuelPrices,
    ) -> Self {
        Self {
            state: state.into(),
            period: period.into(),
            region: region.into(),
            prices,
        }
    }

    pub fn price(&self, fuel: FuelType) -> f64 {
        self.prices.get(fuel)
    }
}
