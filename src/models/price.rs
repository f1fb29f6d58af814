use serde::{Deserialize, Serialize};

use super::fuel::FuelType;

// ---------------------------------------------------------------------------
// PriceChange — signed and percentage change between two averages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChange {
    pub change: f64,
    pub percentage: f64,
    /// `true` when `change >= 0`; a flat price counts as positive.
    pub is_positive: bool,
}

// ---------------------------------------------------------------------------
// FuelSummary — one row of the price table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelSummary {
    pub fuel: FuelType,
    pub label: String,
    pub current_average: f64,
    pub previous_average: f64,
    pub change: PriceChange,
    /// Current-period prices in record order, for sparklines.
    pub trend: Vec<f64>,
}
