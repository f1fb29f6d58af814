use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PriceError;

// ---------------------------------------------------------------------------
// ChartRange — time window selectable on the price chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartRange {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "YTD")]
    YearToDate,
    #[serde(rename = "ALL")]
    All,
}

impl ChartRange {
    pub const ALL: [ChartRange; 7] = [
        ChartRange::OneDay,
        ChartRange::OneWeek,
        ChartRange::OneMonth,
        ChartRange::ThreeMonths,
        ChartRange::SixMonths,
        ChartRange::YearToDate,
        ChartRange::All,
    ];

    /// Number of data points drawn for this range.
    pub fn points(self) -> usize {
        match self {
            ChartRange::OneDay => 24,
            ChartRange::OneWeek => 7,
            ChartRange::OneMonth => 30,
            ChartRange::ThreeMonths => 90,
            ChartRange::SixMonths => 180,
            ChartRange::YearToDate => 365,
            ChartRange::All => 730,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ChartRange::OneDay => "1D",
            ChartRange::OneWeek => "1W",
            ChartRange::OneMonth => "1M",
            ChartRange::ThreeMonths => "3M",
            ChartRange::SixMonths => "6M",
            ChartRange::YearToDate => "YTD",
            ChartRange::All => "ALL",
        }
    }

    /// Intraday ranges move in smaller steps.
    pub fn is_intraday(self) -> bool {
        self == ChartRange::OneDay
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ChartRange {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ChartRange::ALL
            .into_iter()
            .find(|r| r.code() == upper)
            .ok_or_else(|| PriceError::InvalidArgument(format!("Unknown chart range: {}", s)))
    }
}

// ---------------------------------------------------------------------------
// ChartPoint — single point of a generated chart series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub index: usize,
    pub price: f64,
    pub volume: f64,
}
