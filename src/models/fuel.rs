use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PriceError;

// ---------------------------------------------------------------------------
// FuelType — the four retail petroleum products
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FuelType {
    /// Premium Motor Spirit (petrol).
    #[serde(rename = "PMS")]
    Pms,
    /// Automotive Gas Oil (diesel).
    #[serde(rename = "AGO")]
    Ago,
    /// Dual Purpose Kerosene.
    #[serde(rename = "DPK")]
    Dpk,
    /// Liquefied Petroleum Gas.
    #[serde(rename = "LPG")]
    Lpg,
}

impl FuelType {
    /// Every fuel type, in the order the price table lists them.
    pub const ALL: [FuelType; 4] = [FuelType::Pms, FuelType::Ago, FuelType::Dpk, FuelType::Lpg];

    /// Short code as it appears in the dataset (`"PMS"`, `"AGO"`, ...).
    pub fn code(self) -> &'static str {
        match self {
            FuelType::Pms => "PMS",
            FuelType::Ago => "AGO",
            FuelType::Dpk => "DPK",
            FuelType::Lpg => "LPG",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FuelType::Pms => "Premium Motor Spirit",
            FuelType::Ago => "Automotive Gas Oil",
            FuelType::Dpk => "Dual Purpose Kerosene",
            FuelType::Lpg => "Liquefied Petroleum Gas",
        }
    }

    /// Product label shown in the price table, e.g. `"PMS (Premium Motor Spirit)"`.
    pub fn label(self) -> String {
        format!("{} ({})", self.code(), self.name())
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FuelType {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PMS" => Ok(FuelType::Pms),
            "AGO" => Ok(FuelType::Ago),
            "DPK" => Ok(FuelType::Dpk),
            "LPG" => Ok(FuelType::Lpg),
            _ => Err(PriceError::InvalidArgument(format!("Unknown fuel type: {}", s))),
        }
    }
}
