//! Built-in sample of retail prices across Nigerian states.
//!
//! Two snapshots: a broad one on 2024-11-30 and a smaller one on 2025-01-03.

use crate::models::{FuelPrices, PriceRecord};

/// `(state, period, region, [AGO, PMS, DPK, LPG])`
const SAMPLE: &[(&str, &str, &str, [f64; 4])] = &[
    ("Abia", "2024-11-30", "South East", [1205.63, 1159.38, 1342.86, 1300.0]),
    ("Abuja", "2024-11-30", "North Central", [1352.86, 1084.44, 1150.0, 1291.67]),
    ("Adamawa", "2024-11-30", "North East", [1205.0, 1161.67, 1399.44, 1325.56]),
    ("Akwa Ibom", "2024-11-30", "South South", [1189.43, 1119.38, 1375.0, 1368.57]),
    ("Anambra", "2024-11-30", "South East", [1264.29, 1141.25, 1400.0, 1500.0]),
    ("Lagos", "2024-11-30", "South West", [1147.39, 1060.27, 1475.0, 1216.92]),
    ("Kano", "2024-11-30", "North West", [1277.14, 1174.88, 1400.0, 1350.0]),
    ("Rivers", "2024-11-30", "South South", [1341.67, 1166.25, 1160.0, 1530.0]),
    ("Lagos", "2025-01-03", "South West", [1140.58, 982.29, 1475.0, 1237.5]),
    ("Abuja", "2025-01-03", "North Central", [1288.57, 1052.0, 1150.0, 1318.0]),
    ("Kano", "2025-01-03", "North West", [1171.43, 1095.0, 1275.0, 1450.0]),
    ("Rivers", "2025-01-03", "South South", [1242.0, 1114.29, 1200.0, 1550.0]),
];

/// Return the sample dataset in its original order.
pub fn sample_records() -> Vec<PriceRecord> {
    SAMPLE
        .iter()
        .map(|&(state, period, region, [ago, pms, dpk, lpg])| {
            PriceRecord::new(state, period, region, FuelPrices { pms, ago, dpk, lpg })
        })
        .collect()
}
