//! Metric card models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEBT_RATIO_EXCELLENT_THRESHOLD, DEBT_RATIO_GOOD_THRESHOLD};

/// Qualitative rating of the debt-to-asset ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DebtBand {
    /// Ratio below 0.30
    Excellent,
    /// Ratio below 0.50
    Good,
    High,
}

impl DebtBand {
    pub fn classify(ratio: Decimal) -> Self {
        if ratio < DEBT_RATIO_EXCELLENT_THRESHOLD {
            DebtBand::Excellent
        } else if ratio < DEBT_RATIO_GOOD_THRESHOLD {
            DebtBand::Good
        } else {
            DebtBand::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DebtBand::Excellent => "Excellent",
            DebtBand::Good => "Good",
            DebtBand::High => "High",
        }
    }
}

/// Summary of a filtered window: first element is the baseline, last is current.
///
/// Recomputed for every window; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub current_net_worth: Decimal,
    /// Current minus baseline net worth
    pub change: Decimal,
    /// Change relative to |baseline| in percent, 2 dp. `0` when the baseline is zero.
    pub change_percent: Decimal,
    /// Current liabilities over current assets. `0` when assets are zero.
    pub debt_to_asset_ratio: Decimal,
    pub debt_band: DebtBand,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    /// Current liquid net worth, zero when not reported
    pub liquid_net_worth: Decimal,
    pub baseline_date: NaiveDate,
    pub current_date: NaiveDate,
    /// Number of snapshots in the window
    pub point_count: usize,
}
