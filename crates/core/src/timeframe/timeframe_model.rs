//! Timeframe selector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};
use crate::utils::time_utils::months_before;

/// Window of history the caller wants to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[default]
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "3Y")]
    ThreeYears,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "ALL")]
    All,
}

impl Timeframe {
    /// Selector order, shortest window first.
    pub const ALL_VALUES: [Timeframe; 7] = [
        Timeframe::OneMonth,
        Timeframe::ThreeMonths,
        Timeframe::SixMonths,
        Timeframe::OneYear,
        Timeframe::ThreeYears,
        Timeframe::FiveYears,
        Timeframe::All,
    ];

    /// Short label as shown on the selector and in export filenames.
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1M",
            Timeframe::ThreeMonths => "3M",
            Timeframe::SixMonths => "6M",
            Timeframe::OneYear => "1Y",
            Timeframe::ThreeYears => "3Y",
            Timeframe::FiveYears => "5Y",
            Timeframe::All => "ALL",
        }
    }

    /// Length of the window in calendar months, `None` for all time.
    pub fn months(&self) -> Option<u32> {
        match self {
            Timeframe::OneMonth => Some(1),
            Timeframe::ThreeMonths => Some(3),
            Timeframe::SixMonths => Some(6),
            Timeframe::OneYear => Some(12),
            Timeframe::ThreeYears => Some(36),
            Timeframe::FiveYears => Some(60),
            Timeframe::All => None,
        }
    }

    /// Earliest date included in the window ending at `as_of`.
    ///
    /// "1M" on 2024-03-31 starts on 2024-02-29: same day-of-month in the
    /// earlier month, clamped to that month's length.
    pub fn cutoff(&self, as_of: NaiveDate) -> Option<NaiveDate> {
        self.months().map(|months| months_before(as_of, months))
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Timeframe::ALL_VALUES
            .iter()
            .copied()
            .find(|tf| tf.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownTimeframe(s.to_string()).into())
    }
}
