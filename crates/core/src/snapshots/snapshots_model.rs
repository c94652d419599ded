//! Snapshot domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of asset classes a snapshot can break its assets into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetClass {
    Cash,
    Stocks,
    Bonds,
    RealEstate,
    Other,
}

impl AssetClass {
    /// Draw order for stacked series and export columns. Keeping it fixed
    /// keeps colours and legend entries stable between renders.
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Cash,
        AssetClass::Stocks,
        AssetClass::Bonds,
        AssetClass::RealEstate,
        AssetClass::Other,
    ];

    /// Key used for series ids and serialization.
    pub fn key(&self) -> &'static str {
        match self {
            AssetClass::Cash => "cash",
            AssetClass::Stocks => "stocks",
            AssetClass::Bonds => "bonds",
            AssetClass::RealEstate => "realEstate",
            AssetClass::Other => "other",
        }
    }

    /// Display name used for legends and CSV headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            AssetClass::Cash => "Cash",
            AssetClass::Stocks => "Stocks",
            AssetClass::Bonds => "Bonds",
            AssetClass::RealEstate => "Real Estate",
            AssetClass::Other => "Other Assets",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AssetClass::Cash => "#22c55e",
            AssetClass::Stocks => "#3b82f6",
            AssetClass::Bonds => "#a855f7",
            AssetClass::RealEstate => "#f59e0b",
            AssetClass::Other => "#64748b",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Asset amounts per class. Each class may be missing independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsByClass {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stocks: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonds: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_estate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<Decimal>,
}

impl AssetsByClass {
    /// Amount held in a class, zero when the class is absent.
    pub fn amount(&self, class: AssetClass) -> Decimal {
        self.get(class).unwrap_or(Decimal::ZERO)
    }

    /// Raw amount for a class, `None` when the source omitted it.
    pub fn get(&self, class: AssetClass) -> Option<Decimal> {
        match class {
            AssetClass::Cash => self.cash,
            AssetClass::Stocks => self.stocks,
            AssetClass::Bonds => self.bonds,
            AssetClass::RealEstate => self.real_estate,
            AssetClass::Other => self.other,
        }
    }

    /// True when every class carries a value.
    pub fn is_complete(&self) -> bool {
        AssetClass::ALL.iter().all(|class| self.get(*class).is_some())
    }

    /// Sum over all classes, treating missing classes as zero.
    pub fn total(&self) -> Decimal {
        AssetClass::ALL
            .iter()
            .fold(Decimal::ZERO, |total, class| total.saturating_add(self.amount(*class)))
    }
}

/// A single periodic net worth snapshot.
///
/// `total_net_worth == total_assets - total_liabilities` is expected but not
/// enforced; nothing downstream relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Reporting date, unique and ascending within a sequence
    pub date: NaiveDate,
    pub total_net_worth: Decimal,
    pub total_assets: Decimal,
    /// Liabilities as a positive magnitude
    pub total_liabilities: Decimal,
    /// Net worth excluding illiquid holdings such as real estate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_net_worth: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_by_class: Option<AssetsByClass>,
    /// Trailing average of net worth. Derived; never supplied by the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moving_average: Option<Decimal>,
}

impl Snapshot {
    pub fn new(date: NaiveDate, total_assets: Decimal, total_liabilities: Decimal) -> Self {
        Self {
            date,
            total_net_worth: total_assets.saturating_sub(total_liabilities),
            total_assets,
            total_liabilities,
            liquid_net_worth: None,
            assets_by_class: None,
            moving_average: None,
        }
    }

    pub fn with_liquid_net_worth(mut self, liquid_net_worth: Decimal) -> Self {
        self.liquid_net_worth = Some(liquid_net_worth);
        self
    }

    pub fn with_assets_by_class(mut self, assets_by_class: AssetsByClass) -> Self {
        self.assets_by_class = Some(assets_by_class);
        self
    }

    /// Liquid net worth, zero when the source did not report it.
    pub fn liquid_or_zero(&self) -> Decimal {
        self.liquid_net_worth.unwrap_or(Decimal::ZERO)
    }

    /// Amount held in a class, zero when the breakdown or the class is missing.
    pub fn class_amount(&self, class: AssetClass) -> Decimal {
        self.assets_by_class
            .as_ref()
            .map(|breakdown| breakdown.amount(class))
            .unwrap_or(Decimal::ZERO)
    }
}
