//! Milestone domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What kind of moment a milestone marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MilestoneType {
    Goal,
    Event,
    Achievement,
}

impl MilestoneType {
    pub fn color(&self) -> &'static str {
        match self {
            MilestoneType::Goal => "#8b5cf6",
            MilestoneType::Event => "#0ea5e9",
            MilestoneType::Achievement => "#10b981",
        }
    }
}

/// Caller-supplied annotation drawn as a vertical marker. Never alters snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub date: NaiveDate,
    pub label: String,
    /// Target amount
    pub value: Decimal,
    #[serde(rename = "type")]
    pub milestone_type: MilestoneType,
}

impl Milestone {
    pub fn new(
        date: NaiveDate,
        label: impl Into<String>,
        value: Decimal,
        milestone_type: MilestoneType,
    ) -> Self {
        Self {
            date,
            label: label.into(),
            value,
            milestone_type,
        }
    }
}
