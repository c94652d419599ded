//! Chart description models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};
use crate::milestones::MilestoneType;

/// Visual encoding of the trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    #[default]
    Line,
    Area,
    Stacked,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Line => "line",
            ViewMode::Area => "area",
            ViewMode::Stacked => "stacked",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(ViewMode::Line),
            "area" => Ok(ViewMode::Area),
            "stacked" => Ok(ViewMode::Stacked),
            _ => Err(ValidationError::UnknownViewMode(s.to_string()).into()),
        }
    }
}

/// Optional overlays the user can switch on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartToggles {
    pub show_liquid_net_worth: bool,
    pub show_moving_average: bool,
    pub show_milestones: bool,
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    Line,
    Area,
    StackedArea,
}

/// One value of a series. `value` is `None` where the series has no data,
/// e.g. before the moving-average window fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Option<Decimal>,
}

/// A named ordinate series over the shared date axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub key: String,
    pub name: String,
    pub kind: SeriesKind,
    pub color: String,
    /// Series sharing a stack id are drawn on top of each other in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
    pub dashed: bool,
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn value_at(&self, date: NaiveDate) -> Option<Decimal> {
        self.points
            .iter()
            .find(|p| p.date == date)
            .and_then(|p| p.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTick {
    pub date: NaiveDate,
    /// Month and two-digit year, e.g. `Jan 24`
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateAxis {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub ticks: Vec<DateTick>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueTick {
    pub value: Decimal,
    /// Abbreviated to thousands, e.g. `$125k`
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    pub min: Decimal,
    pub max: Decimal,
    pub ticks: Vec<ValueTick>,
}

/// Vertical marker for a milestone inside the plotted window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceLine {
    pub date: NaiveDate,
    pub label: String,
    pub value: Decimal,
    pub milestone_type: MilestoneType,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipRow {
    pub series_key: String,
    pub name: String,
    pub value: Decimal,
    /// Full currency format, e.g. `$125,430.12`
    pub formatted: String,
}

/// Hover content for one date: every series with a value there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub date: NaiveDate,
    pub title: String,
    pub rows: Vec<TooltipRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescription {
    pub view_mode: ViewMode,
    pub x_axis: DateAxis,
    pub y_axis: ValueAxis,
    pub series: Vec<ChartSeries>,
    pub reference_lines: Vec<ReferenceLine>,
    pub tooltips: Vec<Tooltip>,
}

impl ChartDescription {
    pub fn series_by_key(&self, key: &str) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.key == key)
    }
}

/// Renderer result: a chart, or an explicit placeholder when there is nothing to plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ChartOutput {
    Empty { message: String },
    Chart(ChartDescription),
}

impl ChartOutput {
    pub fn chart(&self) -> Option<&ChartDescription> {
        match self {
            ChartOutput::Chart(chart) => Some(chart),
            ChartOutput::Empty { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ChartOutput::Empty { .. })
    }
}
