//! Per-view-mode series construction.

use rust_decimal::Decimal;

use super::chart_model::{ChartSeries, ChartToggles, SeriesKind, SeriesPoint, ViewMode};
use crate::snapshots::{AssetClass, Snapshot};

pub const NET_WORTH_KEY: &str = "netWorth";
pub const TOTAL_ASSETS_KEY: &str = "totalAssets";
pub const TOTAL_LIABILITIES_KEY: &str = "totalLiabilities";
pub const LIQUID_NET_WORTH_KEY: &str = "liquidNetWorth";
pub const MOVING_AVERAGE_KEY: &str = "movingAverage";

/// Stack id shared by the asset-class areas.
pub const ASSET_STACK_ID: &str = "assets";

const NET_WORTH_COLOR: &str = "#2563eb";
const ASSETS_COLOR: &str = "#16a34a";
const LIABILITIES_COLOR: &str = "#dc2626";
const LIQUID_COLOR: &str = "#0891b2";
const MOVING_AVERAGE_COLOR: &str = "#f97316";

/// Builds the series for one view mode.
///
/// Axes, tooltips and milestone markers are derived from the returned series
/// by the renderer, so a new view mode only needs a new strategy.
pub trait SeriesStrategy: Send + Sync {
    fn view_mode(&self) -> ViewMode;

    fn build_series(&self, snapshots: &[Snapshot], toggles: &ChartToggles) -> Vec<ChartSeries>;
}

impl ViewMode {
    /// Strategy that builds this mode's series.
    pub fn strategy(&self) -> &'static dyn SeriesStrategy {
        match self {
            ViewMode::Line => &LineSeriesStrategy,
            ViewMode::Area => &AreaSeriesStrategy,
            ViewMode::Stacked => &StackedSeriesStrategy,
        }
    }
}

/// Net worth, assets and liabilities, plus optional liquid net worth and moving average.
pub struct LineSeriesStrategy;

impl SeriesStrategy for LineSeriesStrategy {
    fn view_mode(&self) -> ViewMode {
        ViewMode::Line
    }

    fn build_series(&self, snapshots: &[Snapshot], toggles: &ChartToggles) -> Vec<ChartSeries> {
        let mut series = vec![
            series_from(
                snapshots,
                NET_WORTH_KEY,
                "Net Worth",
                SeriesKind::Line,
                NET_WORTH_COLOR,
                |s| Some(s.total_net_worth),
            ),
            series_from(
                snapshots,
                TOTAL_ASSETS_KEY,
                "Total Assets",
                SeriesKind::Line,
                ASSETS_COLOR,
                |s| Some(s.total_assets),
            ),
            series_from(
                snapshots,
                TOTAL_LIABILITIES_KEY,
                "Total Liabilities",
                SeriesKind::Line,
                LIABILITIES_COLOR,
                |s| Some(s.total_liabilities),
            ),
        ];

        if toggles.show_liquid_net_worth {
            series.push(series_from(
                snapshots,
                LIQUID_NET_WORTH_KEY,
                "Liquid Net Worth",
                SeriesKind::Line,
                LIQUID_COLOR,
                |s| Some(s.liquid_or_zero()),
            ));
        }

        if toggles.show_moving_average {
            series.extend(moving_average_series(snapshots));
        }

        series
    }
}

/// Filled net worth, optionally overlaid with the moving average.
pub struct AreaSeriesStrategy;

impl SeriesStrategy for AreaSeriesStrategy {
    fn view_mode(&self) -> ViewMode {
        ViewMode::Area
    }

    fn build_series(&self, snapshots: &[Snapshot], toggles: &ChartToggles) -> Vec<ChartSeries> {
        let mut series = vec![series_from(
            snapshots,
            NET_WORTH_KEY,
            "Net Worth",
            SeriesKind::Area,
            NET_WORTH_COLOR,
            |s| Some(s.total_net_worth),
        )];

        if toggles.show_moving_average {
            series.extend(moving_average_series(snapshots));
        }

        series
    }
}

/// One stacked area per asset class, always all five in [`AssetClass::ALL`] order.
///
/// A snapshot without a class breakdown, or missing a class, contributes
/// zero to that stack so every date has a full stack.
pub struct StackedSeriesStrategy;

impl SeriesStrategy for StackedSeriesStrategy {
    fn view_mode(&self) -> ViewMode {
        ViewMode::Stacked
    }

    fn build_series(&self, snapshots: &[Snapshot], _toggles: &ChartToggles) -> Vec<ChartSeries> {
        AssetClass::ALL
            .iter()
            .map(|class| {
                let mut series = series_from(
                    snapshots,
                    class.key(),
                    class.display_name(),
                    SeriesKind::StackedArea,
                    class.color(),
                    |s| Some(s.class_amount(*class)),
                );
                series.stack_id = Some(ASSET_STACK_ID.to_string());
                series
            })
            .collect()
    }
}

/// Moving-average line, omitted when no snapshot in the window carries an average.
fn moving_average_series(snapshots: &[Snapshot]) -> Option<ChartSeries> {
    if snapshots.iter().all(|s| s.moving_average.is_none()) {
        return None;
    }
    let mut series = series_from(
        snapshots,
        MOVING_AVERAGE_KEY,
        "Moving Average",
        SeriesKind::Line,
        MOVING_AVERAGE_COLOR,
        |s| s.moving_average,
    );
    series.dashed = true;
    Some(series)
}

fn series_from<F>(
    snapshots: &[Snapshot],
    key: &str,
    name: &str,
    kind: SeriesKind,
    color: &str,
    value: F,
) -> ChartSeries
where
    F: Fn(&Snapshot) -> Option<Decimal>,
{
    ChartSeries {
        key: key.to_string(),
        name: name.to_string(),
        kind,
        color: color.to_string(),
        stack_id: None,
        dashed: false,
        points: snapshots
            .iter()
            .map(|s| SeriesPoint {
                date: s.date,
                value: value(s),
            })
            .collect(),
    }
}
