//! Shared chart assembly: axes, tooltips and milestone markers.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::chart_model::{
    ChartDescription, ChartOutput, ChartSeries, ChartToggles, DateAxis, DateTick, ReferenceLine,
    Tooltip, TooltipRow, ValueAxis, ValueTick, ViewMode,
};
use super::series_strategy::SeriesStrategy;
use crate::constants::CHART_EMPTY_NOTICE;
use crate::milestones::Milestone;
use crate::snapshots::Snapshot;
use crate::utils::format_utils::{
    format_compact_currency, format_currency, format_long_date, format_month_year,
};

/// Number of labelled ticks on the value axis, including both ends.
pub const VALUE_AXIS_TICK_COUNT: u32 = 5;

/// Span used when every plotted value is identical.
const FLAT_DOMAIN_SPAN: Decimal = Decimal::ONE_THOUSAND;

/// Renders a filtered window in the requested view mode.
///
/// An empty window renders the "no data" placeholder, never an empty chart.
pub fn render_chart(
    snapshots: &[Snapshot],
    view_mode: ViewMode,
    toggles: &ChartToggles,
    milestones: &[Milestone],
) -> ChartOutput {
    render_with_strategy(view_mode.strategy(), snapshots, toggles, milestones)
}

/// Renders with an explicit series strategy.
pub fn render_with_strategy(
    strategy: &dyn SeriesStrategy,
    snapshots: &[Snapshot],
    toggles: &ChartToggles,
    milestones: &[Milestone],
) -> ChartOutput {
    let (first, last) = match (snapshots.first(), snapshots.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => {
            return ChartOutput::Empty {
                message: CHART_EMPTY_NOTICE.to_string(),
            }
        }
    };

    let series = strategy.build_series(snapshots, toggles);
    let x_axis = build_date_axis(snapshots, first, last);
    let y_axis = build_value_axis(&series);
    let tooltips = build_tooltips(snapshots, &series);
    let reference_lines = if toggles.show_milestones {
        build_reference_lines(milestones, first, last)
    } else {
        Vec::new()
    };

    debug!(
        "Rendered {} chart: {} points, {} series, {} milestone markers",
        strategy.view_mode(),
        snapshots.len(),
        series.len(),
        reference_lines.len()
    );

    ChartOutput::Chart(ChartDescription {
        view_mode: strategy.view_mode(),
        x_axis,
        y_axis,
        series,
        reference_lines,
        tooltips,
    })
}

fn build_date_axis(snapshots: &[Snapshot], start: NaiveDate, end: NaiveDate) -> DateAxis {
    DateAxis {
        start,
        end,
        ticks: snapshots
            .iter()
            .map(|s| DateTick {
                date: s.date,
                label: format_month_year(s.date),
            })
            .collect(),
    }
}

/// Value domain over every plotted value, anchored at zero.
///
/// Stacked series contribute their per-date stack totals so the top of the
/// stack stays inside the axis.
pub fn value_domain(series: &[ChartSeries]) -> (Decimal, Decimal) {
    let mut min = Decimal::ZERO;
    let mut max = Decimal::ZERO;
    let mut stack_totals: BTreeMap<(&str, NaiveDate), Decimal> = BTreeMap::new();

    for s in series {
        for point in &s.points {
            let Some(value) = point.value else { continue };
            min = min.min(value);
            match &s.stack_id {
                Some(stack_id) => {
                    let total = stack_totals
                        .entry((stack_id.as_str(), point.date))
                        .or_insert(Decimal::ZERO);
                    *total = total.saturating_add(value);
                }
                None => max = max.max(value),
            }
        }
    }

    for total in stack_totals.values() {
        min = min.min(*total);
        max = max.max(*total);
    }

    if min == max {
        max = min + FLAT_DOMAIN_SPAN;
    }

    (min, max)
}

fn build_value_axis(series: &[ChartSeries]) -> ValueAxis {
    let (min, max) = value_domain(series);
    let intervals = Decimal::from(VALUE_AXIS_TICK_COUNT - 1);
    let step = max.saturating_sub(min) / intervals;

    let ticks = (0..VALUE_AXIS_TICK_COUNT)
        .map(|i| {
            let value = if i == VALUE_AXIS_TICK_COUNT - 1 {
                max
            } else {
                min.saturating_add(step.saturating_mul(Decimal::from(i)))
            };
            ValueTick {
                value,
                label: format_compact_currency(value),
            }
        })
        .collect();

    ValueAxis { min, max, ticks }
}

fn build_tooltips(snapshots: &[Snapshot], series: &[ChartSeries]) -> Vec<Tooltip> {
    snapshots
        .iter()
        .enumerate()
        .map(|(i, snapshot)| Tooltip {
            date: snapshot.date,
            title: format_long_date(snapshot.date),
            rows: series
                .iter()
                .filter_map(|s| {
                    let value = s.points.get(i).and_then(|p| p.value)?;
                    Some(TooltipRow {
                        series_key: s.key.clone(),
                        name: s.name.clone(),
                        value,
                        formatted: format_currency(value),
                    })
                })
                .collect(),
        })
        .collect()
}

/// Markers for milestones dated inside `[start, end]`; the rest are skipped.
fn build_reference_lines(
    milestones: &[Milestone],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<ReferenceLine> {
    let mut lines: Vec<ReferenceLine> = milestones
        .iter()
        .filter(|m| m.date >= start && m.date <= end)
        .map(|m| ReferenceLine {
            date: m.date,
            label: m.label.clone(),
            value: m.value,
            milestone_type: m.milestone_type,
            color: m.milestone_type.color().to_string(),
        })
        .collect();

    if lines.len() < milestones.len() {
        debug!(
            "{} milestones fall outside {}..{} and are not drawn",
            milestones.len() - lines.len(),
            start,
            end
        );
    }

    lines.sort_by_key(|line| line.date);
    lines
}
