//! Unit tests for the chart renderer.

use super::*;
use crate::constants::{CHART_EMPTY_NOTICE, MOVING_AVERAGE_WINDOW};
use crate::metrics::apply_moving_average;
use crate::milestones::{Milestone, MilestoneType};
use crate::snapshots::{AssetClass, AssetsByClass, Snapshot};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn full_breakdown(total: Decimal) -> AssetsByClass {
    // 10% cash, 40% stocks, 20% bonds, 25% real estate, 5% other
    AssetsByClass {
        cash: Some(total * dec!(0.10)),
        stocks: Some(total * dec!(0.40)),
        bonds: Some(total * dec!(0.20)),
        real_estate: Some(total * dec!(0.25)),
        other: Some(total * dec!(0.05)),
    }
}

fn window(count: u32) -> Vec<Snapshot> {
    (0..count)
        .map(|i| {
            let assets = Decimal::from(200_000 + i * 5_000);
            Snapshot::new(date(2024, 1, 1) + Months::new(i), assets, dec!(50000))
                .with_liquid_net_worth(dec!(40000))
                .with_assets_by_class(full_breakdown(assets))
        })
        .collect()
}

fn all_toggles() -> ChartToggles {
    ChartToggles {
        show_liquid_net_worth: true,
        show_moving_average: true,
        show_milestones: true,
    }
}

fn keys(chart: &ChartDescription) -> Vec<&str> {
    chart.series.iter().map(|s| s.key.as_str()).collect()
}

#[test]
fn test_empty_window_renders_placeholder() {
    for mode in [ViewMode::Line, ViewMode::Area, ViewMode::Stacked] {
        let output = render_chart(&[], mode, &all_toggles(), &[]);
        assert_eq!(
            output,
            ChartOutput::Empty {
                message: CHART_EMPTY_NOTICE.to_string()
            }
        );
        assert!(output.chart().is_none());
    }
}

#[test]
fn test_line_mode_base_series() {
    let output = render_chart(&window(3), ViewMode::Line, &ChartToggles::default(), &[]);
    let chart = output.chart().unwrap();

    assert_eq!(chart.view_mode, ViewMode::Line);
    assert_eq!(keys(chart), vec![NET_WORTH_KEY, TOTAL_ASSETS_KEY, TOTAL_LIABILITIES_KEY]);
    assert!(chart.series.iter().all(|s| s.kind == SeriesKind::Line));
    assert_eq!(
        chart.series_by_key(NET_WORTH_KEY).unwrap().value_at(date(2024, 2, 1)),
        Some(dec!(155000))
    );
}

#[test]
fn test_line_mode_toggles_add_series() {
    let data = apply_moving_average(&window(8), MOVING_AVERAGE_WINDOW);
    let output = render_chart(&data, ViewMode::Line, &all_toggles(), &[]);
    let chart = output.chart().unwrap();

    assert_eq!(
        keys(chart),
        vec![
            NET_WORTH_KEY,
            TOTAL_ASSETS_KEY,
            TOTAL_LIABILITIES_KEY,
            LIQUID_NET_WORTH_KEY,
            MOVING_AVERAGE_KEY
        ]
    );

    let average = chart.series_by_key(MOVING_AVERAGE_KEY).unwrap();
    assert!(average.dashed);
    assert_eq!(average.points.len(), 8);
    assert!(average.points[..6].iter().all(|p| p.value.is_none()));
    // mean of net worth 150k..180k step 5k
    assert_eq!(average.points[6].value, Some(dec!(165000)));
}

#[test]
fn test_liquid_series_zero_fills_missing_values() {
    let mut data = window(2);
    data[0].liquid_net_worth = None;
    let toggles = ChartToggles {
        show_liquid_net_worth: true,
        ..Default::default()
    };

    let output = render_chart(&data, ViewMode::Line, &toggles, &[]);
    let liquid = output.chart().unwrap().series_by_key(LIQUID_NET_WORTH_KEY).unwrap();

    assert_eq!(liquid.points[0].value, Some(Decimal::ZERO));
    assert_eq!(liquid.points[1].value, Some(dec!(40000)));
}

#[test]
fn test_moving_average_series_omitted_when_not_computable() {
    let data = apply_moving_average(&window(3), MOVING_AVERAGE_WINDOW);
    let output = render_chart(&data, ViewMode::Line, &all_toggles(), &[]);
    assert!(output
        .chart()
        .unwrap()
        .series_by_key(MOVING_AVERAGE_KEY)
        .is_none());
}

#[test]
fn test_area_mode_single_filled_series() {
    let output = render_chart(&window(4), ViewMode::Area, &ChartToggles::default(), &[]);
    let chart = output.chart().unwrap();

    assert_eq!(keys(chart), vec![NET_WORTH_KEY]);
    assert_eq!(chart.series[0].kind, SeriesKind::Area);

    let data = apply_moving_average(&window(7), MOVING_AVERAGE_WINDOW);
    let overlaid = render_chart(&data, ViewMode::Area, &all_toggles(), &[]);
    assert_eq!(
        keys(overlaid.chart().unwrap()),
        vec![NET_WORTH_KEY, MOVING_AVERAGE_KEY]
    );
}

#[test]
fn test_stacked_mode_fixed_class_order() {
    let output = render_chart(&window(3), ViewMode::Stacked, &all_toggles(), &[]);
    let chart = output.chart().unwrap();

    let expected: Vec<&str> = AssetClass::ALL.iter().map(|c| c.key()).collect();
    assert_eq!(keys(chart), expected);
    for series in &chart.series {
        assert_eq!(series.kind, SeriesKind::StackedArea);
        assert_eq!(series.stack_id.as_deref(), Some(ASSET_STACK_ID));
    }
}

#[test]
fn test_stacked_mode_sums_to_total_assets() {
    let data = window(4);
    let output = render_chart(&data, ViewMode::Stacked, &ChartToggles::default(), &[]);
    let chart = output.chart().unwrap();

    for snapshot in &data {
        let stacked: Decimal = chart
            .series
            .iter()
            .map(|s| s.value_at(snapshot.date).unwrap())
            .sum();
        assert_eq!(stacked, snapshot.total_assets);
    }
}

#[test]
fn test_stacked_mode_zero_fills_partial_breakdown() {
    let data = vec![
        Snapshot::new(date(2024, 1, 1), dec!(1000), dec!(0)),
        Snapshot::new(date(2024, 2, 1), dec!(1000), dec!(0)).with_assets_by_class(
            AssetsByClass {
                stocks: Some(dec!(700)),
                ..Default::default()
            },
        ),
    ];
    let output = render_chart(&data, ViewMode::Stacked, &ChartToggles::default(), &[]);
    let chart = output.chart().unwrap();

    assert_eq!(chart.series.len(), 5);
    for series in &chart.series {
        assert_eq!(series.points.len(), 2);
        assert!(series.points.iter().all(|p| p.value.is_some()));
    }
    assert_eq!(
        chart.series_by_key("stocks").unwrap().value_at(date(2024, 2, 1)),
        Some(dec!(700))
    );
    assert_eq!(
        chart.series_by_key("cash").unwrap().value_at(date(2024, 1, 1)),
        Some(Decimal::ZERO)
    );
}

#[test]
fn test_milestones_inside_window_only() {
    let milestones = vec![
        Milestone::new(date(2024, 2, 15), "Paid off car", dec!(0), MilestoneType::Event),
        Milestone::new(date(2023, 6, 1), "Too early", dec!(0), MilestoneType::Goal),
        Milestone::new(date(2024, 1, 1), "Start", dec!(150000), MilestoneType::Achievement),
        Milestone::new(date(2030, 1, 1), "Retire", dec!(2000000), MilestoneType::Goal),
    ];

    for mode in [ViewMode::Line, ViewMode::Area, ViewMode::Stacked] {
        let output = render_chart(&window(3), mode, &all_toggles(), &milestones);
        let lines = &output.chart().unwrap().reference_lines;

        let labels: Vec<_> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Start", "Paid off car"]);
        assert_eq!(lines[1].color, MilestoneType::Event.color());
    }
}

#[test]
fn test_milestones_hidden_when_toggled_off() {
    let milestones = vec![Milestone::new(
        date(2024, 2, 1),
        "Bonus",
        dec!(10000),
        MilestoneType::Event,
    )];
    let output = render_chart(&window(3), ViewMode::Line, &ChartToggles::default(), &milestones);
    assert!(output.chart().unwrap().reference_lines.is_empty());
}

#[test]
fn test_axes_are_formatted() {
    let output = render_chart(&window(3), ViewMode::Line, &ChartToggles::default(), &[]);
    let chart = output.chart().unwrap();

    assert_eq!(chart.x_axis.start, date(2024, 1, 1));
    assert_eq!(chart.x_axis.end, date(2024, 3, 1));
    let labels: Vec<_> = chart.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["Jan 24", "Feb 24", "Mar 24"]);

    // assets peak at 210k; liabilities 50k; anchored at zero
    assert_eq!(chart.y_axis.min, Decimal::ZERO);
    assert_eq!(chart.y_axis.max, dec!(210000));
    let tick_labels: Vec<_> = chart.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(tick_labels, vec!["$0k", "$53k", "$105k", "$158k", "$210k"]);
}

#[test]
fn test_value_domain_includes_negative_net_worth() {
    let data = vec![Snapshot::new(date(2024, 1, 1), dec!(10000), dec!(60000))];
    let output = render_chart(&data, ViewMode::Area, &ChartToggles::default(), &[]);
    let axis = &output.chart().unwrap().y_axis;

    assert_eq!(axis.min, dec!(-50000));
    assert_eq!(axis.max, Decimal::ZERO);
}

#[test]
fn test_flat_domain_is_widened() {
    let data = vec![Snapshot::new(date(2024, 1, 1), dec!(0), dec!(0))];
    let output = render_chart(&data, ViewMode::Area, &ChartToggles::default(), &[]);
    let axis = &output.chart().unwrap().y_axis;
    assert!(axis.max > axis.min);
}

#[test]
fn test_tooltips_cover_every_series_at_date() {
    let data = apply_moving_average(&window(7), MOVING_AVERAGE_WINDOW);
    let output = render_chart(&data, ViewMode::Line, &all_toggles(), &[]);
    let tooltips = &output.chart().unwrap().tooltips;

    assert_eq!(tooltips.len(), 7);
    assert_eq!(tooltips[0].title, "Jan 1, 2024");
    // no moving average yet on the first date
    assert_eq!(tooltips[0].rows.len(), 4);
    assert_eq!(tooltips[6].rows.len(), 5);

    let net_worth = &tooltips[0].rows[0];
    assert_eq!(net_worth.series_key, NET_WORTH_KEY);
    assert_eq!(net_worth.formatted, "$150,000.00");
}

#[test]
fn test_chart_output_serializes_with_state_tag() {
    let empty = serde_json::to_value(render_chart(&[], ViewMode::Line, &all_toggles(), &[])).unwrap();
    assert_eq!(empty["state"], "empty");
    assert_eq!(empty["message"], CHART_EMPTY_NOTICE);

    let chart =
        serde_json::to_value(render_chart(&window(1), ViewMode::Stacked, &all_toggles(), &[]))
            .unwrap();
    assert_eq!(chart["state"], "chart");
    assert_eq!(chart["viewMode"], "stacked");
}

#[test]
fn test_view_mode_parsing() {
    assert_eq!("line".parse::<ViewMode>().unwrap(), ViewMode::Line);
    assert_eq!("Stacked".parse::<ViewMode>().unwrap(), ViewMode::Stacked);
    assert!("pie".parse::<ViewMode>().is_err());
    assert_eq!(ViewMode::Area.strategy().view_mode(), ViewMode::Area);
}

#[test]
fn test_axis_spanning_decimal_range_saturates() {
    let mut snapshot = Snapshot::new(date(2024, 1, 1), Decimal::MAX, dec!(0));
    snapshot.total_net_worth = Decimal::MIN;

    let output = render_chart(&[snapshot], ViewMode::Line, &ChartToggles::default(), &[]);
    let axis = &output.chart().unwrap().y_axis;

    assert_eq!(axis.min, Decimal::MIN);
    assert_eq!(axis.max, Decimal::MAX);
    assert_eq!(axis.ticks.len(), VALUE_AXIS_TICK_COUNT as usize);
    assert_eq!(axis.ticks.first().unwrap().value, Decimal::MIN);
    assert_eq!(axis.ticks.last().unwrap().value, Decimal::MAX);
}

#[test]
fn test_stack_total_beyond_decimal_range_saturates() {
    let breakdown = AssetsByClass {
        cash: Some(Decimal::MAX),
        stocks: Some(Decimal::MAX),
        bonds: None,
        real_estate: None,
        other: None,
    };
    let snapshot =
        Snapshot::new(date(2024, 1, 1), Decimal::MAX, dec!(0)).with_assets_by_class(breakdown);

    let output = render_chart(&[snapshot], ViewMode::Stacked, &ChartToggles::default(), &[]);
    let chart = output.chart().unwrap();

    assert_eq!(chart.y_axis.max, Decimal::MAX);
    assert_eq!(chart.series.len(), AssetClass::ALL.len());
}
