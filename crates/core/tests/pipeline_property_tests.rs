//! Property-based integration tests for the net worth pipeline.
//!
//! These tests verify that universal properties hold across generated snapshot
//! sequences, using the `proptest` crate for random test case generation.

use chrono::{Days, NaiveDate};
use networth_core::chart::{render_chart, ChartToggles, ViewMode};
use networth_core::constants::MOVING_AVERAGE_WINDOW;
use networth_core::export::{export_csv, CSV_HEADERS};
use networth_core::metrics::{apply_moving_average, calculate_stats};
use networth_core::snapshots::{AssetClass, AssetsByClass, Snapshot};
use networth_core::timeframe::{filter_snapshots, Timeframe};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Generators
// =============================================================================

/// Monetary amount in cents, up to 50M.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..5_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_breakdown() -> impl Strategy<Value = AssetsByClass> {
    (
        proptest::option::of(arb_amount()),
        proptest::option::of(arb_amount()),
        proptest::option::of(arb_amount()),
        proptest::option::of(arb_amount()),
        proptest::option::of(arb_amount()),
    )
        .prop_map(|(cash, stocks, bonds, real_estate, other)| AssetsByClass {
            cash,
            stocks,
            bonds,
            real_estate,
            other,
        })
}

/// Ascending snapshot sequence with irregular gaps and random optional fields.
fn arb_snapshots(max_len: usize) -> impl Strategy<Value = Vec<Snapshot>> {
    proptest::collection::vec(
        (
            1u64..90,
            arb_amount(),
            arb_amount(),
            proptest::option::of(arb_amount()),
            proptest::option::of(arb_breakdown()),
        ),
        0..=max_len,
    )
    .prop_map(|rows| {
        let mut date = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        rows.into_iter()
            .map(|(gap, assets, liabilities, liquid, breakdown)| {
                date = date + Days::new(gap);
                let mut snapshot = Snapshot::new(date, assets, liabilities);
                snapshot.liquid_net_worth = liquid;
                snapshot.assets_by_class = breakdown;
                snapshot
            })
            .collect()
    })
}

/// Sequence whose first snapshot has a zero net worth baseline and whose last has zero assets.
fn arb_degenerate_snapshots() -> impl Strategy<Value = Vec<Snapshot>> {
    arb_snapshots(20).prop_filter("need at least one snapshot", |s| !s.is_empty()).prop_map(
        |mut snapshots| {
            let first = &mut snapshots[0];
            first.total_net_worth = Decimal::ZERO;
            let last_index = snapshots.len() - 1;
            snapshots[last_index].total_assets = Decimal::ZERO;
            snapshots
        },
    )
}

fn arb_as_of() -> impl Strategy<Value = NaiveDate> {
    (0u64..4_000).prop_map(|offset| NaiveDate::from_ymd_opt(2018, 6, 1).unwrap() + Days::new(offset))
}

fn is_subsequence(needle: &[Snapshot], haystack: &[Snapshot]) -> bool {
    let mut remaining = haystack.iter();
    needle.iter().all(|n| remaining.any(|h| h == n))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A shorter timeframe always selects a subsequence of a longer one.
    #[test]
    fn prop_filter_is_monotonic(snapshots in arb_snapshots(60), as_of in arb_as_of()) {
        let values = Timeframe::ALL_VALUES;
        for (i, shorter) in values.iter().enumerate() {
            for longer in &values[i..] {
                let narrow = filter_snapshots(&snapshots, *shorter, as_of);
                let wide = filter_snapshots(&snapshots, *longer, as_of);
                prop_assert!(is_subsequence(&narrow, &wide));
            }
        }
    }

    /// `ALL` is the identity.
    #[test]
    fn prop_all_is_identity(snapshots in arb_snapshots(60), as_of in arb_as_of()) {
        prop_assert_eq!(filter_snapshots(&snapshots, Timeframe::All, as_of), snapshots);
    }

    /// Filtering keeps input order.
    #[test]
    fn prop_filter_preserves_order(snapshots in arb_snapshots(60), as_of in arb_as_of()) {
        for timeframe in Timeframe::ALL_VALUES {
            let filtered = filter_snapshots(&snapshots, timeframe, as_of);
            prop_assert!(filtered.windows(2).all(|pair| pair[0].date < pair[1].date));
        }
    }

    /// Each average is the mean of the trailing seven net worth values.
    #[test]
    fn prop_moving_average_window(snapshots in arb_snapshots(40)) {
        let averaged = apply_moving_average(&snapshots, MOVING_AVERAGE_WINDOW);
        prop_assert_eq!(averaged.len(), snapshots.len());

        if snapshots.len() < MOVING_AVERAGE_WINDOW {
            prop_assert!(averaged.iter().all(|s| s.moving_average.is_none()));
        } else {
            let tolerance = dec!(0.000000001);
            for (i, point) in averaged.iter().enumerate() {
                if i + 1 < MOVING_AVERAGE_WINDOW {
                    prop_assert!(point.moving_average.is_none());
                    continue;
                }
                let window = &snapshots[i + 1 - MOVING_AVERAGE_WINDOW..=i];
                let sum: Decimal = window.iter().map(|s| s.total_net_worth).sum();
                let expected = sum / Decimal::from(MOVING_AVERAGE_WINDOW);
                let actual = point.moving_average.unwrap();
                prop_assert!((actual - expected).abs() < tolerance);
            }
        }
    }

    /// Change is exactly last minus first.
    #[test]
    fn prop_change_is_last_minus_first(snapshots in arb_snapshots(40)) {
        match calculate_stats(&snapshots) {
            None => prop_assert!(snapshots.is_empty()),
            Some(stats) => {
                let first = snapshots.first().unwrap();
                let last = snapshots.last().unwrap();
                prop_assert_eq!(stats.change, last.total_net_worth - first.total_net_worth);
                prop_assert_eq!(stats.current_net_worth, last.total_net_worth);
            }
        }
    }

    /// Zero baselines and zero assets produce the defined sentinel.
    #[test]
    fn prop_degenerate_inputs_use_sentinels(snapshots in arb_degenerate_snapshots()) {
        let stats = calculate_stats(&snapshots).unwrap();
        prop_assert_eq!(stats.change_percent, Decimal::ZERO);
        prop_assert_eq!(stats.debt_to_asset_ratio, Decimal::ZERO);
    }

    /// Export has a header plus one row per snapshot, all with the same width.
    #[test]
    fn prop_csv_shape(snapshots in arb_snapshots(40)) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        match export_csv(&snapshots, Timeframe::All, today) {
            Err(_) => prop_assert!(snapshots.is_empty()),
            Ok(export) => {
                prop_assert_eq!(export.content.lines().count(), snapshots.len() + 1);
                for line in export.content.lines() {
                    prop_assert_eq!(line.split(',').count(), CSV_HEADERS.len());
                }
            }
        }
    }

    /// Stacked mode always draws five full stacks; complete breakdowns sum to total assets.
    #[test]
    fn prop_stacked_completeness(snapshots in arb_snapshots(30)) {
        let snapshots: Vec<Snapshot> = snapshots
            .into_iter()
            .map(|mut s| {
                if let Some(breakdown) = &s.assets_by_class {
                    if breakdown.is_complete() {
                        s.total_assets = breakdown.total();
                    }
                }
                s
            })
            .collect();

        let output = render_chart(&snapshots, ViewMode::Stacked, &ChartToggles::default(), &[]);
        if snapshots.is_empty() {
            prop_assert!(output.is_empty());
        } else {
            let chart = output.chart().unwrap();
            prop_assert_eq!(chart.series.len(), AssetClass::ALL.len());

            for (i, snapshot) in snapshots.iter().enumerate() {
                let mut stack = Decimal::ZERO;
                for series in &chart.series {
                    let value = series.points[i].value;
                    prop_assert!(value.is_some());
                    stack += value.unwrap();
                }
                let complete = snapshot
                    .assets_by_class
                    .as_ref()
                    .map(|b| b.is_complete())
                    .unwrap_or(false);
                if complete {
                    prop_assert_eq!(stack, snapshot.total_assets);
                }
            }
        }
    }
}
