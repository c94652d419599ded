//! Derived metrics for the metric cards.

use log::{debug, warn};
use rust_decimal::Decimal;

use super::metrics_model::{DebtBand, DerivedStats};
use crate::snapshots::Snapshot;
use crate::utils::format_utils::round_display;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Computes summary statistics for a filtered window.
///
/// Returns `None` for an empty window, which the UI shows as "no data". A
/// zero baseline or zero current assets yields a `0` sentinel for the
/// affected ratio, so no division ever reaches the renderer undefined.
/// Differences that would leave the `Decimal` range saturate.
pub fn calculate_stats(snapshots: &[Snapshot]) -> Option<DerivedStats> {
    let (baseline, current) = match (snapshots.first(), snapshots.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            debug!("No snapshots in window; skipping stats");
            return None;
        }
    };

    let change = current
        .total_net_worth
        .saturating_sub(baseline.total_net_worth);
    let change_percent = change_percent(change, baseline.total_net_worth);
    let debt_to_asset_ratio = debt_to_asset_ratio(current);
    let debt_band = if current.total_assets.is_zero() && current.total_liabilities > Decimal::ZERO
    {
        DebtBand::High
    } else {
        DebtBand::classify(debt_to_asset_ratio)
    };

    Some(DerivedStats {
        current_net_worth: current.total_net_worth,
        change,
        change_percent,
        debt_to_asset_ratio,
        debt_band,
        total_assets: current.total_assets,
        total_liabilities: current.total_liabilities,
        liquid_net_worth: current.liquid_or_zero(),
        baseline_date: baseline.date,
        current_date: current.date,
        point_count: snapshots.len(),
    })
}

/// Percent change against the magnitude of the baseline, `0` for a zero baseline.
pub fn change_percent(change: Decimal, baseline: Decimal) -> Decimal {
    if baseline.is_zero() {
        if !change.is_zero() {
            warn!("Zero net worth baseline; reporting change percent as 0");
        }
        return Decimal::ZERO;
    }
    change
        .checked_mul(HUNDRED)
        .and_then(|scaled| scaled.checked_div(baseline.abs()))
        .map(round_display)
        .unwrap_or(Decimal::ZERO)
}

/// Liabilities over assets for one snapshot, `0` when assets are zero.
pub fn debt_to_asset_ratio(snapshot: &Snapshot) -> Decimal {
    if snapshot.total_assets.is_zero() {
        return Decimal::ZERO;
    }
    snapshot
        .total_liabilities
        .checked_div(snapshot.total_assets)
        .unwrap_or(Decimal::ZERO)
}
