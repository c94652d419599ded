use log::debug;
use rust_decimal::Decimal;

use crate::snapshots::Snapshot;

/// Adds a trailing `window`-period average of net worth to a window of snapshots.
///
/// The result has the same length and order as the input. Element `i` carries
/// `moving_average` = mean of `total_net_worth` over `i - window + 1 ..= i`
/// once `i >= window - 1`; earlier elements pass through without one. With
/// fewer than `window` elements (or a zero window) the input comes back
/// unchanged. No other field is touched.
pub fn apply_moving_average(snapshots: &[Snapshot], window: usize) -> Vec<Snapshot> {
    if window == 0 || snapshots.len() < window {
        debug!(
            "Moving average window {} not computable over {} snapshots",
            window,
            snapshots.len()
        );
        return snapshots.to_vec();
    }

    let divisor = Decimal::from(window);

    snapshots
        .iter()
        .enumerate()
        .map(|(i, snapshot)| {
            let mut point = snapshot.clone();
            if i + 1 >= window {
                point.moving_average = Some(window_mean(&snapshots[i + 1 - window..=i], divisor));
            }
            point
        })
        .collect()
}

/// Mean net worth over one window.
///
/// A sum that leaves the `Decimal` range is replaced by a sum of pre-divided
/// terms, which stays in range at the cost of the last digit of precision.
fn window_mean(window: &[Snapshot], divisor: Decimal) -> Decimal {
    let sum = window
        .iter()
        .try_fold(Decimal::ZERO, |sum, s| sum.checked_add(s.total_net_worth));
    match sum {
        Some(sum) => sum / divisor,
        None => window.iter().fold(Decimal::ZERO, |mean, s| {
            mean.saturating_add(s.total_net_worth / divisor)
        }),
    }
}
