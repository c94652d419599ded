use chrono::NaiveDate;
use log::debug;

use super::timeframe_model::Timeframe;
use crate::snapshots::Snapshot;

/// Reduces an ascending snapshot sequence to the requested window.
///
/// Keeps every snapshot dated on or after the timeframe's cutoff, in original
/// order. `Timeframe::All` returns the input unchanged. A window with no
/// matching snapshots yields an empty vector.
pub fn filter_snapshots(
    snapshots: &[Snapshot],
    timeframe: Timeframe,
    as_of: NaiveDate,
) -> Vec<Snapshot> {
    let filtered: Vec<Snapshot> = match timeframe.cutoff(as_of) {
        None => snapshots.to_vec(),
        Some(cutoff) => snapshots
            .iter()
            .filter(|s| s.date >= cutoff)
            .cloned()
            .collect(),
    };

    debug!(
        "Timeframe {} as of {}: {} of {} snapshots kept",
        timeframe,
        as_of,
        filtered.len(),
        snapshots.len()
    );

    filtered
}
