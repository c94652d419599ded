//! Net worth snapshots and the adapter that loads them.
//!
//! Snapshots are immutable once received. The [`SnapshotFeed`] owns the only
//! suspension point of the pipeline and exposes load, error and retry state.

mod snapshot_feed;
mod snapshots_model;
mod snapshots_traits;

pub use snapshot_feed::*;
pub use snapshots_model::*;
pub use snapshots_traits::*;
