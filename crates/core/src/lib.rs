//! Net worth core - the net worth time-series pipeline.
//!
//! Takes a raw, ascending sequence of net worth snapshots and turns it into
//! filtered windows, summary statistics, moving averages, chart descriptions
//! and CSV exports. Every stage is a pure function of its inputs; the only
//! I/O is behind [`snapshots::SnapshotProviderTrait`], which transport crates
//! implement.

pub mod chart;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod export;
pub mod metrics;
pub mod milestones;
pub mod snapshots;
pub mod timeframe;
pub mod utils;

// Re-export the pipeline surface
pub use chart::{render_chart, ChartOutput, ChartToggles, ViewMode};
pub use dashboard::{
    build_dashboard, render_dashboard, DashboardOptions, DashboardService, DashboardServiceTrait,
    DashboardView,
};
pub use export::{export_csv, CsvExport};
pub use metrics::{apply_moving_average, calculate_stats, DerivedStats};
pub use milestones::{Milestone, MilestoneType};
pub use snapshots::{
    AssetClass, AssetsByClass, FetchError, LoadState, Snapshot, SnapshotFeed,
    SnapshotProviderTrait,
};
pub use timeframe::{filter_snapshots, Timeframe};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
