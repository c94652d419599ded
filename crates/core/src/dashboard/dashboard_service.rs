//! Dashboard pipeline implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::dashboard_model::{DashboardData, DashboardOptions, DashboardView};
use super::dashboard_traits::DashboardServiceTrait;
use crate::chart::{render_chart, ViewMode};
use crate::constants::MOVING_AVERAGE_WINDOW;
use crate::errors::{Error, Result};
use crate::export::{export_csv, CsvExport};
use crate::metrics::{apply_moving_average, calculate_stats};
use crate::snapshots::{LoadState, Snapshot, SnapshotFeed, SnapshotProviderTrait};
use crate::timeframe::{filter_snapshots, Timeframe};

/// Runs every pure stage over one authoritative snapshot sequence.
///
/// Safe to call on every selection change; nothing is cached between calls.
pub fn render_dashboard(
    snapshots: &[Snapshot],
    options: &DashboardOptions,
    as_of: NaiveDate,
) -> DashboardData {
    let filtered = filter_snapshots(snapshots, options.timeframe, as_of);
    let stats = calculate_stats(&filtered);

    let wants_average =
        options.toggles.show_moving_average && options.view_mode != ViewMode::Stacked;
    let plotted = if wants_average {
        apply_moving_average(&filtered, MOVING_AVERAGE_WINDOW)
    } else {
        filtered
    };

    let chart = render_chart(
        &plotted,
        options.view_mode,
        &options.toggles,
        &options.milestones,
    );

    DashboardData {
        timeframe: options.timeframe,
        view_mode: options.view_mode,
        stats,
        chart,
    }
}

/// Maps a feed state to what the dashboard shows.
///
/// Idle and loading feeds both present the loading state.
pub fn build_dashboard(
    state: &LoadState,
    options: &DashboardOptions,
    as_of: NaiveDate,
) -> DashboardView {
    match state {
        LoadState::Idle | LoadState::Loading => DashboardView::Loading,
        LoadState::Failed(error) => DashboardView::Failed {
            error: error.clone(),
            can_retry: true,
        },
        LoadState::Loaded(snapshots) => {
            DashboardView::Ready(render_dashboard(snapshots, options, as_of))
        }
    }
}

/// Filters to the timeframe and exports the window as CSV.
pub fn export_window(
    snapshots: &[Snapshot],
    timeframe: Timeframe,
    as_of: NaiveDate,
) -> Result<CsvExport> {
    let filtered = filter_snapshots(snapshots, timeframe, as_of);
    export_csv(&filtered, timeframe, as_of)
}

/// Dashboard service backed by a snapshot provider.
///
/// Each call loads a fresh [`SnapshotFeed`]; retrying a failure means calling again.
pub struct DashboardService {
    provider: Arc<dyn SnapshotProviderTrait>,
}

impl DashboardService {
    pub fn new(provider: Arc<dyn SnapshotProviderTrait>) -> Self {
        Self { provider }
    }

    async fn load(&self, subject_id: &str) -> LoadState {
        SnapshotFeed::new(self.provider.clone(), subject_id)
            .load()
            .await
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_dashboard(
        &self,
        subject_id: &str,
        options: &DashboardOptions,
        as_of: NaiveDate,
    ) -> DashboardView {
        debug!(
            "Building {} dashboard for {} ({})",
            options.view_mode, subject_id, options.timeframe
        );
        let state = self.load(subject_id).await;
        build_dashboard(&state, options, as_of)
    }

    async fn export_csv(
        &self,
        subject_id: &str,
        timeframe: Timeframe,
        as_of: NaiveDate,
    ) -> Result<CsvExport> {
        match self.load(subject_id).await {
            LoadState::Loaded(snapshots) => export_window(&snapshots, timeframe, as_of),
            LoadState::Failed(error) => Err(Error::Fetch(error)),
            LoadState::Idle | LoadState::Loading => Err(Error::Unexpected(
                "Snapshot feed did not settle after load".to_string(),
            )),
        }
    }
}
