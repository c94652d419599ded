//! Dashboard request and view models.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartOutput, ChartToggles, ViewMode};
use crate::metrics::DerivedStats;
use crate::milestones::Milestone;
use crate::snapshots::FetchError;
use crate::timeframe::Timeframe;

/// Everything the caller selects on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardOptions {
    pub timeframe: Timeframe,
    pub view_mode: ViewMode,
    #[serde(flatten)]
    pub toggles: ChartToggles,
    pub milestones: Vec<Milestone>,
}

/// Pipeline output for a loaded snapshot sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub timeframe: Timeframe,
    pub view_mode: ViewMode,
    /// `None` when the window is empty
    pub stats: Option<DerivedStats>,
    pub chart: ChartOutput,
}

/// What the dashboard shows for the current feed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DashboardView {
    /// Fetch pending; no chart, not even a stale one
    Loading,
    /// Fetch failed; the UI shows the error with a retry action
    #[serde(rename_all = "camelCase")]
    Failed { error: FetchError, can_retry: bool },
    Ready(DashboardData),
}

impl DashboardView {
    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            DashboardView::Ready(data) => Some(data),
            _ => None,
        }
    }
}
