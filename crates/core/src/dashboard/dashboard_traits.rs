//! Dashboard service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::dashboard_model::{DashboardOptions, DashboardView};
use crate::errors::Result;
use crate::export::CsvExport;
use crate::timeframe::Timeframe;

/// Trait defining the contract for dashboard operations over a subject's snapshots.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Fetch the subject's snapshots and run the full pipeline.
    ///
    /// A fetch failure is returned inside the view as
    /// [`DashboardView::Failed`], not as an `Err`.
    async fn get_dashboard(
        &self,
        subject_id: &str,
        options: &DashboardOptions,
        as_of: NaiveDate,
    ) -> DashboardView;

    /// Fetch the subject's snapshots and export the requested window.
    ///
    /// # Errors
    /// `Error::Fetch` when the snapshots cannot be loaded,
    /// `Error::ExportRefused` when the window is empty.
    async fn export_csv(
        &self,
        subject_id: &str,
        timeframe: Timeframe,
        as_of: NaiveDate,
    ) -> Result<CsvExport>;
}
