use std::sync::Arc;

use chrono::NaiveDate;
use chrono_tz::Tz;
use networth_connect::SnapshotApiClient;
use networth_core::utils::time_utils::today_in;
use networth_core::{DashboardService, DashboardServiceTrait, SnapshotProviderTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub timezone: Tz,
}

impl AppState {
    pub fn new(dashboard_service: Arc<dyn DashboardServiceTrait>, timezone: Tz) -> Self {
        Self {
            dashboard_service,
            timezone,
        }
    }

    /// Current calendar date in the configured timezone.
    pub fn today(&self) -> NaiveDate {
        today_in(self.timezone)
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("NW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = SnapshotApiClient::new(
        &config.snapshot_api_url,
        &config.snapshot_api_token,
        config.request_timeout,
    )
    .map_err(anyhow::Error::new)?;
    tracing::info!("Snapshot API in use: {}", client.base_url());

    let provider: Arc<dyn SnapshotProviderTrait> = Arc::new(client);
    let dashboard_service: Arc<dyn DashboardServiceTrait> =
        Arc::new(DashboardService::new(provider));

    Ok(Arc::new(AppState::new(dashboard_service, config.timezone)))
}
