use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use chrono_tz::Tz;
use networth_connect::DEFAULT_SNAPSHOT_API_URL;
use networth_core::utils::time_utils::parse_timezone;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub snapshot_api_url: String,
    pub snapshot_api_token: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Timezone that decides which calendar day "today" is
    pub timezone: Tz,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("NW_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid NW_LISTEN_ADDR")?;
        let snapshot_api_url = std::env::var("NW_SNAPSHOT_API_URL")
            .unwrap_or_else(|_| DEFAULT_SNAPSHOT_API_URL.into());
        let snapshot_api_token = std::env::var("NW_SNAPSHOT_API_TOKEN").unwrap_or_default();
        let cors_allow = std::env::var("NW_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("NW_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let timezone_name =
            std::env::var("NW_TIMEZONE").unwrap_or_else(|_| "America/New_York".into());
        let timezone = parse_timezone(&timezone_name).context("Invalid NW_TIMEZONE")?;
        Ok(Self {
            listen_addr,
            snapshot_api_url,
            snapshot_api_token,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            timezone,
        })
    }
}
