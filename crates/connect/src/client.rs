//! HTTP client for the net worth snapshot backend.
//!
//! The backend answers `GET {base}/net-worth/{subject}/snapshots` with either
//! `{ "data": [...] }` or `{ "error": { "code", "detail" } }`. Every failure
//! mode, including transport and decoding problems, is reported as a
//! [`FetchError`] so the dashboard can offer a retry.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

use networth_core::errors::{Error, Result};
use networth_core::snapshots::{FetchError, Snapshot, SnapshotProviderTrait};

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL of the snapshot backend.
pub const DEFAULT_SNAPSHOT_API_URL: &str = "http://localhost:3000/api";

/// Longest slice of an unexpected response body echoed into an error.
const MAX_ERROR_BODY_CHARS: usize = 200;

pub const NETWORK_ERROR_CODE: &str = "network";
pub const INVALID_RESPONSE_CODE: &str = "invalid_response";

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SnapshotEnvelope {
    #[serde(default)]
    data: Option<Vec<Snapshot>>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiErrorBody {
    fn into_fetch_error(self, status: StatusCode) -> FetchError {
        let code = self.code.unwrap_or_else(|| status_code(status));
        let detail = self
            .detail
            .or(self.message)
            .unwrap_or_else(|| format!("HTTP {}", status));
        FetchError::new(code, detail)
    }
}

fn status_code(status: StatusCode) -> String {
    format!("http_{}", status.as_u16())
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

/// Decode a snapshot response body.
///
/// An error envelope wins over the status code; a non-2xx status without one
/// becomes `http_<status>` with the truncated body as detail.
pub(crate) fn parse_snapshot_response(
    status: StatusCode,
    body: &str,
) -> std::result::Result<Vec<Snapshot>, FetchError> {
    let envelope = serde_json::from_str::<SnapshotEnvelope>(body);

    if !status.is_success() {
        if let Ok(SnapshotEnvelope {
            error: Some(err), ..
        }) = envelope
        {
            return Err(err.into_fetch_error(status));
        }
        return Err(FetchError::new(status_code(status), truncate(body)));
    }

    match envelope {
        Ok(SnapshotEnvelope {
            error: Some(err), ..
        }) => Err(err.into_fetch_error(status)),
        Ok(SnapshotEnvelope {
            data: Some(data), ..
        }) => Ok(data),
        Ok(_) => Err(FetchError::new(
            INVALID_RESPONSE_CODE,
            "Response carried neither data nor error",
        )),
        Err(e) => Err(FetchError::new(
            INVALID_RESPONSE_CODE,
            format!("Failed to parse response: {}", e),
        )),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Snapshot API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the snapshot backend.
///
/// # Example
///
/// ```ignore
/// let client = SnapshotApiClient::new("http://localhost:3000/api", "token", Duration::from_secs(30))?;
/// let snapshots = client.fetch_snapshots("household-1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
}

impl SnapshotApiClient {
    /// Create a new snapshot API client.
    ///
    /// An empty `access_token` sends requests without an `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is not a valid header value or the
    /// HTTP client cannot be initialized.
    pub fn new(base_url: &str, access_token: &str, timeout: Duration) -> Result<Self> {
        let auth_header = if access_token.is_empty() {
            None
        } else {
            Some(
                HeaderValue::from_str(&format!("Bearer {}", access_token))
                    .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))?,
            )
        };

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Create a client with [`DEFAULT_TIMEOUT_SECS`].
    pub fn with_default_timeout(base_url: &str, access_token: &str) -> Result<Self> {
        Self::new(
            base_url,
            access_token,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(auth) = &self.auth_header {
            headers.insert(AUTHORIZATION, auth.clone());
        }
        headers
    }

    fn snapshots_url(&self, subject_id: &str) -> String {
        format!(
            "{}/net-worth/{}/snapshots",
            self.base_url,
            urlencoding::encode(subject_id)
        )
    }
}

#[async_trait]
impl SnapshotProviderTrait for SnapshotApiClient {
    async fn fetch_snapshots(
        &self,
        subject_id: &str,
    ) -> std::result::Result<Vec<Snapshot>, FetchError> {
        let url = self.snapshots_url(subject_id);
        debug!("[SnapshotApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| {
                warn!("[SnapshotApi] Request to {} failed: {}", url, e);
                FetchError::new(NETWORK_ERROR_CODE, format!("Request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            FetchError::new(NETWORK_ERROR_CODE, format!("Failed to read response: {}", e))
        })?;

        let snapshots = parse_snapshot_response(status, &body)?;
        info!(
            "[SnapshotApi] Fetched {} snapshots for {}",
            snapshots.len(),
            subject_id
        );
        Ok(snapshots)
    }
}
