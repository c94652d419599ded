use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use networth_core::{DashboardOptions, DashboardView, Timeframe};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct AsOfQuery {
    /// Optional date in ISO format (YYYY-MM-DD). Defaults to today in the configured timezone.
    date: Option<String>,
}

impl AsOfQuery {
    fn resolve(&self, state: &AppState) -> ApiResult<NaiveDate> {
        match self.date.as_deref() {
            None => Ok(state.today()),
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                ApiError::BadRequest(format!("Invalid date for date: {} ({})", raw, e))
            }),
        }
    }
}

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Path(subject_id): Path<String>,
    Query(q): Query<AsOfQuery>,
    Json(options): Json<DashboardOptions>,
) -> ApiResult<Response> {
    let as_of = q.resolve(&state)?;
    let view = state
        .dashboard_service
        .get_dashboard(&subject_id, &options, as_of)
        .await;

    let status = match view {
        DashboardView::Failed { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };
    Ok((status, Json(view)).into_response())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportRequest {
    #[serde(default)]
    timeframe: Timeframe,
}

async fn export_csv(
    State(state): State<Arc<AppState>>,
    Path(subject_id): Path<String>,
    Query(q): Query<AsOfQuery>,
    Json(request): Json<ExportRequest>,
) -> ApiResult<Response> {
    let as_of = q.resolve(&state)?;
    let export = state
        .dashboard_service
        .export_csv(&subject_id, request.timeframe, as_of)
        .await?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        export.filename
    ))
    .map_err(|e| ApiError::Internal(format!("Invalid export filename: {}", e)))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/csv; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    )
        .into_response())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimeframeOption {
    value: Timeframe,
    label: &'static str,
    is_default: bool,
}

async fn list_timeframes() -> Json<Vec<TimeframeOption>> {
    let default = Timeframe::default();
    Json(
        Timeframe::ALL_VALUES
            .iter()
            .map(|tf| TimeframeOption {
                value: *tf,
                label: tf.label(),
                is_default: *tf == default,
            })
            .collect(),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/net-worth/timeframes", get(list_timeframes))
        .route("/net-worth/{subject_id}/dashboard", post(get_dashboard))
        .route("/net-worth/{subject_id}/export", post(export_csv))
}
