use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use networth_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    /// Provider detail for fetch failures, shown next to the retry action
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, detail) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => (
                    StatusCode::BAD_REQUEST,
                    "validation".to_string(),
                    e.to_string(),
                    None,
                ),
                CoreError::ExportRefused(notice) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "export_refused".to_string(),
                    notice.clone(),
                    None,
                ),
                CoreError::Fetch(fetch) => (
                    StatusCode::BAD_GATEWAY,
                    fetch.code.clone(),
                    e.to_string(),
                    Some(fetch.detail.clone()),
                ),
                CoreError::Export(_) | CoreError::Unexpected(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal".to_string(),
                    e.to_string(),
                    None,
                ),
            },
            ApiError::BadRequest(reason) => (
                StatusCode::BAD_REQUEST,
                "bad_request".to_string(),
                reason.clone(),
                None,
            ),
            ApiError::Internal(reason) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal".to_string(),
                reason.clone(),
                None,
            ),
        };
        if status.is_server_error() {
            tracing::warn!("Request failed with {}: {}", status, message);
        }
        let body = Json(ErrorBody {
            code,
            message,
            detail,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
