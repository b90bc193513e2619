//! Conversion of application errors into JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tesoreria_core::reports::ReportError;
use tesoreria_db::ReportQueryError;
use tesoreria_shared::AppError;
use tracing::error;

/// Builds the `{ "error", "message" }` response for an application error.
///
/// Server-side errors are logged with their detail and answered with a
/// generic message.
pub fn error_response(err: &AppError) -> Response {
    if err.is_server_error() {
        error!(error = %err, "Request failed");
    }

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.public_message(),
        })),
    )
        .into_response()
}

/// Maps request-level report errors (bad ranges, bad months) to validation
/// errors.
pub fn from_report_error(err: &ReportError) -> AppError {
    match err {
        ReportError::InvalidDateRange { .. }
        | ReportError::InvalidMonth(_)
        | ReportError::InvalidYear(_) => AppError::Validation(err.to_string()),
        ReportError::UnknownAccountType(_) | ReportError::UnknownBalanceNature(_) => {
            AppError::Internal(err.to_string())
        }
    }
}

/// Maps data-access failures to server errors.
pub fn from_query_error(err: &ReportQueryError) -> AppError {
    match err {
        ReportQueryError::Database(e) => AppError::Database(e.to_string()),
        ReportQueryError::InvalidRow(e) => AppError::Internal(e.to_string()),
    }
}
