//! Accounting report routes.
//!
//! All three reports are scoped to the company carried by the caller's token.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::{
    AppState,
    error::{error_response, from_query_error, from_report_error},
    middleware::AuthUser,
};
use tesoreria_core::reports::{
    BalanceSheetReport, DateRange, IncomeStatementReport, ReportService, WaterfallSummary,
};
use tesoreria_db::ReportRepository;
use tesoreria_shared::{AppError, AppResult};

/// Message returned when the income statement range is incomplete.
pub const DATES_REQUIRED_MESSAGE: &str =
    "Start and end dates are required (fechaInicio, fechaFin)";

/// Creates the report routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reportes-contables/estado-resultados",
            get(get_income_statement),
        )
        .route(
            "/reportes-contables/estado-resultados-cascada",
            get(get_waterfall),
        )
        .route(
            "/reportes-contables/balance-general",
            get(get_balance_sheet),
        )
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for the income statement.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatementQuery {
    /// Start date (ISO 8601, required).
    pub fecha_inicio: Option<String>,
    /// End date (ISO 8601, required).
    pub fecha_fin: Option<String>,
}

/// Query parameters for the waterfall summary.
#[derive(Debug, Deserialize)]
pub struct WaterfallQuery {
    /// Year (defaults to the current year).
    pub anio: Option<String>,
    /// Month 1-12 (defaults to the current month).
    pub mes: Option<String>,
}

/// Query parameters for the balance sheet.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetQuery {
    /// Cutoff date (defaults to today).
    pub fecha_corte: Option<String>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Treats absent and blank parameters alike.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Parses an ISO 8601 date parameter.
fn parse_date(name: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("{name} must be a date in YYYY-MM-DD format")))
}

/// Parses an integer parameter, falling back to `default` when absent.
fn parse_number<T: std::str::FromStr>(
    name: &str,
    value: Option<&String>,
    default: T,
) -> AppResult<T> {
    present(value).map_or(Ok(default), |v| {
        v.parse()
            .map_err(|_| AppError::Validation(format!("{name} must be a number")))
    })
}

/// Unwraps query parameters, answering a malformed query string like any
/// other validation error.
fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn respond<T: serde::Serialize>(result: AppResult<T>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => error_response(&e),
    }
}

// ============================================================================
// Report Builders
// ============================================================================

async fn income_statement(
    state: &AppState,
    auth_user: &AuthUser,
    query: Result<Query<IncomeStatementQuery>, QueryRejection>,
) -> AppResult<IncomeStatementReport> {
    let company_id = auth_user.company_id()?;
    let query = query_params(query)?;
    debug!(user_id = %auth_user.user_id(), company_id, "Generating income statement");

    let (Some(start), Some(end)) = (
        present(query.fecha_inicio.as_ref()),
        present(query.fecha_fin.as_ref()),
    ) else {
        return Err(AppError::Validation(DATES_REQUIRED_MESSAGE.to_string()));
    };

    let range = DateRange::new(
        parse_date("fechaInicio", start)?,
        parse_date("fechaFin", end)?,
    )
    .map_err(|e| from_report_error(&e))?;

    let groups = ReportRepository::new((*state.db).clone())
        .query_income_statement(company_id, &range)
        .await
        .map_err(|e| from_query_error(&e))?;

    Ok(ReportService::generate_income_statement(groups))
}

async fn waterfall(
    state: &AppState,
    auth_user: &AuthUser,
    query: Result<Query<WaterfallQuery>, QueryRejection>,
) -> AppResult<WaterfallSummary> {
    let company_id = auth_user.company_id()?;
    let query = query_params(query)?;
    debug!(user_id = %auth_user.user_id(), company_id, "Generating waterfall summary");

    let today = today();
    let year = parse_number("anio", query.anio.as_ref(), today.year())?;
    let month = parse_number("mes", query.mes.as_ref(), today.month())?;
    let range = DateRange::month(year, month).map_err(|e| from_report_error(&e))?;

    let (total_income, total_expenses) = ReportRepository::new((*state.db).clone())
        .query_waterfall(company_id, &range)
        .await
        .map_err(|e| from_query_error(&e))?;

    Ok(ReportService::generate_waterfall(total_income, total_expenses))
}

async fn balance_sheet(
    state: &AppState,
    auth_user: &AuthUser,
    query: Result<Query<BalanceSheetQuery>, QueryRejection>,
) -> AppResult<BalanceSheetReport> {
    let company_id = auth_user.company_id()?;
    let query = query_params(query)?;
    debug!(user_id = %auth_user.user_id(), company_id, "Generating balance sheet");

    let as_of = match present(query.fecha_corte.as_ref()) {
        Some(value) => parse_date("fechaCorte", value)?,
        None => today(),
    };

    let accounts = ReportRepository::new((*state.db).clone())
        .query_balance_sheet(company_id, as_of)
        .await
        .map_err(|e| from_query_error(&e))?;

    Ok(ReportService::generate_balance_sheet(accounts))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /reportes-contables/estado-resultados
#[axum::debug_handler]
async fn get_income_statement(
    State(state): State<AppState>,
    query: Result<Query<IncomeStatementQuery>, QueryRejection>,
    auth_user: AuthUser,
) -> Response {
    respond(income_statement(&state, &auth_user, query).await)
}

/// GET /reportes-contables/estado-resultados-cascada
#[axum::debug_handler]
async fn get_waterfall(
    State(state): State<AppState>,
    query: Result<Query<WaterfallQuery>, QueryRejection>,
    auth_user: AuthUser,
) -> Response {
    respond(waterfall(&state, &auth_user, query).await)
}

/// GET /reportes-contables/balance-general
#[axum::debug_handler]
async fn get_balance_sheet(
    State(state): State<AppState>,
    query: Result<Query<BalanceSheetQuery>, QueryRejection>,
    auth_user: AuthUser,
) -> Response {
    respond(balance_sheet(&state, &auth_user, query).await)
}
