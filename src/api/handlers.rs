//! HTTP request handlers for the Statutory Deduction Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_payslip;
use crate::config::{RateStore, ReliefType};

use super::request::{PayslipCalculationRequest, RatesQuery};
use super::response::{ApiError, ApiErrorResponse, PayslipResponse, RatesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payslip", post(payslip_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for the `POST /payslip` endpoint.
///
/// Accepts a payslip calculation request and returns the full statutory
/// deduction breakdown with its compliance report.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking.
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());

    match compute_payslip(state.config(), as_of, &(&request).into()) {
        Ok(payslip) => {
            info!(
                correlation_id = %correlation_id,
                employment_type = %request.employment_type,
                gross_salary = %request.gross_salary,
                net_pay = %payslip.totals.net_pay,
                is_compliant = payslip.compliance.is_compliant,
                "Payslip calculation completed"
            );
            let response = PayslipResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                as_of,
                payslip,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for the `GET /rates` endpoint.
///
/// Resolves and returns the rate records applicable on the requested
/// date, for display and audit tooling.
async fn rates_handler(
    State(state): State<AppState>,
    Query(query): Query<RatesQuery>,
) -> impl IntoResponse {
    let as_of = query.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let config = state.config();

    let reliefs = [
        ReliefType::Personal,
        ReliefType::Insurance,
        ReliefType::Mortgage,
        ReliefType::Pension,
        ReliefType::MedicalFund,
    ]
    .into_iter()
    .filter_map(|kind| config.relief(kind, as_of))
    .collect();

    let response = RatesResponse {
        as_of,
        regime: config.regime().clone(),
        tax_bands: config.tax_bands(as_of),
        reliefs,
        nssf_tiers: config.nssf_tiers(as_of),
        shif_rate: config.shif_rate(as_of),
        housing_levy_rate: config.housing_levy_rate(as_of),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
