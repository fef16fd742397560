//! Response types for the Statutory Deduction Engine API.
//!
//! This module defines the success envelopes and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{HousingLevyRate, NssfTier, RegimeMetadata, Relief, ShifRate, TaxBand};
use crate::error::EngineError;
use crate::models::PayslipBreakdown;

/// Success envelope for the `POST /payslip` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipResponse {
    /// Unique identifier of this calculation, for audit correlation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The date whose rates were applied.
    pub as_of: NaiveDate,
    /// The computed statutory deduction breakdown.
    pub payslip: PayslipBreakdown,
}

/// Success envelope for the `GET /rates` endpoint: the rate records
/// resolved as applicable on the requested date.
#[derive(Debug, Clone, Serialize)]
pub struct RatesResponse {
    /// The date the rates were resolved for.
    pub as_of: NaiveDate,
    /// Regime metadata for the loaded tables.
    pub regime: RegimeMetadata,
    /// The applicable tax bands, ordered by lower limit.
    pub tax_bands: Vec<TaxBand>,
    /// The applicable relief records.
    pub reliefs: Vec<Relief>,
    /// The applicable NSSF tiers.
    pub nssf_tiers: Vec<NssfTier>,
    /// The applicable SHIF rate, if configured.
    pub shif_rate: Option<ShifRate>,
    /// The applicable housing levy rate, if configured.
    pub housing_levy_rate: Option<HousingLevyRate>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRateTable { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_RATE_TABLE",
                    "Rate table invariant violated",
                    message,
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input '{}': {}", field, message),
                    "The request contains invalid payroll input",
                ),
            },
        }
    }
}
