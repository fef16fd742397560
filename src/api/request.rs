//! Request types for the Statutory Deduction Engine API.
//!
//! This module defines the JSON request structures for the `/payslip`
//! endpoint and the query parameters for `/rates`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PayslipRequest;
use crate::models::EmploymentType;

/// Request body for the `POST /payslip` endpoint.
///
/// Contains the employee's gross salary and employment type plus any
/// relief-eligible amounts the employee has asserted for the month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipCalculationRequest {
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// The employee's employment type.
    pub employment_type: EmploymentType,
    /// Monthly insurance premiums eligible for insurance relief.
    #[serde(default)]
    pub insurance_premiums: Option<Decimal>,
    /// Monthly mortgage interest eligible for deduction.
    #[serde(default)]
    pub mortgage_interest: Option<Decimal>,
    /// Monthly pension contribution eligible for deduction.
    #[serde(default)]
    pub pension_contribution: Option<Decimal>,
    /// Monthly post-retirement medical fund contribution eligible for
    /// deduction.
    #[serde(default)]
    pub post_retirement_medical: Option<Decimal>,
    /// The date whose rates apply; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Query parameters for the `GET /rates` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesQuery {
    /// The date whose rates to resolve; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl From<&PayslipCalculationRequest> for PayslipRequest {
    fn from(req: &PayslipCalculationRequest) -> Self {
        PayslipRequest {
            gross_salary: req.gross_salary,
            employment_type: req.employment_type,
            insurance_premiums: req.insurance_premiums,
            mortgage_interest: req.mortgage_interest,
            pension_contribution: req.pension_contribution,
            post_retirement_medical: req.post_retirement_medical,
        }
    }
}
