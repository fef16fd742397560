//! HTTP API module for the Statutory Deduction Engine.
//!
//! This module provides the REST endpoints through which the payslip
//! workflow computes statutory deductions and inspects the resolved rate
//! tables.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayslipCalculationRequest;
pub use response::{ApiError, PayslipResponse};
pub use state::AppState;
