//! Core data models for the Statutory Deduction Engine.
//!
//! This module contains the domain models shared by the calculators and
//! the API layer: the employment classification and the structured result
//! records each calculator produces.

mod deduction_result;
mod employment;
mod payslip;

pub use deduction_result::{
    AllowableDeductions, ComplianceReport, HousingLevyBreakdown, NssfBreakdown, PayeBreakdown,
    ShifBreakdown, TaxReliefs, TierContribution,
};
pub use employment::EmploymentType;
pub use payslip::{PayslipBreakdown, PayslipTotals};
