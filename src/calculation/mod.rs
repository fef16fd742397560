//! Calculation logic for the Statutory Deduction Engine.
//!
//! This module contains the deduction calculators - PAYE progressive
//! income tax, tiered NSSF pension contributions, the SHIF health levy
//! and the Affordable Housing Levy - together with the shared exemption
//! policy, the monetary rounding policy, the compliance validator and the
//! gross-to-net payslip composition.

mod compliance;
mod exemption;
mod housing_levy;
mod nssf;
mod paye;
mod payslip;
mod rounding;
mod shif;

pub use compliance::validate_compliance;
pub use exemption::{StatutoryDeduction, exemption_reason, is_exempt};
pub use housing_levy::HousingLevyCalculator;
pub use nssf::NssfCalculator;
pub use paye::{PayeCalculator, PayeInput};
pub use payslip::{PayslipRequest, compute_payslip};
pub use rounding::round_money;
pub use shif::ShifCalculator;
