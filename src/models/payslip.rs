//! The composed gross-to-net payslip result.
//!
//! The payroll workflow runs the four deduction calculators, composes
//! their outputs into gross-to-net figures, and validates the composed
//! result. [`PayslipBreakdown`] is the structured record it receives.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    ComplianceReport, HousingLevyBreakdown, NssfBreakdown, PayeBreakdown, ShifBreakdown,
};

/// Aggregated gross-to-net totals for a payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipTotals {
    /// The gross salary the payslip was computed from.
    pub gross_salary: Decimal,
    /// Sum of the employee-side statutory deductions
    /// (PAYE + NSSF + SHIF + housing levy).
    pub total_statutory_deductions: Decimal,
    /// Gross salary minus total statutory deductions.
    pub net_pay: Decimal,
    /// Net pay as a percentage of gross (0 for zero gross).
    pub take_home_rate: Decimal,
}

/// The complete statutory deduction breakdown for one employee's payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipBreakdown {
    /// NSSF pension contribution breakdown.
    pub nssf: NssfBreakdown,
    /// SHIF health levy breakdown.
    pub shif: ShifBreakdown,
    /// Affordable Housing Levy breakdown.
    pub housing_levy: HousingLevyBreakdown,
    /// The taxable income PAYE was computed on
    /// (gross salary minus the employee NSSF contribution).
    pub taxable_income: Decimal,
    /// PAYE income tax breakdown.
    pub paye: PayeBreakdown,
    /// Gross-to-net totals.
    pub totals: PayslipTotals,
    /// Compliance validation over the computed deductions.
    pub compliance: ComplianceReport,
}
