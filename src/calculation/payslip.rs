//! Gross-to-net payslip composition.
//!
//! Runs the four deduction calculators for one employee and composes
//! their outputs: NSSF first (its employee contribution is deducted from
//! gross salary to form PAYE's taxable income), then PAYE, SHIF and the
//! housing levy, then the compliance validator over the composed result.
//!
//! The composition is stateless and resolves all rates for a single
//! `as_of` date, so computing a payroll period across hundreds of
//! employees is embarrassingly parallel; batch fan-out belongs to the
//! calling workflow.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::RateStore;
use crate::error::EngineResult;
use crate::models::{EmploymentType, PayslipBreakdown, PayslipTotals};

use super::compliance::validate_compliance;
use super::housing_levy::HousingLevyCalculator;
use super::nssf::NssfCalculator;
use super::paye::{PayeCalculator, PayeInput};
use super::rounding::round_money;
use super::shif::ShifCalculator;

/// The inputs to a payslip composition.
#[derive(Debug, Clone, PartialEq)]
pub struct PayslipRequest {
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// The employee's employment type.
    pub employment_type: EmploymentType,
    /// Monthly insurance premiums eligible for insurance relief.
    pub insurance_premiums: Option<Decimal>,
    /// Monthly mortgage interest eligible for deduction.
    pub mortgage_interest: Option<Decimal>,
    /// Monthly pension contribution eligible for deduction.
    pub pension_contribution: Option<Decimal>,
    /// Monthly post-retirement medical fund contribution eligible for
    /// deduction.
    pub post_retirement_medical: Option<Decimal>,
}

impl PayslipRequest {
    /// Creates a request with the given salary and employment type and no
    /// optional relief amounts.
    pub fn new(gross_salary: Decimal, employment_type: EmploymentType) -> Self {
        Self {
            gross_salary,
            employment_type,
            insurance_premiums: None,
            mortgage_interest: None,
            pension_contribution: None,
            post_retirement_medical: None,
        }
    }
}

/// Computes the full statutory deduction breakdown for one employee.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInput`] if the gross
/// salary or any optional amount is negative. Missing rate configuration
/// never fails the composition; the affected deduction computes as zero.
pub fn compute_payslip<S: RateStore + ?Sized>(
    store: &S,
    as_of: NaiveDate,
    request: &PayslipRequest,
) -> EngineResult<PayslipBreakdown> {
    let employment_type = request.employment_type;

    let nssf = NssfCalculator::resolve(store, as_of)
        .calculate(request.gross_salary, Some(employment_type))?;

    // PAYE is computed on gross salary net of the employee's own NSSF
    // contribution.
    let taxable_income = request.gross_salary - nssf.employee_contribution;
    let paye_input = PayeInput {
        taxable_income,
        insurance_premiums: request.insurance_premiums,
        mortgage_interest: request.mortgage_interest,
        pension_contribution: request.pension_contribution,
        post_retirement_medical: request.post_retirement_medical,
    };
    let paye = PayeCalculator::resolve(store, as_of).calculate(&paye_input)?;

    let shif = ShifCalculator::resolve(store, as_of).calculate(request.gross_salary)?;
    let housing_levy = HousingLevyCalculator::resolve(store, as_of)
        .calculate(request.gross_salary, Some(employment_type))?;

    let total_statutory_deductions = paye.paye_tax
        + nssf.employee_contribution
        + shif.shif_contribution
        + housing_levy.employee_contribution;
    let net_pay = request.gross_salary - total_statutory_deductions;
    let take_home_rate = if request.gross_salary > Decimal::ZERO {
        round_money(net_pay / request.gross_salary * Decimal::ONE_HUNDRED)
    } else {
        round_money(Decimal::ZERO)
    };

    let compliance = validate_compliance(
        employment_type,
        nssf.employee_contribution,
        housing_levy.employee_contribution,
    );

    Ok(PayslipBreakdown {
        taxable_income: round_money(taxable_income),
        totals: PayslipTotals {
            gross_salary: round_money(request.gross_salary),
            total_statutory_deductions: round_money(total_statutory_deductions),
            net_pay: round_money(net_pay),
            take_home_rate,
        },
        nssf,
        shif,
        housing_levy,
        paye,
        compliance,
    })
}
