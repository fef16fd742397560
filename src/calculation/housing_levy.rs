//! Affordable Housing Levy calculation.
//!
//! The levy is a flat percentage of gross salary charged to the employee
//! and, separately, to the employer. The two rates are configured
//! independently even though current law sets both to 1.5%. Contract
//! employees are exempt.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::{HousingLevyRate, RateStore};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmploymentType, HousingLevyBreakdown};

use super::exemption::{exemption_reason, is_exempt, StatutoryDeduction};
use super::rounding::round_money;

/// Housing levy calculator bound to the rate applicable on one date.
#[derive(Debug, Clone)]
pub struct HousingLevyCalculator {
    rate: Option<HousingLevyRate>,
}

impl HousingLevyCalculator {
    /// Resolves the rate applicable on `as_of` from the store.
    pub fn resolve<S: RateStore + ?Sized>(store: &S, as_of: NaiveDate) -> Self {
        let rate = store.housing_levy_rate(as_of);
        if rate.is_none() {
            warn!(%as_of, "no active housing levy rate configured; levy will compute as zero");
        }
        Self { rate }
    }

    /// Calculates the housing levy for a gross salary.
    ///
    /// When the employment type is known and exempt, the result is zeroed
    /// with `applicable` false and an exemption reason.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the gross salary is
    /// negative.
    pub fn calculate(
        &self,
        gross_salary: Decimal,
        employment_type: Option<EmploymentType>,
    ) -> EngineResult<HousingLevyBreakdown> {
        if gross_salary < Decimal::ZERO {
            return Err(EngineError::negative_amount("gross_salary"));
        }

        if let Some(employment_type) = employment_type {
            if is_exempt(StatutoryDeduction::HousingLevy, employment_type) {
                return Ok(HousingLevyBreakdown {
                    gross_salary: round_money(gross_salary),
                    employee_contribution: round_money(Decimal::ZERO),
                    employer_contribution: round_money(Decimal::ZERO),
                    total_contribution: round_money(Decimal::ZERO),
                    employee_rate: Decimal::ZERO,
                    employer_rate: Decimal::ZERO,
                    applicable: false,
                    exemption_reason: Some(exemption_reason(StatutoryDeduction::HousingLevy)),
                });
            }
        }

        let Some(rate) = self
            .rate
            .as_ref()
            .filter(|_| gross_salary > Decimal::ZERO)
        else {
            return Ok(HousingLevyBreakdown {
                gross_salary: round_money(gross_salary),
                employee_contribution: round_money(Decimal::ZERO),
                employer_contribution: round_money(Decimal::ZERO),
                total_contribution: round_money(Decimal::ZERO),
                employee_rate: Decimal::ZERO,
                employer_rate: Decimal::ZERO,
                applicable: true,
                exemption_reason: None,
            });
        };

        let employee_contribution = gross_salary * rate.employee_rate / Decimal::ONE_HUNDRED;
        let employer_contribution = gross_salary * rate.employer_rate / Decimal::ONE_HUNDRED;
        let total_contribution = employee_contribution + employer_contribution;

        Ok(HousingLevyBreakdown {
            gross_salary: round_money(gross_salary),
            employee_contribution: round_money(employee_contribution),
            employer_contribution: round_money(employer_contribution),
            total_contribution: round_money(total_contribution),
            employee_rate: rate.employee_rate,
            employer_rate: rate.employer_rate,
            applicable: true,
            exemption_reason: None,
        })
    }
}
