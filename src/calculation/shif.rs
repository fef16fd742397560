//! SHIF (Social Health Insurance Fund) contribution calculation.
//!
//! SHIF is a flat percentage of gross salary with a minimum monthly
//! contribution. It applies to every employment type unconditionally -
//! it is the one statutory deduction with no exemption.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::{RateStore, ShifRate};
use crate::error::{EngineError, EngineResult};
use crate::models::ShifBreakdown;

use super::rounding::round_money;

/// SHIF calculator bound to the rate applicable on one date.
#[derive(Debug, Clone)]
pub struct ShifCalculator {
    rate: Option<ShifRate>,
}

impl ShifCalculator {
    /// Resolves the rate applicable on `as_of` from the store.
    pub fn resolve<S: RateStore + ?Sized>(store: &S, as_of: NaiveDate) -> Self {
        let rate = store.shif_rate(as_of);
        if rate.is_none() {
            warn!(%as_of, "no active SHIF rate configured; contributions will compute as zero");
        }
        Self { rate }
    }

    /// Calculates the SHIF contribution for a gross salary.
    ///
    /// The pre-floor amount is reported alongside the final contribution
    /// so an auditor can see whether the minimum was applied. A zero
    /// salary contributes nothing; the floor only applies to positive
    /// salaries.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the gross salary is
    /// negative.
    pub fn calculate(&self, gross_salary: Decimal) -> EngineResult<ShifBreakdown> {
        if gross_salary < Decimal::ZERO {
            return Err(EngineError::negative_amount("gross_salary"));
        }

        let Some(rate) = self
            .rate
            .as_ref()
            .filter(|_| gross_salary > Decimal::ZERO)
        else {
            return Ok(ShifBreakdown {
                gross_salary: round_money(gross_salary),
                shif_contribution: round_money(Decimal::ZERO),
                contribution_rate: Decimal::ZERO,
                minimum_contribution: round_money(Decimal::ZERO),
                calculated_contribution: round_money(Decimal::ZERO),
            });
        };

        let calculated = gross_salary * rate.contribution_rate / Decimal::ONE_HUNDRED;
        let contribution = calculated.max(rate.minimum_contribution);

        Ok(ShifBreakdown {
            gross_salary: round_money(gross_salary),
            shif_contribution: round_money(contribution),
            contribution_rate: rate.contribution_rate,
            minimum_contribution: round_money(rate.minimum_contribution),
            calculated_contribution: round_money(calculated),
        })
    }
}
