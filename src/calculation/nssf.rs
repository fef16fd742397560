//! NSSF (National Social Security Fund) contribution calculation.
//!
//! Contributions are tiered: tier 1 covers pensionable pay up to its upper
//! limit, tier 2 the excess up to its own limit. The employer matches the
//! employee contribution 1:1 in every tier - a design invariant of the
//! scheme, not a coincidence of current rates.
//!
//! Contract employees are exempt from NSSF entirely; only SHIF applies to
//! them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::{NssfTier, RateStore};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmploymentType, NssfBreakdown, TierContribution};

use super::exemption::{exemption_reason, is_exempt, StatutoryDeduction};
use super::rounding::round_money;

/// NSSF calculator bound to the tiers applicable on one date.
#[derive(Debug, Clone)]
pub struct NssfCalculator {
    tiers: Vec<NssfTier>,
}

impl NssfCalculator {
    /// Resolves the tiers applicable on `as_of` from the store.
    pub fn resolve<S: RateStore + ?Sized>(store: &S, as_of: NaiveDate) -> Self {
        let tiers = store.nssf_tiers(as_of);
        if tiers.is_empty() {
            warn!(%as_of, "no active NSSF tiers configured; contributions will compute as zero");
        }
        Self { tiers }
    }

    /// Calculates the NSSF contribution for a gross salary.
    ///
    /// When the employment type is known and exempt, the result is zeroed
    /// with `applicable` false and an exemption reason. A zero salary
    /// yields zero contributions with `applicable` true, so downstream
    /// compliance checks can tell the two apart.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the gross salary is
    /// negative.
    pub fn calculate(
        &self,
        gross_salary: Decimal,
        employment_type: Option<EmploymentType>,
    ) -> EngineResult<NssfBreakdown> {
        if gross_salary < Decimal::ZERO {
            return Err(EngineError::negative_amount("gross_salary"));
        }

        if let Some(employment_type) = employment_type {
            if is_exempt(StatutoryDeduction::Nssf, employment_type) {
                return Ok(exempt_breakdown(gross_salary));
            }
        }

        let mut tier_1_contribution = Decimal::ZERO;
        let mut tier_2_contribution = Decimal::ZERO;
        let mut breakdown = Vec::new();

        // Each tier's pensionable slice starts where the previous tier's
        // range ends.
        let mut floor = Decimal::ZERO;
        for tier in &self.tiers {
            let slice_top = match tier.upper_limit {
                Some(upper) => gross_salary.min(upper),
                None => gross_salary,
            };
            let pensionable = (slice_top - floor).max(Decimal::ZERO);
            if let Some(upper) = tier.upper_limit {
                floor = upper;
            }
            if pensionable <= Decimal::ZERO {
                continue;
            }

            let contribution = pensionable * tier.contribution_rate / Decimal::ONE_HUNDRED;
            match tier.tier {
                1 => tier_1_contribution += contribution,
                _ => tier_2_contribution += contribution,
            }
            breakdown.push(TierContribution {
                tier: tier.tier,
                pensionable_amount: round_money(pensionable),
                rate: tier.contribution_rate,
                employee_contribution: round_money(contribution),
                employer_contribution: round_money(contribution),
            });
        }

        let employee_contribution = tier_1_contribution + tier_2_contribution;
        // Employer matches the employee contribution exactly, per tier.
        let employer_contribution = employee_contribution;
        let total_contribution = employee_contribution + employer_contribution;

        Ok(NssfBreakdown {
            gross_salary: round_money(gross_salary),
            tier_1_contribution: round_money(tier_1_contribution),
            tier_2_contribution: round_money(tier_2_contribution),
            employee_contribution: round_money(employee_contribution),
            employer_contribution: round_money(employer_contribution),
            total_contribution: round_money(total_contribution),
            contribution_breakdown: breakdown,
            applicable: true,
            exemption_reason: None,
        })
    }
}

fn exempt_breakdown(gross_salary: Decimal) -> NssfBreakdown {
    NssfBreakdown {
        gross_salary: round_money(gross_salary),
        tier_1_contribution: round_money(Decimal::ZERO),
        tier_2_contribution: round_money(Decimal::ZERO),
        employee_contribution: round_money(Decimal::ZERO),
        employer_contribution: round_money(Decimal::ZERO),
        total_contribution: round_money(Decimal::ZERO),
        contribution_breakdown: vec![],
        applicable: false,
        exemption_reason: Some(exemption_reason(StatutoryDeduction::Nssf)),
    }
}
