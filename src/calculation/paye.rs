//! PAYE (Pay As You Earn) progressive income-tax calculation.
//!
//! PAYE is computed by walking the active tax bands in ascending order and
//! taxing the slice of income falling inside each band at that band's
//! marginal rate, then subtracting tax reliefs. Allowable deductions
//! (mortgage interest, pension, post-retirement medical) reduce taxable
//! income before the band walk, each capped at the limit configured in the
//! rate repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::{RateStore, Relief, ReliefType, TaxBand};
use crate::error::{EngineError, EngineResult};
use crate::models::{AllowableDeductions, PayeBreakdown, TaxReliefs};

use super::rounding::round_money;

/// The inputs to a PAYE calculation.
///
/// `taxable_income` is gross salary minus the employee's NSSF
/// contribution; the caller is responsible for that subtraction. The
/// optional fields are caller-asserted monthly amounts eligible for
/// deduction or relief.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayeInput {
    /// Monthly taxable income.
    pub taxable_income: Decimal,
    /// Monthly life/health/education insurance premiums.
    pub insurance_premiums: Option<Decimal>,
    /// Monthly mortgage interest paid.
    pub mortgage_interest: Option<Decimal>,
    /// Monthly registered pension contribution.
    pub pension_contribution: Option<Decimal>,
    /// Monthly post-retirement medical fund contribution.
    pub post_retirement_medical: Option<Decimal>,
}

impl PayeInput {
    /// Creates an input with the given taxable income and no optional
    /// deduction or relief amounts.
    pub fn new(taxable_income: Decimal) -> Self {
        Self {
            taxable_income,
            ..Self::default()
        }
    }
}

/// PAYE calculator bound to the rates applicable on one date.
///
/// The calculator snapshots its bands and reliefs from the rate store at
/// construction; every subsequent [`calculate`](Self::calculate) call is
/// pure arithmetic, so one instance can serve a whole payroll run for its
/// date.
#[derive(Debug, Clone)]
pub struct PayeCalculator {
    bands: Vec<TaxBand>,
    personal_relief: Option<Relief>,
    insurance_relief: Option<Relief>,
    mortgage_cap: Option<Decimal>,
    pension_cap: Option<Decimal>,
    medical_fund_cap: Option<Decimal>,
}

impl PayeCalculator {
    /// Resolves the rates applicable on `as_of` from the store.
    pub fn resolve<S: RateStore + ?Sized>(store: &S, as_of: NaiveDate) -> Self {
        let bands = store.tax_bands(as_of);
        if bands.is_empty() {
            warn!(%as_of, "no active PAYE tax bands configured; PAYE will compute as zero");
        }
        let personal_relief = store.relief(ReliefType::Personal, as_of);
        if personal_relief.is_none() {
            warn!(%as_of, "no active personal relief configured; relief will compute as zero");
        }
        Self {
            bands,
            personal_relief,
            insurance_relief: store.relief(ReliefType::Insurance, as_of),
            mortgage_cap: store
                .relief(ReliefType::Mortgage, as_of)
                .and_then(|r| r.maximum_amount),
            pension_cap: store
                .relief(ReliefType::Pension, as_of)
                .and_then(|r| r.maximum_amount),
            medical_fund_cap: store
                .relief(ReliefType::MedicalFund, as_of)
                .and_then(|r| r.maximum_amount),
        }
    }

    /// Calculates PAYE for the given input.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the taxable income or any
    /// optional amount is negative.
    pub fn calculate(&self, input: &PayeInput) -> EngineResult<PayeBreakdown> {
        validate_non_negative("taxable_income", Some(input.taxable_income))?;
        validate_non_negative("insurance_premiums", input.insurance_premiums)?;
        validate_non_negative("mortgage_interest", input.mortgage_interest)?;
        validate_non_negative("pension_contribution", input.pension_contribution)?;
        validate_non_negative("post_retirement_medical", input.post_retirement_medical)?;

        let mortgage =
            self.allowable("mortgage_interest", input.mortgage_interest, self.mortgage_cap);
        let pension =
            self.allowable("pension_contribution", input.pension_contribution, self.pension_cap);
        let medical = self.allowable(
            "post_retirement_medical",
            input.post_retirement_medical,
            self.medical_fund_cap,
        );
        let deductions_total = mortgage + pension + medical;

        let income_after_deductions =
            (input.taxable_income - deductions_total).max(Decimal::ZERO);

        let tax_before_relief = self.tax_on_income(income_after_deductions);

        let personal_relief = self
            .personal_relief
            .as_ref()
            .and_then(|r| r.amount)
            .unwrap_or(Decimal::ZERO);
        let insurance_relief = self.compute_insurance_relief(input.insurance_premiums);
        let relief_total = personal_relief + insurance_relief;

        let paye_tax = round_money((tax_before_relief - relief_total).max(Decimal::ZERO));
        let effective_tax_rate = if input.taxable_income > Decimal::ZERO {
            round_money(paye_tax / input.taxable_income * Decimal::ONE_HUNDRED)
        } else {
            round_money(Decimal::ZERO)
        };

        Ok(PayeBreakdown {
            taxable_income: round_money(input.taxable_income),
            allowable_deductions: AllowableDeductions {
                mortgage_interest: round_money(mortgage),
                pension_contribution: round_money(pension),
                post_retirement_medical: round_money(medical),
                total: round_money(deductions_total),
            },
            income_after_deductions: round_money(income_after_deductions),
            tax_before_relief: round_money(tax_before_relief),
            tax_reliefs: TaxReliefs {
                personal_relief: round_money(personal_relief),
                insurance_relief: round_money(insurance_relief),
                total: round_money(relief_total),
            },
            paye_tax,
            effective_tax_rate,
        })
    }

    /// Caps a claimed deduction at its configured limit.
    ///
    /// A claimed deduction whose relief record is not configured
    /// contributes nothing: a deduction with no statutory basis must not
    /// reduce tax.
    fn allowable(&self, field: &str, claimed: Option<Decimal>, cap: Option<Decimal>) -> Decimal {
        let claimed = claimed.unwrap_or(Decimal::ZERO);
        if claimed <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        match cap {
            Some(cap) => claimed.min(cap),
            None => {
                warn!(field, "deduction claimed but no relief cap configured; ignoring");
                Decimal::ZERO
            }
        }
    }

    /// Computes tax over the progressive bands, before reliefs.
    fn tax_on_income(&self, income: Decimal) -> Decimal {
        if income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut total_tax = Decimal::ZERO;
        for band in &self.bands {
            // Bands are ordered ascending, so nothing above reaches income.
            if income <= band.lower_limit {
                break;
            }
            let slice_top = match band.upper_limit {
                Some(upper) => income.min(upper),
                None => income,
            };
            let taxable_in_band = (slice_top - band.lower_limit).max(Decimal::ZERO);
            total_tax += taxable_in_band * band.tax_rate / Decimal::ONE_HUNDRED;
        }
        total_tax
    }

    /// Computes insurance relief: a percentage of annualized premiums,
    /// capped annually, prorated back to a monthly amount.
    fn compute_insurance_relief(&self, premiums: Option<Decimal>) -> Decimal {
        let premiums = premiums.unwrap_or(Decimal::ZERO);
        if premiums <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let Some(relief) = &self.insurance_relief else {
            warn!("insurance premiums supplied but no insurance relief configured; ignoring");
            return Decimal::ZERO;
        };

        let rate = relief.rate.unwrap_or(Decimal::ZERO);
        let twelve = Decimal::from(12);
        let annual_relief = premiums * twelve * rate / Decimal::ONE_HUNDRED;
        let capped = match relief.maximum_amount {
            // The cap is stored as a monthly amount; the statutory limit is annual.
            Some(monthly_cap) => annual_relief.min(monthly_cap * twelve),
            None => annual_relief,
        };
        capped / twelve
    }
}

fn validate_non_negative(field: &str, amount: Option<Decimal>) -> EngineResult<()> {
    match amount {
        Some(value) if value < Decimal::ZERO => Err(EngineError::negative_amount(field)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RegimeMetadata, StatutoryConfig};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn band(lower: &str, upper: Option<&str>, rate: &str) -> TaxBand {
        TaxBand {
            lower_limit: dec(lower),
            upper_limit: upper.map(dec),
            tax_rate: dec(rate),
            effective_date: date("2023-07-01"),
            is_active: true,
        }
    }

    fn relief(
        kind: ReliefType,
        amount: Option<&str>,
        rate: Option<&str>,
        maximum: Option<&str>,
    ) -> Relief {
        Relief {
            relief_type: kind,
            amount: amount.map(dec),
            rate: rate.map(dec),
            maximum_amount: maximum.map(dec),
            effective_date: date("2023-07-01"),
            is_active: true,
        }
    }

    fn test_config() -> StatutoryConfig {
        StatutoryConfig::new(
            RegimeMetadata {
                jurisdiction: "KE".to_string(),
                name: "test".to_string(),
                version: "test".to_string(),
                source_url: "https://example.com".to_string(),
            },
            vec![
                band("0", Some("24000"), "10"),
                band("24001", Some("32333"), "25"),
                band("32334", Some("500000"), "30"),
                band("500001", Some("800000"), "32.5"),
                band("800001", None, "35"),
            ],
            vec![
                relief(ReliefType::Personal, Some("2400"), None, None),
                relief(ReliefType::Insurance, None, Some("15"), Some("5000")),
                relief(ReliefType::Mortgage, None, None, Some("30000")),
                relief(ReliefType::Pension, None, None, Some("30000")),
                relief(ReliefType::MedicalFund, None, None, Some("15000")),
            ],
            vec![],
            vec![],
            vec![],
        )
    }

    fn calculator() -> PayeCalculator {
        PayeCalculator::resolve(&test_config(), date("2025-01-01"))
    }

    /// Income inside the first band only: 10% of 20,000 is fully absorbed
    /// by the 2,400 personal relief.
    #[test]
    fn test_first_band_income_fully_relieved() {
        let result = calculator()
            .calculate(&PayeInput::new(dec("20000")))
            .unwrap();

        assert_eq!(result.tax_before_relief, dec("2000.00"));
        assert_eq!(result.tax_reliefs.personal_relief, dec("2400.00"));
        assert_eq!(result.paye_tax, dec("0.00"));
        assert_eq!(result.effective_tax_rate, dec("0.00"));
    }

    /// Income spanning three bands.
    #[test]
    fn test_progressive_tax_across_bands() {
        let result = calculator()
            .calculate(&PayeInput::new(dec("50000")))
            .unwrap();

        // 24000 @ 10% + 8332 @ 25% + 17666 @ 30% = 2400 + 2083 + 5299.80
        assert_eq!(result.tax_before_relief, dec("9782.80"));
        assert_eq!(result.paye_tax, dec("7382.80"));
        assert_eq!(result.effective_tax_rate, dec("14.77"));
    }

    #[test]
    fn test_income_at_band_boundary() {
        let at_boundary = calculator()
            .calculate(&PayeInput::new(dec("24000")))
            .unwrap();
        let just_above = calculator()
            .calculate(&PayeInput::new(dec("24001")))
            .unwrap();

        assert_eq!(at_boundary.tax_before_relief, dec("2400.00"));
        // The first shilling of the second band contributes nothing extra.
        assert_eq!(just_above.tax_before_relief, dec("2400.00"));
    }

    #[test]
    fn test_top_band_is_unbounded() {
        let result = calculator()
            .calculate(&PayeInput::new(dec("1000000")))
            .unwrap();

        // 24000@10% + 8332@25% + 467666@30% + 299999@32.5% + 199999@35%
        // = 2400 + 2083 + 140299.80 + 97499.675 + 69999.65 = 312282.125
        assert_eq!(result.tax_before_relief, dec("312282.13"));
        // 312282.125 - 2400 = 309882.125, rounded half-up.
        assert_eq!(result.paye_tax, dec("309882.13"));
    }

    #[test]
    fn test_zero_income_yields_zero_tax_and_rate() {
        let result = calculator().calculate(&PayeInput::new(Decimal::ZERO)).unwrap();

        assert_eq!(result.paye_tax, dec("0.00"));
        assert_eq!(result.effective_tax_rate, dec("0.00"));
        assert_eq!(result.income_after_deductions, dec("0.00"));
    }

    #[test]
    fn test_negative_income_is_rejected() {
        let result = calculator().calculate(&PayeInput::new(dec("-100")));

        match result {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "taxable_income");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_optional_amount_is_rejected() {
        let mut input = PayeInput::new(dec("50000"));
        input.mortgage_interest = Some(dec("-1"));

        assert!(calculator().calculate(&input).is_err());
    }

    #[test]
    fn test_mortgage_interest_capped_at_configured_limit() {
        let mut input = PayeInput::new(dec("100000"));
        input.mortgage_interest = Some(dec("40000"));

        let result = calculator().calculate(&input).unwrap();

        assert_eq!(result.allowable_deductions.mortgage_interest, dec("30000.00"));
        assert_eq!(result.income_after_deductions, dec("70000.00"));
    }

    #[test]
    fn test_medical_fund_capped_at_configured_limit() {
        let mut input = PayeInput::new(dec("100000"));
        input.post_retirement_medical = Some(dec("20000"));

        let result = calculator().calculate(&input).unwrap();

        assert_eq!(
            result.allowable_deductions.post_retirement_medical,
            dec("15000.00")
        );
    }

    #[test]
    fn test_deductions_cannot_push_income_negative() {
        let mut input = PayeInput::new(dec("10000"));
        input.pension_contribution = Some(dec("25000"));

        let result = calculator().calculate(&input).unwrap();

        assert_eq!(result.allowable_deductions.pension_contribution, dec("25000.00"));
        assert_eq!(result.income_after_deductions, dec("0.00"));
        assert_eq!(result.paye_tax, dec("0.00"));
    }

    /// Insurance relief is 15% of annualized premiums prorated monthly:
    /// 3,000/month -> 36,000/year -> 5,400 relief/year -> 450/month.
    #[test]
    fn test_insurance_relief_prorated_monthly() {
        let mut input = PayeInput::new(dec("50000"));
        input.insurance_premiums = Some(dec("3000"));

        let result = calculator().calculate(&input).unwrap();

        assert_eq!(result.tax_reliefs.insurance_relief, dec("450.00"));
        assert_eq!(result.paye_tax, dec("6932.80"));
    }

    /// The annual cap binds: 40,000/month premiums would earn 72,000/year
    /// of relief, capped at 60,000/year -> 5,000/month.
    #[test]
    fn test_insurance_relief_annual_cap() {
        let mut input = PayeInput::new(dec("100000"));
        input.insurance_premiums = Some(dec("40000"));

        let result = calculator().calculate(&input).unwrap();

        assert_eq!(result.tax_reliefs.insurance_relief, dec("5000.00"));
    }

    #[test]
    fn test_missing_personal_relief_degrades_to_zero() {
        let config = StatutoryConfig::new(
            RegimeMetadata {
                jurisdiction: "KE".to_string(),
                name: "test".to_string(),
                version: "test".to_string(),
                source_url: "https://example.com".to_string(),
            },
            vec![band("0", Some("24000"), "10"), band("24001", None, "25")],
            vec![],
            vec![],
            vec![],
            vec![],
        );
        let calculator = PayeCalculator::resolve(&config, date("2025-01-01"));

        let result = calculator.calculate(&PayeInput::new(dec("20000"))).unwrap();

        // No silent fallback: tax stands unrelieved.
        assert_eq!(result.tax_reliefs.personal_relief, dec("0.00"));
        assert_eq!(result.paye_tax, dec("2000.00"));
    }

    #[test]
    fn test_claimed_deduction_without_configured_cap_is_ignored() {
        let config = StatutoryConfig::new(
            RegimeMetadata {
                jurisdiction: "KE".to_string(),
                name: "test".to_string(),
                version: "test".to_string(),
                source_url: "https://example.com".to_string(),
            },
            vec![band("0", None, "10")],
            vec![relief(ReliefType::Personal, Some("2400"), None, None)],
            vec![],
            vec![],
            vec![],
        );
        let calculator = PayeCalculator::resolve(&config, date("2025-01-01"));

        let mut input = PayeInput::new(dec("50000"));
        input.mortgage_interest = Some(dec("10000"));
        let result = calculator.calculate(&input).unwrap();

        assert_eq!(result.allowable_deductions.mortgage_interest, dec("0.00"));
        assert_eq!(result.income_after_deductions, dec("50000.00"));
    }

    #[test]
    fn test_no_bands_configured_computes_zero_tax() {
        let config = StatutoryConfig::new(
            RegimeMetadata {
                jurisdiction: "KE".to_string(),
                name: "test".to_string(),
                version: "test".to_string(),
                source_url: "https://example.com".to_string(),
            },
            vec![],
            vec![relief(ReliefType::Personal, Some("2400"), None, None)],
            vec![],
            vec![],
            vec![],
        );
        let calculator = PayeCalculator::resolve(&config, date("2025-01-01"));

        let result = calculator.calculate(&PayeInput::new(dec("50000"))).unwrap();

        assert_eq!(result.tax_before_relief, dec("0.00"));
        assert_eq!(result.paye_tax, dec("0.00"));
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let calculator = calculator();
        let mut input = PayeInput::new(dec("123456.78"));
        input.insurance_premiums = Some(dec("2500"));
        input.pension_contribution = Some(dec("10000"));

        let first = calculator.calculate(&input).unwrap();
        let second = calculator.calculate(&input).unwrap();

        assert_eq!(first, second);
    }
}
