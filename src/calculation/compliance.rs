//! Compliance validation of computed statutory deductions.
//!
//! This is a pure predicate layer over numbers produced by the
//! calculators: it performs no arithmetic of its own, so the "what must
//! be true" rules can be audited and tested independently of how the
//! numbers were derived. Violations are first-class results, never
//! errors - the calling workflow decides whether to block approval, log,
//! or notify.

use rust_decimal::Decimal;

use crate::models::{ComplianceReport, EmploymentType};

use super::exemption::{is_exempt, StatutoryDeduction};

/// Validates employee-side NSSF and housing levy amounts against the
/// employment-type rules.
///
/// Rules:
/// - A non-exempt employment type with a zero (or negative) contribution
///   is a compliance error - the mandatory deduction is missing.
/// - An exempt employment type with a positive contribution draws a
///   warning - the deduction should not have been taken.
/// - Casual workers with a missing contribution draw an extra reminder
///   warning: casual exemption is a common payroll misconception.
/// - Contract employees always draw an informational note that only SHIF
///   applies.
///
/// `is_compliant` is false if and only if `errors` is non-empty.
pub fn validate_compliance(
    employment_type: EmploymentType,
    nssf_contribution: Decimal,
    housing_levy_contribution: Decimal,
) -> ComplianceReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    check_deduction(
        "NSSF contribution",
        StatutoryDeduction::Nssf,
        employment_type,
        nssf_contribution,
        &mut errors,
        &mut warnings,
    );
    check_deduction(
        "Housing Levy",
        StatutoryDeduction::HousingLevy,
        employment_type,
        housing_levy_contribution,
        &mut errors,
        &mut warnings,
    );

    if employment_type == EmploymentType::Casual
        && (nssf_contribution <= Decimal::ZERO || housing_levy_contribution <= Decimal::ZERO)
    {
        warnings.push(
            "REMINDER: Both NSSF and Housing Levy are mandatory for casual workers \
             under the NSSF Act 2013 and the Affordable Housing Act."
                .to_string(),
        );
    }

    if employment_type == EmploymentType::Contract {
        warnings.push(
            "Contract employee: only SHIF deductions apply. \
             NSSF and Housing Levy are not deducted for contract employees."
                .to_string(),
        );
    }

    ComplianceReport {
        is_compliant: errors.is_empty(),
        errors,
        warnings,
        employment_type,
    }
}

fn check_deduction(
    name: &str,
    deduction: StatutoryDeduction,
    employment_type: EmploymentType,
    contribution: Decimal,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    if is_exempt(deduction, employment_type) {
        if contribution > Decimal::ZERO {
            warnings.push(format!(
                "Contract employees should not have {} deductions. \
                 Only SHIF is mandatory for contract employees.",
                name
            ));
        }
    } else if contribution <= Decimal::ZERO {
        errors.push(format!(
            "{} is mandatory for {} employees but is missing.",
            name, employment_type
        ));
    }
}
