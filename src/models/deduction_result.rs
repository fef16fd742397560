//! Result models for the statutory deduction calculators.
//!
//! Each calculator produces a structured breakdown rather than a bare
//! number: payroll figures have legal and financial consequences, so every
//! result carries the intermediate amounts an auditor needs to reproduce
//! it. All monetary fields are rounded half-up to 2 decimal places at
//! result construction; intermediate sums are never rounded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmploymentType;

/// The itemized deductions allowed against taxable income before PAYE.
///
/// Each item is the caller-asserted amount truncated to the cap configured
/// for the corresponding relief record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowableDeductions {
    /// Mortgage interest allowed, after capping.
    pub mortgage_interest: Decimal,
    /// Pension contribution allowed, after capping.
    pub pension_contribution: Decimal,
    /// Post-retirement medical fund contribution allowed, after capping.
    pub post_retirement_medical: Decimal,
    /// Sum of the allowed items.
    pub total: Decimal,
}

/// The itemized reliefs subtracted from computed tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxReliefs {
    /// Flat personal relief.
    pub personal_relief: Decimal,
    /// Insurance relief (computed annually, prorated monthly).
    pub insurance_relief: Decimal,
    /// Sum of all reliefs.
    pub total: Decimal,
}

/// The complete breakdown of a PAYE calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayeBreakdown {
    /// The taxable income the calculation started from.
    pub taxable_income: Decimal,
    /// Deductions allowed against taxable income, itemized.
    pub allowable_deductions: AllowableDeductions,
    /// Taxable income after allowable deductions.
    pub income_after_deductions: Decimal,
    /// Tax computed over the progressive bands, before reliefs.
    pub tax_before_relief: Decimal,
    /// Reliefs subtracted from the computed tax, itemized.
    pub tax_reliefs: TaxReliefs,
    /// The final PAYE tax payable.
    pub paye_tax: Decimal,
    /// PAYE as a percentage of taxable income (0 for zero income).
    pub effective_tax_rate: Decimal,
}

impl PayeBreakdown {
    /// Returns the same breakdown expressed in annual terms.
    ///
    /// Monetary amounts are multiplied by 12; the effective tax rate is a
    /// ratio and carries over unchanged.
    pub fn annualized(&self) -> PayeBreakdown {
        let twelve = Decimal::from(12);
        PayeBreakdown {
            taxable_income: self.taxable_income * twelve,
            allowable_deductions: AllowableDeductions {
                mortgage_interest: self.allowable_deductions.mortgage_interest * twelve,
                pension_contribution: self.allowable_deductions.pension_contribution * twelve,
                post_retirement_medical: self.allowable_deductions.post_retirement_medical
                    * twelve,
                total: self.allowable_deductions.total * twelve,
            },
            income_after_deductions: self.income_after_deductions * twelve,
            tax_before_relief: self.tax_before_relief * twelve,
            tax_reliefs: TaxReliefs {
                personal_relief: self.tax_reliefs.personal_relief * twelve,
                insurance_relief: self.tax_reliefs.insurance_relief * twelve,
                total: self.tax_reliefs.total * twelve,
            },
            paye_tax: self.paye_tax * twelve,
            effective_tax_rate: self.effective_tax_rate,
        }
    }
}

/// The contribution computed for a single NSSF tier, for audit reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierContribution {
    /// The tier number.
    pub tier: u8,
    /// The slice of gross salary pensionable in this tier.
    pub pensionable_amount: Decimal,
    /// The tier's contribution rate, as a percentage.
    pub rate: Decimal,
    /// Employee contribution for the tier.
    pub employee_contribution: Decimal,
    /// Employer contribution for the tier (always equals the employee's).
    pub employer_contribution: Decimal,
}

/// The complete breakdown of an NSSF calculation.
///
/// `applicable` is always present so downstream compliance checks can
/// distinguish "zero because exempt" from "zero because salary is zero".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NssfBreakdown {
    /// The gross salary the calculation started from.
    pub gross_salary: Decimal,
    /// Tier 1 employee contribution.
    pub tier_1_contribution: Decimal,
    /// Tier 2 employee contribution.
    pub tier_2_contribution: Decimal,
    /// Total employee contribution across tiers.
    pub employee_contribution: Decimal,
    /// Total employer contribution (matches the employee 1:1).
    pub employer_contribution: Decimal,
    /// Employee plus employer contributions.
    pub total_contribution: Decimal,
    /// Per-tier contributions for audit reporting.
    pub contribution_breakdown: Vec<TierContribution>,
    /// Whether NSSF applies to the employment type at all.
    pub applicable: bool,
    /// The exemption reason, when `applicable` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption_reason: Option<String>,
}

/// The complete breakdown of a SHIF calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShifBreakdown {
    /// The gross salary the calculation started from.
    pub gross_salary: Decimal,
    /// The final SHIF contribution, after applying the floor.
    pub shif_contribution: Decimal,
    /// The contribution rate applied, as a percentage.
    pub contribution_rate: Decimal,
    /// The configured minimum contribution (the floor).
    pub minimum_contribution: Decimal,
    /// The pre-floor contribution, showing whether the floor was applied.
    pub calculated_contribution: Decimal,
}

/// The complete breakdown of an Affordable Housing Levy calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingLevyBreakdown {
    /// The gross salary the calculation started from.
    pub gross_salary: Decimal,
    /// Employee-side levy.
    pub employee_contribution: Decimal,
    /// Employer-side levy.
    pub employer_contribution: Decimal,
    /// Employee plus employer levies.
    pub total_contribution: Decimal,
    /// Employee-side rate applied, as a percentage.
    pub employee_rate: Decimal,
    /// Employer-side rate applied, as a percentage.
    pub employer_rate: Decimal,
    /// Whether the levy applies to the employment type at all.
    pub applicable: bool,
    /// The exemption reason, when `applicable` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption_reason: Option<String>,
}

/// The result of validating computed deductions against employment-type
/// compliance rules.
///
/// `is_compliant` is false if and only if `errors` is non-empty; warnings
/// never affect the flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Whether the computed deductions satisfy all mandatory rules.
    pub is_compliant: bool,
    /// Violations of mandatory deduction rules.
    pub errors: Vec<String>,
    /// Advisory findings that do not affect compliance.
    pub warnings: Vec<String>,
    /// The employment type the rules were evaluated against.
    pub employment_type: EmploymentType,
}
