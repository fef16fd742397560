//! Employment-type exemption policy.
//!
//! Exemption rules live in one place so a future change (say, exempting
//! interns from a levy) is a single edit consumed by every calculator and
//! by the compliance validator, instead of ad-hoc comparisons scattered
//! across the codebase.

use crate::models::EmploymentType;

/// The statutory deductions an employment type may be exempt from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatutoryDeduction {
    /// NSSF pension contribution.
    Nssf,
    /// SHIF health levy.
    Shif,
    /// Affordable Housing Levy.
    HousingLevy,
}

/// Returns true if the employment type is exempt from the deduction.
///
/// Contract employees are exempt from NSSF and the housing levy; SHIF
/// applies to every employment type unconditionally.
///
/// # Examples
///
/// ```
/// use statutory_engine::calculation::{is_exempt, StatutoryDeduction};
/// use statutory_engine::models::EmploymentType;
///
/// assert!(is_exempt(StatutoryDeduction::Nssf, EmploymentType::Contract));
/// assert!(!is_exempt(StatutoryDeduction::Shif, EmploymentType::Contract));
/// ```
pub fn is_exempt(deduction: StatutoryDeduction, employment_type: EmploymentType) -> bool {
    match deduction {
        StatutoryDeduction::Nssf | StatutoryDeduction::HousingLevy => {
            employment_type.is_contract()
        }
        StatutoryDeduction::Shif => false,
    }
}

/// The exemption reason reported on a zeroed contribution result.
pub fn exemption_reason(deduction: StatutoryDeduction) -> String {
    let name = match deduction {
        StatutoryDeduction::Nssf => "NSSF",
        StatutoryDeduction::Shif => "SHIF",
        StatutoryDeduction::HousingLevy => "Housing Levy",
    };
    format!("Contract employees are exempt from {} contributions", name)
}
