//! Employment classification consumed by the deduction calculators.
//!
//! The employee entity itself is owned by the payroll workflow outside
//! this crate; calculators only ever see the employment type, read-only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the type of employment arrangement.
///
/// The classification drives statutory exemption rules: contract
/// employees are exempt from NSSF and the housing levy, while SHIF
/// applies to every type unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    /// Open-ended employment.
    Permanent,
    /// Fixed-term contract employment.
    Contract,
    /// Casual employment engaged day-to-day.
    Casual,
    /// Internship or attachment.
    Intern,
}

impl EmploymentType {
    /// Returns true if this is contract employment.
    ///
    /// # Examples
    ///
    /// ```
    /// use statutory_engine::models::EmploymentType;
    ///
    /// assert!(EmploymentType::Contract.is_contract());
    /// assert!(!EmploymentType::Casual.is_contract());
    /// ```
    pub fn is_contract(&self) -> bool {
        *self == EmploymentType::Contract
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmploymentType::Permanent => "PERMANENT",
            EmploymentType::Contract => "CONTRACT",
            EmploymentType::Casual => "CASUAL",
            EmploymentType::Intern => "INTERN",
        };
        f.write_str(name)
    }
}
