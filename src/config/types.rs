//! Configuration types for statutory rate tables.
//!
//! This module contains the strongly-typed rate records that are
//! deserialized from YAML configuration files. Every record carries an
//! `effective_date` and an `is_active` flag; multiple generations of a
//! rate may coexist and are filtered at lookup time.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the statutory regime.
///
/// Identifies the jurisdiction whose deduction rules the rate tables
/// encode, together with a version marker and source reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimeMetadata {
    /// ISO country code of the jurisdiction (e.g., "KE").
    pub jurisdiction: String,
    /// The human-readable name of the regime.
    pub name: String,
    /// The version or legislative reference of the rate set.
    pub version: String,
    /// URL to the official documentation of the rates.
    pub source_url: String,
}

/// A single PAYE tax band.
///
/// Bands for a given effective period are contiguous and non-overlapping
/// when ordered by `lower_limit`; exactly one band is unbounded at the top
/// (`upper_limit` absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBand {
    /// Lower bound of the band (inclusive).
    pub lower_limit: Decimal,
    /// Upper bound of the band (inclusive); absent for the top band.
    pub upper_limit: Option<Decimal>,
    /// Marginal tax rate for the band, as a percentage.
    pub tax_rate: Decimal,
    /// The date from which this band applies.
    pub effective_date: NaiveDate,
    /// Whether this record participates in lookups.
    pub is_active: bool,
}

/// The kinds of tax relief an employee may claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReliefType {
    /// Flat personal relief granted to every resident taxpayer.
    Personal,
    /// Rate-based relief on insurance premiums, capped annually.
    Insurance,
    /// Cap on deductible mortgage interest.
    Mortgage,
    /// Cap on deductible pension contributions.
    Pension,
    /// Cap on deductible post-retirement medical fund contributions.
    MedicalFund,
}

/// A tax relief record.
///
/// PERSONAL relief carries a flat `amount`. INSURANCE relief carries a
/// `rate` and a monthly `maximum_amount`. MORTGAGE, PENSION and
/// MEDICAL_FUND are cap-only: `maximum_amount` bounds what a caller may
/// deduct from taxable income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relief {
    /// The kind of relief this record configures.
    pub relief_type: ReliefType,
    /// Flat monthly amount, for amount-based reliefs.
    pub amount: Option<Decimal>,
    /// Relief rate as a percentage, for rate-based reliefs.
    pub rate: Option<Decimal>,
    /// Monthly cap on the relief or deductible amount.
    pub maximum_amount: Option<Decimal>,
    /// The date from which this record applies.
    pub effective_date: NaiveDate,
    /// Whether this record participates in lookups.
    pub is_active: bool,
}

/// An NSSF contribution tier.
///
/// Tier 1 covers pensionable pay from zero to its upper limit; tier 2
/// covers the excess up to its own upper limit. The employer matches the
/// employee contribution 1:1 in every tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NssfTier {
    /// The tier number (1 or 2).
    pub tier: u8,
    /// Lower bound of the tier's pensionable range.
    pub lower_limit: Decimal,
    /// Upper bound of the tier's pensionable range; absent if unbounded.
    pub upper_limit: Option<Decimal>,
    /// Contribution rate for the tier, as a percentage.
    pub contribution_rate: Decimal,
    /// The date from which this tier applies.
    pub effective_date: NaiveDate,
    /// Whether this record participates in lookups.
    pub is_active: bool,
}

/// A SHIF (Social Health Insurance Fund) rate record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShifRate {
    /// Contribution rate as a percentage of gross salary.
    pub contribution_rate: Decimal,
    /// Minimum monthly contribution (the floor).
    pub minimum_contribution: Decimal,
    /// The date from which this rate applies.
    pub effective_date: NaiveDate,
    /// Whether this record participates in lookups.
    pub is_active: bool,
}

/// An Affordable Housing Levy rate record.
///
/// Employee and employer rates are configured independently even though
/// current law sets both to the same percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingLevyRate {
    /// Employee-side levy rate, as a percentage of gross salary.
    pub employee_rate: Decimal,
    /// Employer-side levy rate, as a percentage of gross salary.
    pub employer_rate: Decimal,
    /// The date from which this rate applies.
    pub effective_date: NaiveDate,
    /// Whether this record participates in lookups.
    pub is_active: bool,
}

/// PAYE bands configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBandsConfig {
    /// All tax band records, across generations.
    pub bands: Vec<TaxBand>,
}

/// Reliefs configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ReliefsConfig {
    /// All relief records, across generations.
    pub reliefs: Vec<Relief>,
}

/// NSSF configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct NssfConfig {
    /// All tier records, across generations.
    pub tiers: Vec<NssfTier>,
}

/// SHIF configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ShifConfig {
    /// All SHIF rate records, across generations.
    pub rates: Vec<ShifRate>,
}

/// Housing levy configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HousingLevyConfig {
    /// All housing levy rate records, across generations.
    pub rates: Vec<HousingLevyRate>,
}

/// The complete set of statutory rate tables.
///
/// This struct aggregates all rate records loaded from a configuration
/// directory. It is never mutated after construction, so it can be shared
/// read-only across concurrent calculations.
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    /// Regime metadata.
    metadata: RegimeMetadata,
    /// Tax band records, sorted by lower limit ascending.
    tax_bands: Vec<TaxBand>,
    /// Relief records, sorted by effective date ascending.
    reliefs: Vec<Relief>,
    /// NSSF tier records, sorted by tier then lower limit.
    nssf_tiers: Vec<NssfTier>,
    /// SHIF rate records, sorted by effective date ascending.
    shif_rates: Vec<ShifRate>,
    /// Housing levy rate records, sorted by effective date ascending.
    housing_levy_rates: Vec<HousingLevyRate>,
}

impl StatutoryConfig {
    /// Creates a new StatutoryConfig from its component record sets.
    pub fn new(
        metadata: RegimeMetadata,
        tax_bands: Vec<TaxBand>,
        reliefs: Vec<Relief>,
        nssf_tiers: Vec<NssfTier>,
        shif_rates: Vec<ShifRate>,
        housing_levy_rates: Vec<HousingLevyRate>,
    ) -> Self {
        let mut tax_bands = tax_bands;
        tax_bands.sort_by(|a, b| a.lower_limit.cmp(&b.lower_limit));
        let mut reliefs = reliefs;
        reliefs.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        let mut nssf_tiers = nssf_tiers;
        nssf_tiers.sort_by(|a, b| (a.tier, a.lower_limit).cmp(&(b.tier, b.lower_limit)));
        let mut shif_rates = shif_rates;
        shif_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        let mut housing_levy_rates = housing_levy_rates;
        housing_levy_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            tax_bands,
            reliefs,
            nssf_tiers,
            shif_rates,
            housing_levy_rates,
        }
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.metadata
    }

    /// Returns all tax band records.
    pub fn all_tax_bands(&self) -> &[TaxBand] {
        &self.tax_bands
    }

    /// Returns all relief records.
    pub fn all_reliefs(&self) -> &[Relief] {
        &self.reliefs
    }

    /// Returns all NSSF tier records.
    pub fn all_nssf_tiers(&self) -> &[NssfTier] {
        &self.nssf_tiers
    }

    /// Returns all SHIF rate records.
    pub fn all_shif_rates(&self) -> &[ShifRate] {
        &self.shif_rates
    }

    /// Returns all housing levy rate records.
    pub fn all_housing_levy_rates(&self) -> &[HousingLevyRate] {
        &self.housing_levy_rates
    }
}
