//! The rate repository read interface.
//!
//! Calculators never query configuration storage directly; they are handed
//! a [`RateStore`] and resolve the records applicable on a calculation
//! date once, up front. This keeps the calculators pure and testable
//! against hand-built rate sets.

use chrono::NaiveDate;

use super::types::{HousingLevyRate, NssfTier, Relief, ReliefType, ShifRate, StatutoryConfig, TaxBand};

/// Read access to time-effective statutory rate records.
///
/// Selection rules, applied uniformly: a record is applicable on `as_of`
/// when `effective_date <= as_of` and `is_active` is true. Multi-valued
/// rates (tax bands, NSSF tiers) return the full applicable set; single-
/// valued rates return the applicable record with the latest effective
/// date. An empty result is a well-defined degraded state, not an error:
/// a payroll run must not be blocked by one missing table.
pub trait RateStore {
    /// Returns the tax bands applicable on `as_of`, ordered by lower
    /// limit ascending.
    fn tax_bands(&self, as_of: NaiveDate) -> Vec<TaxBand>;

    /// Returns the relief record of the given kind applicable on `as_of`,
    /// if one is configured.
    fn relief(&self, kind: ReliefType, as_of: NaiveDate) -> Option<Relief>;

    /// Returns the NSSF tiers applicable on `as_of`, ordered by tier
    /// number then lower limit.
    fn nssf_tiers(&self, as_of: NaiveDate) -> Vec<NssfTier>;

    /// Returns the SHIF rate applicable on `as_of`, if one is configured.
    fn shif_rate(&self, as_of: NaiveDate) -> Option<ShifRate>;

    /// Returns the housing levy rate applicable on `as_of`, if one is
    /// configured.
    fn housing_levy_rate(&self, as_of: NaiveDate) -> Option<HousingLevyRate>;
}

impl RateStore for StatutoryConfig {
    fn tax_bands(&self, as_of: NaiveDate) -> Vec<TaxBand> {
        // Records are pre-sorted by lower_limit at construction.
        self.all_tax_bands()
            .iter()
            .filter(|b| b.is_active && b.effective_date <= as_of)
            .cloned()
            .collect()
    }

    fn relief(&self, kind: ReliefType, as_of: NaiveDate) -> Option<Relief> {
        self.all_reliefs()
            .iter()
            .filter(|r| r.is_active && r.relief_type == kind && r.effective_date <= as_of)
            .max_by_key(|r| r.effective_date)
            .cloned()
    }

    fn nssf_tiers(&self, as_of: NaiveDate) -> Vec<NssfTier> {
        self.all_nssf_tiers()
            .iter()
            .filter(|t| t.is_active && t.effective_date <= as_of)
            .cloned()
            .collect()
    }

    fn shif_rate(&self, as_of: NaiveDate) -> Option<ShifRate> {
        self.all_shif_rates()
            .iter()
            .filter(|r| r.is_active && r.effective_date <= as_of)
            .max_by_key(|r| r.effective_date)
            .cloned()
    }

    fn housing_levy_rate(&self, as_of: NaiveDate) -> Option<HousingLevyRate> {
        self.all_housing_levy_rates()
            .iter()
            .filter(|r| r.is_active && r.effective_date <= as_of)
            .max_by_key(|r| r.effective_date)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::RegimeMetadata;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn metadata() -> RegimeMetadata {
        RegimeMetadata {
            jurisdiction: "KE".to_string(),
            name: "Kenya statutory deductions".to_string(),
            version: "test".to_string(),
            source_url: "https://example.com".to_string(),
        }
    }

    fn shif(rate: &str, minimum: &str, effective: &str, active: bool) -> ShifRate {
        ShifRate {
            contribution_rate: dec(rate),
            minimum_contribution: dec(minimum),
            effective_date: date(effective),
            is_active: active,
        }
    }

    #[test]
    fn test_single_valued_lookup_takes_latest_effective_record() {
        let config = StatutoryConfig::new(
            metadata(),
            vec![],
            vec![],
            vec![],
            vec![
                shif("1.70", "150", "2022-01-01", true),
                shif("2.75", "300", "2024-10-01", true),
            ],
            vec![],
        );

        let rate = config.shif_rate(date("2025-01-01")).unwrap();
        assert_eq!(rate.contribution_rate, dec("2.75"));

        // Before the newer generation takes effect, the older one applies.
        let rate = config.shif_rate(date("2023-06-01")).unwrap();
        assert_eq!(rate.contribution_rate, dec("1.70"));
    }

    #[test]
    fn test_inactive_records_are_ignored() {
        let config = StatutoryConfig::new(
            metadata(),
            vec![],
            vec![],
            vec![],
            vec![shif("9.99", "999", "2024-01-01", false)],
            vec![],
        );

        assert!(config.shif_rate(date("2025-01-01")).is_none());
    }

    #[test]
    fn test_future_records_are_ignored() {
        let config = StatutoryConfig::new(
            metadata(),
            vec![],
            vec![],
            vec![],
            vec![shif("2.75", "300", "2030-01-01", true)],
            vec![],
        );

        assert!(config.shif_rate(date("2025-01-01")).is_none());
    }

    #[test]
    fn test_relief_lookup_filters_by_kind() {
        let relief = |kind, effective: &str| Relief {
            relief_type: kind,
            amount: Some(dec("2400")),
            rate: None,
            maximum_amount: None,
            effective_date: date(effective),
            is_active: true,
        };
        let config = StatutoryConfig::new(
            metadata(),
            vec![],
            vec![
                relief(ReliefType::Personal, "2023-07-01"),
                relief(ReliefType::Mortgage, "2023-07-01"),
            ],
            vec![],
            vec![],
            vec![],
        );

        let found = config.relief(ReliefType::Personal, date("2024-01-01")).unwrap();
        assert_eq!(found.relief_type, ReliefType::Personal);
        assert!(config.relief(ReliefType::Insurance, date("2024-01-01")).is_none());
    }

    #[test]
    fn test_tax_bands_returns_full_active_set_in_order() {
        let band = |lower: &str, upper: Option<&str>, rate: &str| TaxBand {
            lower_limit: dec(lower),
            upper_limit: upper.map(dec),
            tax_rate: dec(rate),
            effective_date: date("2023-07-01"),
            is_active: true,
        };
        let config = StatutoryConfig::new(
            metadata(),
            vec![
                band("32334", None, "30"),
                band("0", Some("24000"), "10"),
                band("24001", Some("32333"), "25"),
            ],
            vec![],
            vec![],
            vec![],
            vec![],
        );

        let bands = config.tax_bands(date("2024-01-01"));
        assert_eq!(bands.len(), 3);
        assert_eq!(bands[0].tax_rate, dec("10"));
        assert_eq!(bands[1].tax_rate, dec("25"));
        assert_eq!(bands[2].tax_rate, dec("30"));
    }
}
