//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! rate tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    HousingLevyConfig, NssfConfig, NssfTier, RegimeMetadata, ReliefsConfig, ShifConfig,
    StatutoryConfig, TaxBand, TaxBandsConfig,
};

/// Loads and provides access to statutory rate tables.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates the structural invariants of the loaded tables before
/// exposing them.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/kenya/
/// ├── regime.yaml        # Regime metadata
/// ├── paye_bands.yaml    # PAYE tax bands
/// ├── reliefs.yaml       # Tax relief records
/// ├── nssf.yaml          # NSSF contribution tiers
/// ├── shif.yaml          # SHIF rates
/// └── housing_levy.yaml  # Affordable Housing Levy rates
/// ```
///
/// # Example
///
/// ```no_run
/// use statutory_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/kenya").unwrap();
/// println!("Loaded regime: {}", loader.regime().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/kenya")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A loaded rate table violates a structural invariant
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RegimeMetadata>(&path.join("regime.yaml"))?;
        let bands = Self::load_yaml::<TaxBandsConfig>(&path.join("paye_bands.yaml"))?;
        let reliefs = Self::load_yaml::<ReliefsConfig>(&path.join("reliefs.yaml"))?;
        let nssf = Self::load_yaml::<NssfConfig>(&path.join("nssf.yaml"))?;
        let shif = Self::load_yaml::<ShifConfig>(&path.join("shif.yaml"))?;
        let housing = Self::load_yaml::<HousingLevyConfig>(&path.join("housing_levy.yaml"))?;

        validate_tax_bands(&bands.bands)?;
        validate_nssf_tiers(&nssf.tiers)?;

        let config = StatutoryConfig::new(
            metadata,
            bands.bands,
            reliefs.reliefs,
            nssf.tiers,
            shif.rates,
            housing.rates,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Consumes the loader, returning the statutory configuration.
    pub fn into_config(self) -> StatutoryConfig {
        self.config
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        self.config.regime()
    }
}

/// Validates structural invariants of the tax band table.
///
/// Within each active generation (records sharing an effective date), the
/// bands must be non-overlapping when ordered by lower limit, and exactly
/// one band - the last - must be unbounded at the top.
fn validate_tax_bands(bands: &[TaxBand]) -> EngineResult<()> {
    let mut generations: Vec<chrono::NaiveDate> = bands
        .iter()
        .filter(|b| b.is_active)
        .map(|b| b.effective_date)
        .collect();
    generations.sort();
    generations.dedup();

    for generation in generations {
        let mut generation_bands: Vec<&TaxBand> = bands
            .iter()
            .filter(|b| b.is_active && b.effective_date == generation)
            .collect();
        generation_bands.sort_by(|a, b| a.lower_limit.cmp(&b.lower_limit));

        let unbounded = generation_bands
            .iter()
            .filter(|b| b.upper_limit.is_none())
            .count();
        if unbounded != 1 {
            return Err(EngineError::InvalidRateTable {
                message: format!(
                    "tax bands effective {} must have exactly one unbounded top band, found {}",
                    generation, unbounded
                ),
            });
        }

        for pair in generation_bands.windows(2) {
            let (lower_band, upper_band) = (pair[0], pair[1]);
            match lower_band.upper_limit {
                None => {
                    return Err(EngineError::InvalidRateTable {
                        message: format!(
                            "tax bands effective {}: the unbounded band must be the top band",
                            generation
                        ),
                    });
                }
                Some(upper) if upper_band.lower_limit <= upper => {
                    return Err(EngineError::InvalidRateTable {
                        message: format!(
                            "tax bands effective {}: band starting at {} overlaps band ending at {}",
                            generation, upper_band.lower_limit, upper
                        ),
                    });
                }
                Some(_) => {}
            }
        }
    }

    Ok(())
}

/// Validates structural invariants of the NSSF tier table.
fn validate_nssf_tiers(tiers: &[NssfTier]) -> EngineResult<()> {
    for tier in tiers.iter().filter(|t| t.is_active) {
        if tier.tier != 1 && tier.tier != 2 {
            return Err(EngineError::InvalidRateTable {
                message: format!("unknown NSSF tier number {}", tier.tier),
            });
        }
        if tier.tier == 1 && tier.upper_limit.is_none() {
            return Err(EngineError::InvalidRateTable {
                message: "NSSF tier 1 must have an upper limit".to_string(),
            });
        }
    }
    Ok(())
}
