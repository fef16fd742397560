//! Rate repository for the Statutory Deduction Engine.
//!
//! This module provides the versioned, time-effective rate tables that
//! drive every calculator: PAYE tax bands, tax reliefs, NSSF contribution
//! tiers, SHIF rates and Affordable Housing Levy rates. Tables are loaded
//! from YAML files and queried through the [`RateStore`] trait.
//!
//! # Example
//!
//! ```no_run
//! use statutory_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/kenya").unwrap();
//! println!("Loaded regime: {}", loader.regime().name);
//! ```

mod loader;
mod store;
mod types;

pub use loader::ConfigLoader;
pub use store::RateStore;
pub use types::{
    HousingLevyRate, NssfTier, RegimeMetadata, Relief, ReliefType, ShifRate, StatutoryConfig,
    TaxBand,
};
