//! Application state for the Statutory Deduction Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::StatutoryConfig;

/// Shared application state.
///
/// Holds the loaded rate tables behind an `Arc`: the tables are never
/// mutated after loading, so concurrent requests share them read-only
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded statutory rate tables.
    config: Arc<StatutoryConfig>,
}

impl AppState {
    /// Creates a new application state with the given rate tables.
    pub fn new(config: StatutoryConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the rate tables.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }
}
