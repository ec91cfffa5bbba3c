//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the roster loaded at startup, if any. It is read-only, so handlers
/// share it through an `Arc` without locking.
#[derive(Clone, Default)]
pub struct AppState {
    roster: Option<Arc<ConfigLoader>>,
}

impl AppState {
    /// Creates a new application state serving the given roster.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            roster: Some(Arc::new(config)),
        }
    }

    /// Creates a state with no configured roster; only the stateless
    /// endpoints are usable.
    pub fn without_roster() -> Self {
        Self::default()
    }

    /// Returns the configured roster, if one was loaded.
    pub fn roster(&self) -> Option<&ConfigLoader> {
        self.roster.as_deref()
    }
}
