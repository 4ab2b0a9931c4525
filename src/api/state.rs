//! Application state for the schedule engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::Local;

use crate::calculation::PolicySet;
use crate::config::EngineConfig;
use crate::settings::{InMemorySettingsStore, SettingsStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded configuration and the per-conversation settings store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<EngineConfig>,
    /// Per-conversation settings.
    settings: Arc<dyn SettingsStore>,
}

impl AppState {
    /// Creates a new application state with an in-memory settings store.
    ///
    /// Conversations without stored settings use the configured defaults,
    /// with the current local year unless the configuration fixes one.
    pub fn new(config: EngineConfig) -> Self {
        let defaults = config.default_settings(Local::now().date_naive());
        let store = InMemorySettingsStore::new(defaults, config.week_count_limits());
        Self::with_store(config, Arc::new(store))
    }

    /// Creates a new application state with the given settings store.
    pub fn with_store(config: EngineConfig, settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            config: Arc::new(config),
            settings,
        }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the duration policies described by the configuration.
    pub fn policies(&self) -> PolicySet {
        self.config.policies()
    }

    /// Returns the settings store.
    pub fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }
}
