//! Configuration module for the schedule engine.
//!
//! This module provides functionality for loading the engine configuration
//! from YAML: server address, per-conversation defaults and the duration
//! policy windows.
//!
//! # Example
//!
//! ```no_run
//! use schedule_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/schedule.yaml").unwrap();
//! let policies = loader.config().policies();
//! println!("Primary policy: {}", policies.primary);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DefaultsConfig, DurationConfig, EngineConfig, ServerConfig};
