//! Per-conversation settings storage.
//!
//! Settings (`year`, `week_count`, `anchor`) are kept per conversation key
//! behind the [`SettingsStore`] trait. The in-memory implementation guards a
//! single map with one lock.

mod store;

pub use store::{InMemorySettingsStore, SettingsStore};
