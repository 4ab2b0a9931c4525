//! Settings store trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Settings, SettingsUpdate, WeekCountLimits};

/// Per-conversation settings storage.
///
/// Each conversation key maps to an immutable [`Settings`] value that is
/// replaced as a whole; the last write for a key wins. Conversations never
/// observe each other's values.
pub trait SettingsStore: Send + Sync {
    /// Current settings for a conversation, or the defaults if none stored.
    fn get(&self, conversation: &str) -> Settings;

    /// Applies an update atomically and returns the stored result.
    ///
    /// Nothing is stored when the update is rejected.
    fn update(&self, conversation: &str, update: &SettingsUpdate) -> EngineResult<Settings>;

    /// Drops stored settings so the defaults apply again.
    fn reset(&self, conversation: &str) -> Settings;
}

/// A [`SettingsStore`] backed by a map behind a single lock.
#[derive(Debug)]
pub struct InMemorySettingsStore {
    defaults: Settings,
    limits: WeekCountLimits,
    entries: RwLock<HashMap<String, Settings>>,
}

impl InMemorySettingsStore {
    /// Creates an empty store.
    pub fn new(defaults: Settings, limits: WeekCountLimits) -> Self {
        Self {
            defaults,
            limits,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of conversations with stored settings.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when no conversation has stored settings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn get(&self, conversation: &str) -> Settings {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(conversation)
            .copied()
            .unwrap_or(self.defaults)
    }

    fn update(&self, conversation: &str, update: &SettingsUpdate) -> EngineResult<Settings> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let current = entries.get(conversation).copied().unwrap_or(self.defaults);
        let next = current.apply(update, self.limits)?;
        entries.insert(conversation.to_string(), next);
        debug!(conversation, ?next, "Stored conversation settings");
        Ok(next)
    }

    fn reset(&self, conversation: &str) -> Settings {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(conversation);
        debug!(conversation, "Reset conversation settings");
        self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use std::thread;

    fn defaults() -> Settings {
        Settings {
            year: 2025,
            week_count: 4,
            anchor: None,
        }
    }

    fn store() -> InMemorySettingsStore {
        InMemorySettingsStore::new(defaults(), WeekCountLimits::default())
    }

    #[test]
    fn test_unknown_conversation_gets_defaults() {
        let store = store();
        assert_eq!(store.get("chat-1"), defaults());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_is_isolated_per_conversation() {
        let store = store();
        let update = SettingsUpdate {
            year: Some(2026),
            ..Default::default()
        };
        store.update("chat-1", &update).unwrap();
        assert_eq!(store.get("chat-1").year, 2026);
        assert_eq!(store.get("chat-2").year, 2025);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_rejected_update_stores_nothing() {
        let store = store();
        let update = SettingsUpdate {
            year: Some(2026),
            week_count: Some(9),
            ..Default::default()
        };
        assert!(matches!(
            store.update("chat-1", &update),
            Err(EngineError::InvalidSettings { .. })
        ));
        assert_eq!(store.get("chat-1"), defaults());
        assert!(store.is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let store = store();
        let update = SettingsUpdate {
            anchor: Some(NaiveDate::from_ymd_opt(2025, 9, 8)),
            ..Default::default()
        };
        store.update("chat-1", &update).unwrap();
        assert_eq!(store.reset("chat-1"), defaults());
        assert_eq!(store.get("chat-1"), defaults());
    }

    #[test]
    fn test_updates_accumulate() {
        let store = store();
        store
            .update(
                "chat-1",
                &SettingsUpdate {
                    year: Some(2024),
                    ..Default::default()
                },
            )
            .unwrap();
        let settings = store
            .update(
                "chat-1",
                &SettingsUpdate {
                    week_count: Some(2),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(settings.year, 2024);
        assert_eq!(settings.week_count, 2);
    }

    #[test]
    fn test_concurrent_conversations_do_not_interfere() {
        let store = Arc::new(store());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let key = format!("chat-{}", i);
                    let update = SettingsUpdate {
                        year: Some(2000 + i),
                        ..Default::default()
                    };
                    store.update(&key, &update).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        for i in 0..8 {
            assert_eq!(store.get(&format!("chat-{}", i)).year, 2000 + i);
        }
    }
}
