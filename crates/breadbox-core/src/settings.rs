//! User settings.
//!
//! Stored values are coerced field-by-field on load: a missing or
//! wrong-typed field falls back to its default instead of failing the
//! whole load.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, StorageError};
use crate::storage::{keys, StorageGateway};

pub const DEFAULT_DAILY_FOCUS_GOAL_MINUTES: u32 = 100;
pub const MIN_DAILY_FOCUS_GOAL_MINUTES: u32 = 25;
pub const MAX_DAILY_FOCUS_GOAL_MINUTES: u32 = 600;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSettings {
    notifications_enabled: bool,
    sound_enabled: bool,
    daily_focus_goal_minutes: u32,
}

/// App settings with load/persist semantics matching the rest of the core:
/// mutate in memory first, persist after.
#[derive(Debug, Clone)]
pub struct Settings {
    notifications_enabled: bool,
    sound_enabled: bool,
    daily_focus_goal_minutes: u32,
    loaded: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub fn new() -> Self {
        Self {
            notifications_enabled: true,
            sound_enabled: true,
            daily_focus_goal_minutes: DEFAULT_DAILY_FOCUS_GOAL_MINUTES,
            loaded: false,
        }
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn daily_focus_goal_minutes(&self) -> u32 {
        self.daily_focus_goal_minutes
    }

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// Load from the store. Idempotent after the first successful call.
    pub async fn load<S: StorageGateway>(&mut self, store: &S) -> Result<(), CoreError> {
        if self.loaded {
            return Ok(());
        }
        let stored = match store.get_json::<serde_json::Value>(keys::USER_SETTINGS).await {
            Ok(value) => value,
            Err(StorageError::MalformedValue { .. }) => None,
            Err(e) => return Err(e.into()),
        };
        if let Some(value) = stored {
            if let Some(enabled) = value.get("notifications_enabled").and_then(|v| v.as_bool()) {
                self.notifications_enabled = enabled;
            }
            if let Some(enabled) = value.get("sound_enabled").and_then(|v| v.as_bool()) {
                self.sound_enabled = enabled;
            }
            if let Some(minutes) = value
                .get("daily_focus_goal_minutes")
                .and_then(|v| v.as_u64())
                .filter(|&m| m > 0)
            {
                self.daily_focus_goal_minutes = minutes.min(u32::MAX as u64) as u32;
            }
        }
        self.loaded = true;
        Ok(())
    }

    pub async fn set_notifications_enabled<S: StorageGateway>(
        &mut self,
        store: &S,
        enabled: bool,
    ) -> Result<(), CoreError> {
        self.notifications_enabled = enabled;
        Ok(self.persist(store).await?)
    }

    pub async fn set_sound_enabled<S: StorageGateway>(
        &mut self,
        store: &S,
        enabled: bool,
    ) -> Result<(), CoreError> {
        self.sound_enabled = enabled;
        Ok(self.persist(store).await?)
    }

    /// Set the daily goal, clamped to the configured range.
    pub async fn set_daily_focus_goal_minutes<S: StorageGateway>(
        &mut self,
        store: &S,
        minutes: u32,
    ) -> Result<(), CoreError> {
        self.daily_focus_goal_minutes = minutes.clamp(
            MIN_DAILY_FOCUS_GOAL_MINUTES,
            MAX_DAILY_FOCUS_GOAL_MINUTES,
        );
        Ok(self.persist(store).await?)
    }

    async fn persist<S: StorageGateway>(&self, store: &S) -> Result<(), StorageError> {
        let persisted = PersistedSettings {
            notifications_enabled: self.notifications_enabled,
            sound_enabled: self.sound_enabled,
            daily_focus_goal_minutes: self.daily_focus_goal_minutes,
        };
        store.set_json(keys::USER_SETTINGS, &persisted).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn defaults() {
        let s = Settings::new();
        assert!(s.notifications_enabled());
        assert!(s.sound_enabled());
        assert_eq!(s.daily_focus_goal_minutes(), 100);
    }

    #[tokio::test]
    async fn goal_clamps_to_range() {
        let store = MemoryStore::new();
        let mut s = Settings::new();
        s.set_daily_focus_goal_minutes(&store, 10).await.unwrap();
        assert_eq!(s.daily_focus_goal_minutes(), 25);
        s.set_daily_focus_goal_minutes(&store, 750).await.unwrap();
        assert_eq!(s.daily_focus_goal_minutes(), 600);
        s.set_daily_focus_goal_minutes(&store, 90).await.unwrap();
        assert_eq!(s.daily_focus_goal_minutes(), 90);
    }

    #[tokio::test]
    async fn load_round_trips_persisted_values() {
        let store = MemoryStore::new();
        let mut s = Settings::new();
        s.set_sound_enabled(&store, false).await.unwrap();
        s.set_daily_focus_goal_minutes(&store, 200).await.unwrap();

        let mut reloaded = Settings::new();
        reloaded.load(&store).await.unwrap();
        assert!(!reloaded.sound_enabled());
        assert_eq!(reloaded.daily_focus_goal_minutes(), 200);
    }

    #[tokio::test]
    async fn load_coerces_bad_fields_individually() {
        let store = MemoryStore::new();
        store.seed_raw(
            keys::USER_SETTINGS,
            r#"{"notifications_enabled":"yes","sound_enabled":false,"daily_focus_goal_minutes":-3}"#,
        );
        let mut s = Settings::new();
        s.load(&store).await.unwrap();
        // Wrong-typed fields fall back; the valid one applies.
        assert!(s.notifications_enabled());
        assert!(!s.sound_enabled());
        assert_eq!(s.daily_focus_goal_minutes(), 100);
    }

    #[tokio::test]
    async fn load_is_idempotent() {
        let store = MemoryStore::new();
        let mut s = Settings::new();
        s.load(&store).await.unwrap();
        s.set_sound_enabled(&store, false).await.unwrap();
        s.load(&store).await.unwrap();
        assert!(!s.sound_enabled());
    }
}
