//! Reward ledger: bread counts, experience, and the focus log.
//!
//! In-memory mutations complete synchronously before persistence is
//! attempted. A persistence failure propagates to the caller but is not
//! rolled back from memory: the design favors a consistent in-session view
//! over strict durability, risking at most the latest increment across a
//! process restart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::breads::{default_selectable, find_bread, is_unlocked};
use crate::error::{CoreError, StorageError};
use crate::progression::{compute_level, experience_gain};
use crate::storage::{keys, StorageGateway};

/// Focus log retention: most recent entries, newest first.
pub const FOCUS_LOG_CAP: usize = 100;

/// One completed focus session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusLog {
    pub id: String,
    pub bread_key: String,
    pub duration_seconds: u64,
    pub finished_at: DateTime<Utc>,
}

/// Result of a successful [`Baker::award_bread`] call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AwardOutcome {
    pub xp_gained: u64,
    pub leveled_up: bool,
    pub level: usize,
}

/// Persisted shape of the baker's progress. Fields default individually,
/// so a partially present stored value loads what it has.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedProgress {
    #[serde(default)]
    experience: u64,
    #[serde(default)]
    selected_bread_key: Option<String>,
    #[serde(default)]
    bread_counts: HashMap<String, u64>,
}

/// The baker's ledger.
///
/// Level is never stored: it is derived from experience on every read via
/// [`Baker::level`]. Experience is monotonically non-decreasing, so a
/// bread, once unlocked, stays unlocked.
#[derive(Debug)]
pub struct Baker {
    experience: u64,
    selected_bread_key: Option<String>,
    bread_counts: HashMap<String, u64>,
    focus_logs: Vec<FocusLog>,
    loaded: bool,
}

impl Default for Baker {
    fn default() -> Self {
        Self::new()
    }
}

impl Baker {
    pub fn new() -> Self {
        Self {
            experience: 0,
            selected_bread_key: default_selectable(0).map(String::from),
            bread_counts: HashMap::new(),
            focus_logs: Vec::new(),
            loaded: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn experience(&self) -> u64 {
        self.experience
    }

    /// Derived from experience; never stored.
    pub fn level(&self) -> usize {
        compute_level(self.experience)
    }

    pub fn selected_bread_key(&self) -> Option<&str> {
        self.selected_bread_key.as_deref()
    }

    pub fn bread_counts(&self) -> &HashMap<String, u64> {
        &self.bread_counts
    }

    pub fn bread_count(&self, key: &str) -> u64 {
        self.bread_counts.get(key).copied().unwrap_or(0)
    }

    /// Newest first, at most [`FOCUS_LOG_CAP`] entries.
    pub fn focus_logs(&self) -> &[FocusLog] {
        &self.focus_logs
    }

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Load progress and focus logs from the store. Idempotent: a second
    /// call after a successful load is a no-op.
    ///
    /// A stored value that cannot be decoded falls back to defaults
    /// rather than failing the load; only store-level failures propagate.
    pub async fn load<S: StorageGateway>(&mut self, store: &S) -> Result<(), CoreError> {
        if self.loaded {
            return Ok(());
        }

        let progress = read_lenient::<PersistedProgress, S>(store, keys::BAKER_PROGRESS)
            .await?
            .unwrap_or_default();
        let focus_logs = read_lenient::<Vec<FocusLog>, S>(store, keys::FOCUS_LOGS)
            .await?
            .unwrap_or_default();

        self.experience = progress.experience;
        self.bread_counts = progress.bread_counts;
        self.focus_logs = focus_logs;

        let level = self.level();
        self.selected_bread_key = match progress.selected_bread_key {
            Some(key) if is_unlocked(level, &key) => Some(key),
            _ => default_selectable(level).map(String::from),
        };

        self.loaded = true;
        Ok(())
    }

    /// Award one bread for a completed focus session.
    ///
    /// Returns `Ok(None)` for a key not in the catalog. On success the
    /// count, experience, and focus log are updated in memory first, then
    /// persisted; a persistence error propagates with memory already
    /// updated.
    pub async fn award_bread<S: StorageGateway>(
        &mut self,
        store: &S,
        bread_key: &str,
        duration_seconds: u64,
    ) -> Result<Option<AwardOutcome>, CoreError> {
        if find_bread(bread_key).is_none() {
            return Ok(None);
        }

        let level_before = self.level();
        let xp_gained = experience_gain(duration_seconds);

        *self.bread_counts.entry(bread_key.to_string()).or_insert(0) += 1;
        self.experience += xp_gained;
        let level = self.level();

        self.focus_logs.insert(
            0,
            FocusLog {
                id: Uuid::new_v4().to_string(),
                bread_key: bread_key.to_string(),
                duration_seconds,
                finished_at: Utc::now(),
            },
        );
        self.focus_logs.truncate(FOCUS_LOG_CAP);

        // Level never decreases, so an unlocked selection stays valid;
        // this re-check only repairs a selection that was never valid.
        if !self
            .selected_bread_key
            .as_deref()
            .is_some_and(|key| is_unlocked(level, key))
        {
            self.selected_bread_key = default_selectable(level)
                .map(String::from)
                .or(self.selected_bread_key.take());
        }

        self.persist_progress(store).await?;
        self.persist_focus_logs(store).await?;

        Ok(Some(AwardOutcome {
            xp_gained,
            leveled_up: level > level_before,
            level,
        }))
    }

    /// Change the selected bread. No-op (returning `Ok(false)`) unless the
    /// key names a bread unlocked at the current level.
    pub async fn set_selected_bread<S: StorageGateway>(
        &mut self,
        store: &S,
        bread_key: &str,
    ) -> Result<bool, CoreError> {
        if !is_unlocked(self.level(), bread_key) {
            return Ok(false);
        }
        self.selected_bread_key = Some(bread_key.to_string());
        self.persist_progress(store).await?;
        Ok(true)
    }

    // ── Internal ─────────────────────────────────────────────────────

    async fn persist_progress<S: StorageGateway>(&self, store: &S) -> Result<(), StorageError> {
        let progress = PersistedProgress {
            experience: self.experience,
            selected_bread_key: self.selected_bread_key.clone(),
            bread_counts: self.bread_counts.clone(),
        };
        store.set_json(keys::BAKER_PROGRESS, &progress).await
    }

    async fn persist_focus_logs<S: StorageGateway>(&self, store: &S) -> Result<(), StorageError> {
        store.set_json(keys::FOCUS_LOGS, &self.focus_logs).await
    }
}

async fn read_lenient<T: serde::de::DeserializeOwned, S: StorageGateway>(
    store: &S,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get_json(key).await {
        Ok(value) => Ok(value),
        Err(StorageError::MalformedValue { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
