//! In-memory key/value store for tests and ephemeral use.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

use super::StorageGateway;
use crate::error::StorageError;

/// HashMap-backed store. Values are kept as JSON text so decode behavior
/// matches the durable stores exactly.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    /// When set, every write fails. Lets tests exercise the
    /// memory-updated-but-persist-failed path.
    fail_writes: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make all subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().expect("fail_writes lock") = fail;
    }

    /// Seed a raw JSON string under a key, bypassing serialization.
    pub fn seed_raw(&self, key: &str, raw: &str) {
        self.entries
            .lock()
            .expect("entries lock")
            .insert(key.to_string(), raw.to_string());
    }
}

impl StorageGateway for MemoryStore {
    async fn get_json<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        match entries.get(key) {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| StorageError::MalformedValue {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
        }
    }

    async fn set_json<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        if *self.fail_writes.lock().map_err(|_| StorageError::Poisoned)? {
            return Err(StorageError::QueryFailed("write disabled".into()));
        }
        let raw = serde_json::to_string(value).map_err(|e| StorageError::MalformedValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.entries
            .lock()
            .map_err(|_| StorageError::Poisoned)?
            .insert(key.to_string(), raw);
        Ok(())
    }
}
