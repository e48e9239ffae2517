//! Persistence gateway: asynchronous key/value JSON storage.
//!
//! The core treats storage as a reliable best-effort collaborator. Writers
//! always store the full current snapshot for a key, never a delta, so a
//! rapid pair of writes resolves as last-write-wins.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

use crate::error::StorageError;

/// Well-known storage keys.
pub mod keys {
    pub const BAKER_PROGRESS: &str = "baker_progress";
    pub const FOCUS_LOGS: &str = "focus_logs";
    pub const USER_SETTINGS: &str = "user_settings";
    /// CLI checkpoint of the serialized timer engine.
    pub const TIMER_ENGINE: &str = "timer_engine";
}

/// Asynchronous JSON-by-key store.
///
/// `get_json` returns `Ok(None)` for an absent key; a present but
/// undecodable value surfaces as [`StorageError::MalformedValue`].
#[allow(async_fn_in_trait)]
pub trait StorageGateway {
    async fn get_json<T: DeserializeOwned>(&self, key: &str)
        -> Result<Option<T>, StorageError>;

    async fn set_json<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError>;
}

/// Returns `~/.config/breadbox[-dev]/`, honoring two overrides:
///
/// - `BREADBOX_DATA_DIR` points at an explicit directory (tests use this)
/// - `BREADBOX_ENV=dev` switches to the development directory
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = if let Ok(explicit) = std::env::var("BREADBOX_DATA_DIR") {
        PathBuf::from(explicit)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");
        let env = std::env::var("BREADBOX_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("breadbox-dev")
        } else {
            base_dir.join("breadbox")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
