//! Persistence port: whole-value JSON snapshots under fixed string keys.

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, error, warn};

pub const RECIPES_KEY: &str = "recipes";
pub const CURRENT_USER_KEY: &str = "currentUser";
pub const MEAL_PLAN_KEY: &str = "mealPlan";

/// Every key the application writes. `clear` removes exactly these.
pub const SNAPSHOT_KEYS: [&str; 3] = [RECIPES_KEY, CURRENT_USER_KEY, MEAL_PLAN_KEY];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot `{key}` could not be accessed")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("snapshot store is unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        Self::Unavailable(err.to_string())
    }
}

/// Key-value storage of serialized snapshots. Each write replaces the whole value.
pub trait SnapshotStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// Typed access to a [`SnapshotStore`] that never fails the caller.
///
/// Read failures and undecodable payloads are logged and reported as absent;
/// write failures are logged and skipped.
#[derive(Clone)]
pub struct Snapshots {
    store: Arc<dyn SnapshotStore>,
}

impl Snapshots {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(target = "recipebook::store", key, "snapshot absent");
                return None;
            }
            Err(err) => {
                warn!(
                    target = "recipebook::store",
                    key,
                    error = %err,
                    "failed to read snapshot"
                );
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    target = "recipebook::store",
                    key,
                    error = %err,
                    "discarding undecodable snapshot"
                );
                None
            }
        }
    }

    /// Returns whether the snapshot was written.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(err) => {
                error!(
                    target = "recipebook::store",
                    key,
                    error = %err,
                    "failed to encode snapshot"
                );
                return false;
            }
        };

        match self.store.write(key, &payload) {
            Ok(()) => {
                debug!(
                    target = "recipebook::store",
                    key,
                    bytes = payload.len(),
                    "snapshot written"
                );
                true
            }
            Err(err) => {
                error!(
                    target = "recipebook::store",
                    key,
                    error = %err,
                    "failed to write snapshot"
                );
                false
            }
        }
    }

    pub fn remove(&self, key: &str) -> bool {
        match self.store.remove(key) {
            Ok(()) => true,
            Err(err) => {
                error!(
                    target = "recipebook::store",
                    key,
                    error = %err,
                    "failed to remove snapshot"
                );
                false
            }
        }
    }

    pub fn clear(&self) -> bool {
        match self.store.clear() {
            Ok(()) => true,
            Err(err) => {
                error!(
                    target = "recipebook::store",
                    error = %err,
                    "failed to clear snapshots"
                );
                false
            }
        }
    }
}
