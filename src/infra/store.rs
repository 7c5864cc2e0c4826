//! Snapshot store adapters: one JSON document per key on disk, or a map in memory.

use std::{
    collections::HashMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::application::store::{SNAPSHOT_KEYS, SnapshotStore, StoreError};

use super::error::InfraError;

const SNAPSHOT_EXTENSION: &str = "json";

/// Filesystem-backed snapshots stored as `<root>/<key>.json`.
#[derive(Debug)]
pub struct FileSnapshotStore {
    root: PathBuf,
}

impl FileSnapshotStore {
    /// Open storage rooted at the provided directory, creating it if necessary.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, InfraError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::io(
                key,
                io::Error::new(io::ErrorKind::InvalidInput, "invalid snapshot key"),
            ));
        }
        Ok(self.root.join(format!("{key}.{SNAPSHOT_EXTENSION}")))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::io(key, err)),
        }
    }

    /// Replace the snapshot atomically by renaming a sibling temp file.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let mut file = NamedTempFile::new_in(&self.root).map_err(|err| StoreError::io(key, err))?;
        file.write_all(value.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(|err| StoreError::io(key, err))?;
        file.persist(&path)
            .map_err(|err| StoreError::io(key, err.error))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::io(key, err)),
        }
    }

    /// Remove the application's snapshot documents. Other files in the
    /// directory are never touched, even when they end in `.json`.
    fn clear(&self) -> Result<(), StoreError> {
        for key in SNAPSHOT_KEYS {
            self.remove(key)?;
        }
        debug!(
            target = "recipebook::infra::store",
            keys = SNAPSHOT_KEYS.len(),
            "snapshots cleared"
        );
        Ok(())
    }
}

/// Process-local snapshots, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries.lock().map_err(StoreError::unavailable)
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries()?.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.entries()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_clears() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSnapshotStore::open(dir.path().join("nested")).expect("open");

        assert_eq!(store.read("recipes").expect("read"), None);
        store.write("recipes", "[]").expect("write");
        store.write("recipes", "[1]").expect("overwrite");
        assert_eq!(store.read("recipes").expect("read").as_deref(), Some("[1]"));
        assert!(store.root().join("recipes.json").is_file());

        fs::write(store.root().join("notes.txt"), "keep").expect("notes");
        store.write("currentUser", "{}").expect("write");
        store.clear().expect("clear");
        assert_eq!(store.read("recipes").expect("read"), None);
        assert_eq!(store.read("currentUser").expect("read"), None);
        assert!(store.root().join("notes.txt").is_file());
    }

    #[test]
    fn clear_leaves_foreign_json_files_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSnapshotStore::open(dir.path()).expect("open");
        fs::write(dir.path().join("package.json"), "{}").expect("package.json");
        fs::write(dir.path().join("other.json"), "[]").expect("other.json");

        store.write("recipes", "[]").expect("write");
        store.write("mealPlan", "[]").expect("write");
        store.clear().expect("clear");

        assert!(!dir.path().join("recipes.json").exists());
        assert!(!dir.path().join("mealPlan.json").exists());
        assert!(dir.path().join("package.json").is_file());
        assert_eq!(
            fs::read_to_string(dir.path().join("other.json")).expect("read"),
            "[]"
        );
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSnapshotStore::open(dir.path()).expect("open");
        assert!(store.write("../escape", "{}").is_err());
        assert!(store.read("").is_err());
    }

    #[test]
    fn removing_missing_snapshot_is_ok() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSnapshotStore::open(dir.path()).expect("open");
        store.remove("mealPlan").expect("remove");
    }

    #[test]
    fn memory_store_behaves_like_a_map() {
        let store = MemorySnapshotStore::new();
        store.write("a", "1").expect("write");
        store.write("b", "2").expect("write");
        store.remove("a").expect("remove");
        assert_eq!(store.read("a").expect("read"), None);
        assert_eq!(store.read("b").expect("read").as_deref(), Some("2"));
        store.clear().expect("clear");
        assert_eq!(store.read("b").expect("read"), None);
    }
}
