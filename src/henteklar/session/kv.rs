use crate::error::{HenteklarError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const STORAGE_FILENAME: &str = "storage.json";

/// Durable string key-value storage, the client's equivalent of device storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Non-persistent storage for tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    entries: BTreeMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// All entries kept as one JSON object in `storage.json`.
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(STORAGE_FILENAME)
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(|e| persistence(&path, e))?;
        serde_json::from_str(&content).map_err(|e| persistence(&path, e))
    }

    /// Entries to rewrite from. An unreadable file is logged and replaced.
    fn load_for_rewrite(&self) -> BTreeMap<String, String> {
        self.load().unwrap_or_else(|e| {
            warn!(error = %e, "discarding unreadable storage file");
            BTreeMap::new()
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let path = self.path();
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| persistence(&self.root, e))?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&path, content).map_err(|e| persistence(&path, e))
    }
}

fn persistence(path: &Path, err: impl std::fmt::Display) -> HenteklarError {
    HenteklarError::Persistence(format!("{}: {}", path.display(), err))
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load_for_rewrite();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path();
        if !path.exists() {
            return Ok(());
        }
        let mut entries = self.load_for_rewrite();
        entries.remove(key);
        self.save(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut kv = MemoryKvStore::new();
        assert_eq!(kv.get("user").unwrap(), None);
        kv.set("user", "x").unwrap();
        assert_eq!(kv.get("user").unwrap().as_deref(), Some("x"));
        kv.remove("user").unwrap();
        kv.remove("user").unwrap();
        assert_eq!(kv.get("user").unwrap(), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("data");

        let mut kv = FileKvStore::new(&root);
        assert_eq!(kv.get("user").unwrap(), None);
        kv.set("user", r#"{"name":"Kari"}"#).unwrap();
        kv.set("other", "1").unwrap();

        let reopened = FileKvStore::new(&root);
        assert_eq!(
            reopened.get("user").unwrap().as_deref(),
            Some(r#"{"name":"Kari"}"#)
        );
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn file_store_remove_keeps_other_keys() {
        let temp = tempfile::tempdir().unwrap();
        let mut kv = FileKvStore::new(temp.path());
        kv.set("user", "u").unwrap();
        kv.set("other", "o").unwrap();

        kv.remove("user").unwrap();
        assert_eq!(kv.get("user").unwrap(), None);
        assert_eq!(kv.get("other").unwrap().as_deref(), Some("o"));
    }

    #[test]
    fn corrupt_file_is_a_persistence_error() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(STORAGE_FILENAME), "not json").unwrap();

        let kv = FileKvStore::new(temp.path());
        let err = kv.get("user").unwrap_err();
        assert!(matches!(err, HenteklarError::Persistence(_)));
    }

    #[test]
    fn set_overwrites_corrupt_file() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(STORAGE_FILENAME), "not json").unwrap();

        let mut kv = FileKvStore::new(temp.path());
        kv.set("user", "u").unwrap();
        assert_eq!(kv.get("user").unwrap().as_deref(), Some("u"));
    }

    #[test]
    fn remove_on_corrupt_file_rewrites_it() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(STORAGE_FILENAME);
        fs::write(&path, "{ broken").unwrap();

        let mut kv = FileKvStore::new(temp.path());
        kv.remove("user").unwrap();
        assert_eq!(kv.get("user").unwrap(), None);
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "{}");
    }
}
