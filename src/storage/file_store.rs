//! File-Backed Key-Value Store
//!
//! One file per key under a data directory, the filesystem analogue of
//! the original client's localStorage.

use std::fs;
use std::path::PathBuf;

use crate::domain::{DomainError, DomainResult};

use super::KeyValueStore;

/// Filesystem-backed durable slot
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if necessary) a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> DomainResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| DomainError::Storage(format!("Failed to create {}: {}", root.display(), e)))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        fs::write(self.path_for(key), value)
            .map_err(|e| DomainError::Storage(format!("Failed to write {}: {}", key, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.set("tasks", "[1,2,3]").unwrap();
        assert_eq!(store.get("tasks"), Some("[1,2,3]".to_string()));
    }

    #[test]
    fn test_missing_key_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert_eq!(store.get("nothing"), None);
    }

    #[test]
    fn test_payload_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::new(dir.path()).unwrap();
            store.set("theme", "dark").unwrap();
        }
        let reopened = FileStore::new(dir.path()).unwrap();
        assert_eq!(reopened.get("theme"), Some("dark".to_string()));
    }
}
