//! JSON file backed key-value store
//!
//! All keys live in one JSON object on disk. Every `set` rewrites the file
//! through a sibling temp file followed by a rename, so readers never see a
//! partially written store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{KeyValueStore, StorageError};

type Entries = BTreeMap<String, String>;

pub struct FileKeyValueStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the file
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Open a store at `path`, creating parent directories if needed.
    /// The file itself is created lazily on the first `set`.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Entries, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }

        match serde_json::from_str::<Entries>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    "Storage file {} is not a valid key-value document, ignoring its content: {}",
                    self.path.display(),
                    e
                );
                Ok(Entries::new())
            }
        }
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        let encoded = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Encode(e.to_string()))?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        tokio::fs::write(&tmp_path, encoded).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        debug!("Storage file {} written", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value);
        self.write_entries(&entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;
    use uuid::Uuid;

    fn temp_store_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("location-search-{}", Uuid::new_v4()))
            .join("storage.json")
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let store = FileKeyValueStore::open(temp_store_path()).await.unwrap();
        assert_eq!(store.get("toDoList").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_survives_reopen() {
        let path = temp_store_path();

        let store = FileKeyValueStore::open(&path).await.unwrap();
        assert_ok!(store.set("toDoList", "[1,2]".to_string()).await);
        assert_ok!(store.set("other", "x".to_string()).await);

        let reopened = FileKeyValueStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("toDoList").await.unwrap(),
            Some("[1,2]".to_string())
        );
        assert_eq!(reopened.get("other").await.unwrap(), Some("x".to_string()));

        let tmp = path.with_file_name("storage.json.tmp");
        assert!(!tmp.exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_treated_as_empty_and_replaced() {
        let path = temp_store_path();
        let store = FileKeyValueStore::open(&path).await.unwrap();
        tokio::fs::write(&path, "{not json").await.unwrap();

        assert_eq!(store.get("toDoList").await.unwrap(), None);

        assert_ok!(store.set("toDoList", "[]".to_string()).await);
        assert_eq!(store.get("toDoList").await.unwrap(), Some("[]".to_string()));
    }
}
