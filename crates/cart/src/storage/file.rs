//! File-backed key/value storage.
//!
//! One file per key under a storage directory. Writes go through a
//! temporary file and rename, so a crash mid-write never leaves a torn
//! payload behind; the previous payload survives instead.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use super::{KeyValueStore, StorageError};

/// Key/value store rooted at a device-local directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`.
    ///
    /// The directory is created on first write, not here.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file backing `key`.
    ///
    /// Keys are namespaced strings (`basket:cart`), not file names; every
    /// character outside `[A-Za-z0-9_-]` maps to `_`.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.get("basket:cart").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("basket:cart", "[1,2,3]".to_owned()).await.unwrap();

        assert_eq!(
            store.get("basket:cart").await.unwrap().as_deref(),
            Some("[1,2,3]")
        );
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("basket:cart", "old".to_owned()).await.unwrap();
        store.set("basket:cart", "new".to_owned()).await.unwrap();

        assert_eq!(
            store.get("basket:cart").await.unwrap().as_deref(),
            Some("new")
        );
    }

    #[tokio::test]
    async fn test_keys_are_sanitized_to_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("basket:cart", "x".to_owned()).await.unwrap();

        assert!(dir.path().join("basket_cart.json").exists());
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("basket:cart", "x".to_owned()).await.unwrap();

        assert!(!dir.path().join("basket_cart.json.tmp").exists());
    }
}
