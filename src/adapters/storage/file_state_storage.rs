//! File-based State Storage Adapter
//!
//! Stores each key as `<base_path>/<key>.json` on disk.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{validate_key, StateStorage, StateStorageError};

/// File-based key-value storage
#[derive(Debug, Clone)]
pub struct FileStateStorage {
    base_path: PathBuf,
}

impl FileStateStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileStateStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a key
    fn item_path(&self, key: &str) -> Result<PathBuf, StateStorageError> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{}.json", key)))
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), StateStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))
    }
}

#[async_trait]
impl StateStorage for FileStateStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StateStorageError> {
        let path = self.item_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StateStorageError::IoError(e.to_string())),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StateStorageError> {
        let path = self.item_path(key)?;
        self.ensure_dir().await?;

        fs::write(&path, value)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "Stored item");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StateStorageError> {
        let path = self.item_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StateStorageError::IoError(e.to_string())),
        }
    }
}
