//! In-Memory State Storage Adapter
//!
//! Keeps items in a map for the lifetime of the process.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{validate_key, StateStorage, StateStorageError};

/// In-memory key-value storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStateStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.items.write().await.clear();
    }

    /// Get the number of stored items
    pub async fn item_count(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait]
impl StateStorage for InMemoryStateStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StateStorageError> {
        validate_key(key)?;
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StateStorageError> {
        validate_key(key)?;
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StateStorageError> {
        validate_key(key)?;
        self.items.write().await.remove(key);
        Ok(())
    }
}
