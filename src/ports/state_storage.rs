//! State Storage Port - Interface for the key-value store behind the toolkit.
//!
//! Mirrors a browser's local storage: string values under string keys. The
//! coordinator stores the whole `ToolkitState` as one JSON blob under a
//! configured key.

use async_trait::async_trait;

/// Errors that can occur during state storage operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StateStorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for a string key-value store
#[async_trait]
pub trait StateStorage: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `None` when nothing is stored under the key
    async fn get_item(&self, key: &str) -> Result<Option<String>, StateStorageError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StateStorageError>;

    /// Remove the value under `key`; removing a missing key is not an error
    async fn remove_item(&self, key: &str) -> Result<(), StateStorageError>;
}

/// Rejects keys that cannot safely become a file name.
pub fn validate_key(key: &str) -> Result<(), StateStorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(StateStorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_storage_error_io() {
        let err = StateStorageError::IoError("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_validate_key_accepts_default_key() {
        assert!(validate_key("mediaAIToolkitState").is_ok());
        assert!(validate_key("state-v2.backup").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_paths() {
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key(".hidden").is_err());
    }
}
