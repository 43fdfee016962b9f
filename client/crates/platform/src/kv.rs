//! Durable local JSON document storage
//!
//! One store manages one JSON document at a fixed path, the analog of a
//! single key in the browser's persistent storage. Reads are tolerant:
//! a missing or corrupt document is "no value", never an error. Writes go
//! through a temp file and an atomic rename so a crash mid-write cannot
//! leave a half-written document behind.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error when writing or removing a stored document
///
/// Reads never produce this: read failures degrade to `None`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Single-document JSON store
#[derive(Debug, Clone)]
pub struct JsonDocumentStore {
    path: PathBuf,
}

impl JsonDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the stored document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored document with `value`.
    pub async fn write<T: Serialize>(&self, value: &T) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec_pretty(value)?;

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &encoded).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!(path = %self.path.display(), "Stored document written");
        Ok(())
    }

    /// Read the stored document, or `None` if it is missing or corrupt.
    pub async fn read<T: DeserializeOwned>(&self) -> Option<T> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Stored document unreadable, treating as empty"
                );
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Stored document corrupt, treating as empty"
                );
                None
            }
        }
    }

    /// Remove the stored document. Removing an absent document succeeds.
    pub async fn remove(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Doc {
        email: String,
        count: u32,
    }

    fn temp_store() -> JsonDocumentStore {
        let path = std::env::temp_dir().join(format!("kv-test-{}.json", uuid::Uuid::new_v4()));
        JsonDocumentStore::new(path)
    }

    #[tokio::test]
    async fn test_write_then_read_round_trips() {
        let store = temp_store();
        let doc = Doc {
            email: "alice@example.com".to_string(),
            count: 3,
        };

        store.write(&doc).await.unwrap();
        let back: Option<Doc> = store.read().await;
        assert_eq!(back, Some(doc));

        store.remove().await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_document_reads_as_none() {
        let store = temp_store();
        let back: Option<Doc> = store.read().await;
        assert!(back.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_document_reads_as_none() {
        let store = temp_store();
        tokio::fs::write(store.path(), b"{ not json at all")
            .await
            .unwrap();

        let back: Option<Doc> = store.read().await;
        assert!(back.is_none());

        store.remove().await.unwrap();
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = temp_store();
        store.remove().await.unwrap();
        store.remove().await.unwrap();
    }

    #[tokio::test]
    async fn test_write_replaces_previous_document() {
        let store = temp_store();
        let first = Doc {
            email: "a@example.com".to_string(),
            count: 1,
        };
        let second = Doc {
            email: "b@example.com".to_string(),
            count: 2,
        };

        store.write(&first).await.unwrap();
        store.write(&second).await.unwrap();

        let back: Option<Doc> = store.read().await;
        assert_eq!(back, Some(second));

        store.remove().await.unwrap();
    }
}
