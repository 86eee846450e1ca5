use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Fixed slot names for the persisted dashboard state.
pub mod keys {
    pub const COURSES: &str = "courses";
    pub const ENROLLED_COURSE_IDS: &str = "enrolledCourseIds";
    pub const COMPLETED_MODULES: &str = "completedModules";
}

/// Repository contract for a string-keyed, string-valued medium.
///
/// Values are opaque text; encoding is the caller's concern.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot be read.
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_value(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot be written.
    async fn remove_value(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Clones share the same map, so dropping every service built on top of it and
/// rebuilding them from a clone behaves like a process restart.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_value(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: impl KeyValueRepository + 'static) -> Self {
        let kv: Arc<dyn KeyValueRepository> = Arc::new(repo);
        Self { kv }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_value(keys::COURSES).await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let repo = InMemoryRepository::new();
        repo.set_value(keys::ENROLLED_COURSE_IDS, "[1]").await.unwrap();
        repo.set_value(keys::ENROLLED_COURSE_IDS, "[1,2]").await.unwrap();
        assert_eq!(
            repo.get_value(keys::ENROLLED_COURSE_IDS).await.unwrap().as_deref(),
            Some("[1,2]")
        );
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        repo.set_value("k", "v").await.unwrap();
        assert_eq!(other.get_value("k").await.unwrap().as_deref(), Some("v"));

        other.remove_value("k").await.unwrap();
        other.remove_value("k").await.unwrap();
        assert_eq!(repo.get_value("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn storage_in_memory_is_usable_through_trait_object() {
        let storage = Storage::in_memory();
        storage.kv.set_value("a", "1").await.unwrap();
        assert_eq!(storage.kv.get_value("a").await.unwrap().as_deref(), Some("1"));
    }
}
