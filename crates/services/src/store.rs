//! Durable keyed store: typed slots over the key-value repository.
//!
//! The in-memory state of each component is authoritative. This adapter is a
//! write-behind mirror: reads fall back to a default and writes never fail
//! from the caller's point of view. Problems are logged and swallowed.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use storage::repository::KeyValueRepository;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct DurableStore {
    repo: Arc<dyn KeyValueRepository>,
}

impl DurableStore {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self { repo }
    }

    /// Read the JSON value stored under `key`.
    ///
    /// Returns `default` when the key is missing, the medium cannot be read,
    /// or the stored text does not parse. The store is never modified here.
    pub async fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.repo.get_value(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "no stored value, using default");
                return default;
            }
            Err(err) => {
                warn!(key, error = %err, "failed to read stored value, using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "stored value is corrupt, using default");
                default
            }
        }
    }

    /// Serialize `value` and store it under `key`, replacing the previous value.
    ///
    /// Failures are logged; the next successful write persists whatever the
    /// in-memory value is by then.
    pub async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(key, error = %err, "failed to encode value, not persisted");
                return;
            }
        };

        match self.repo.set_value(key, &encoded).await {
            Ok(()) => debug!(key, bytes = encoded.len(), "persisted value"),
            Err(err) => warn!(key, error = %err, "failed to persist value"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    fn store() -> (InMemoryRepository, DurableStore) {
        let repo = InMemoryRepository::new();
        let store = DurableStore::new(Arc::new(repo.clone()));
        (repo, store)
    }

    #[tokio::test]
    async fn read_missing_key_returns_default() {
        let (_, store) = store();
        let value: Vec<u32> = store.read("enrolledCourseIds", vec![1, 2]).await;
        assert_eq!(value, vec![1, 2]);
    }

    #[tokio::test]
    async fn read_corrupt_value_returns_default_and_leaves_store_alone() {
        let (repo, store) = store();
        repo.set_value("courses", "{not json").await.unwrap();

        let value: Vec<u32> = store.read("courses", vec![9]).await;
        assert_eq!(value, vec![9]);
        assert_eq!(
            repo.get_value("courses").await.unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[tokio::test]
    async fn read_wrong_shape_returns_default() {
        let (repo, store) = store();
        repo.set_value("enrolledCourseIds", r#"{"a":1}"#).await.unwrap();
        let value: Vec<u32> = store.read("enrolledCourseIds", Vec::new()).await;
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let (repo, store) = store();
        store.write("enrolledCourseIds", &[1_u32, 4, 7]).await;
        assert_eq!(
            repo.get_value("enrolledCourseIds").await.unwrap().as_deref(),
            Some("[1,4,7]")
        );
        let value: Vec<u32> = store.read("enrolledCourseIds", Vec::new()).await;
        assert_eq!(value, vec![1, 4, 7]);
    }
}
