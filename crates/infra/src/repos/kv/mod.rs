mod file;
mod inmemory;

pub use file::FileKVStore;
pub use inmemory::InMemoryKVStore;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

/// Storage for the collections of this service. Every collection lives as
/// one JSON encoded value under a fixed key and is rewritten in full on
/// every mutation.
#[async_trait::async_trait]
pub trait IKVStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Decodes the collection stored under `key`. A corrupt payload is logged
/// and treated as an empty collection so that the service keeps running,
/// it will be overwritten on the next mutation.
pub(crate) async fn load_collection<T: DeserializeOwned>(
    store: &dyn IKVStore,
    key: &str,
) -> Vec<T> {
    let payload = match store.get(key).await {
        Some(payload) => payload,
        None => return Vec::new(),
    };
    match serde_json::from_str(&payload) {
        Ok(items) => items,
        Err(e) => {
            warn!(
                "Discarding corrupt payload stored under key: {}. Error message: {}",
                key, e
            );
            Vec::new()
        }
    }
}

pub(crate) async fn store_collection<T: Serialize>(
    store: &dyn IKVStore,
    key: &str,
    items: &[T],
) -> anyhow::Result<()> {
    let payload = serde_json::to_string(items)?;
    store.set(key, &payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn stores(dir: &std::path::Path) -> Vec<Box<dyn IKVStore>> {
        vec![
            Box::new(InMemoryKVStore::new()),
            Box::new(FileKVStore::new(dir).expect("To create file store")),
        ]
    }

    #[tokio::test]
    async fn stores_and_retrieves_values() {
        let dir = tempdir().unwrap();

        for store in stores(dir.path()) {
            assert!(store.get("gpa_rappels").await.is_none());
            store.set("gpa_rappels", "[]").await.unwrap();
            assert_eq!(store.get("gpa_rappels").await.unwrap(), "[]");

            // Overwrites in full
            store.set("gpa_rappels", "[1,2]").await.unwrap();
            assert_eq!(store.get("gpa_rappels").await.unwrap(), "[1,2]");
        }
    }

    #[tokio::test]
    async fn file_store_survives_a_reopen() {
        let dir = tempdir().unwrap();

        let store = FileKVStore::new(dir.path()).unwrap();
        store.set("gpa_devis", "[{\"id\":\"D-1\"}]").await.unwrap();
        drop(store);

        let reopened = FileKVStore::new(dir.path()).unwrap();
        assert_eq!(
            reopened.get("gpa_devis").await.unwrap(),
            "[{\"id\":\"D-1\"}]"
        );
    }

    #[tokio::test]
    async fn corrupt_payload_falls_back_to_empty_collection() {
        let store = InMemoryKVStore::new();
        store.set("gpa_rappels", "{ not json").await.unwrap();

        let items: Vec<String> = load_collection(&store, "gpa_rappels").await;
        assert!(items.is_empty());
    }
}
