//! In-memory object store for tests and ephemeral runs

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Error, Result};

use super::object_store::{ObjectInfo, ObjectStoreProvider};

#[derive(Debug, Clone)]
struct StoredObject {
    data: Vec<u8>,
    content_type: String,
}

/// An in-memory object store
///
/// Keys are kept sorted so listings come back in the same lexicographic
/// order a bucket listing would.
#[derive(Clone, Default)]
pub struct MemoryObjectStore {
    objects: Arc<RwLock<BTreeMap<String, StoredObject>>>,
}

impl MemoryObjectStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of objects stored
    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }

    /// All keys currently stored
    pub fn keys(&self) -> Vec<String> {
        self.objects.read().keys().cloned().collect()
    }

    /// Content type recorded for an object
    pub fn content_type(&self, path: &str) -> Option<String> {
        self.objects.read().get(path).map(|o| o.content_type.clone())
    }

    /// Insert an object synchronously (test setup helper)
    pub fn insert(&self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.objects.write().insert(
            path.into(),
            StoredObject {
                data: data.into(),
                content_type: crate::ingestion::OCTET_STREAM.to_string(),
            },
        );
    }
}

#[async_trait]
impl ObjectStoreProvider for MemoryObjectStore {
    async fn list_objects(&self, prefix: &str) -> Result<Vec<ObjectInfo>> {
        let objects = self.objects.read();
        Ok(objects
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, obj)| ObjectInfo {
                name: key.clone(),
                size: obj.data.len() as u64,
            })
            .collect())
    }

    async fn get_object(&self, path: &str) -> Result<Vec<u8>> {
        self.objects
            .read()
            .get(path)
            .map(|obj| obj.data.clone())
            .ok_or_else(|| Error::NotFound(path.to_string()))
    }

    async fn put_object(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<()> {
        self.objects.write().insert(
            path.to_string(),
            StoredObject {
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        Ok(self.objects.read().contains_key(path))
    }

    async fn delete_object(&self, path: &str) -> Result<()> {
        self.objects
            .write()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(path.to_string()))
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let store = MemoryObjectStore::new();
        store
            .put_object("docs/a.txt", b"hello".to_vec(), "text/plain")
            .await
            .unwrap();

        assert_eq!(store.get_object("docs/a.txt").await.unwrap(), b"hello");
        assert_eq!(store.content_type("docs/a.txt").as_deref(), Some("text/plain"));
        assert!(store.exists("docs/a.txt").await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_object_is_not_found() {
        let store = MemoryObjectStore::new();
        let err = store.get_object("nope").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_by_prefix_is_sorted() {
        let store = MemoryObjectStore::new();
        store.insert("base/b.txt", "b");
        store.insert("base/a.txt", "aa");
        store.insert("other/c.txt", "c");

        let listed = store.list_objects("base/").await.unwrap();
        let names: Vec<&str> = listed.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["base/a.txt", "base/b.txt"]);
        assert_eq!(listed[0].size, 2);
    }
}
