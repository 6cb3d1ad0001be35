//! Object store gateway
//!
//! Wraps an [`ObjectStoreProvider`] with the base-path namespace and turns
//! mutation outcomes into [`OperationResult`]s. Only `read` and `list`
//! return errors to the caller.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::ObjectStoreProvider;
use crate::types::{ObjectRef, OperationResult};

/// Path-based CRUD over one store, rooted at a base path
pub struct StorageGateway {
    store: Arc<dyn ObjectStoreProvider>,
    base_path: String,
}

impl StorageGateway {
    /// Create a gateway over a store handle
    pub fn new(store: Arc<dyn ObjectStoreProvider>, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        tracing::info!(
            "Initialized storage gateway ({}) at base path: {}",
            store.name(),
            base_path
        );
        Self { store, base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Name of the underlying store
    pub fn provider_name(&self) -> &str {
        self.store.name()
    }

    /// Join a name onto the base path with `/`
    ///
    /// An absolute `name` replaces the base path entirely.
    pub fn object_path(&self, name: &str) -> String {
        join_path(&self.base_path, name)
    }

    /// Fetch object content
    pub async fn read(&self, path: &str) -> Result<Vec<u8>> {
        tracing::info!("Reading file: {}", path);
        match self.store.get_object(path).await {
            Ok(content) => {
                tracing::info!(
                    operation = "read",
                    key = path,
                    bytes = content.len(),
                    "Successfully read {} bytes",
                    content.len()
                );
                Ok(content)
            }
            Err(e) => {
                tracing::error!(
                    operation = "read",
                    key = path,
                    "Error reading file {}: {}",
                    path,
                    e
                );
                Err(e)
            }
        }
    }

    /// Create or overwrite an object at an explicit path
    pub async fn write(&self, path: &str, data: Vec<u8>, content_type: &str) -> OperationResult {
        let size = data.len();
        match self.store.put_object(path, data, content_type).await {
            Ok(()) => {
                tracing::info!(
                    operation = "write",
                    key = path,
                    bytes = size,
                    "Successfully uploaded file to {}",
                    path
                );
                OperationResult::success(path, format!("File uploaded successfully to {}", path))
            }
            Err(e) => {
                let msg = format!("Error uploading file: {}", e);
                tracing::error!(operation = "write", key = path, "{}", msg);
                OperationResult::failure(path, msg)
            }
        }
    }

    /// Delete a single object, reporting a missing object as a failure
    pub async fn delete(&self, path: &str) -> OperationResult {
        match self.try_delete(path).await {
            Ok(Some(result)) => result,
            Ok(None) => {
                tracing::info!(
                    operation = "delete",
                    key = path,
                    "Successfully deleted file: {}",
                    path
                );
                OperationResult::success(path, format!("File {} deleted successfully", path))
            }
            Err(e) => {
                let msg = format!("Error deleting file {}: {}", path, e);
                tracing::error!(operation = "delete", key = path, "{}", msg);
                OperationResult::failure(path, msg)
            }
        }
    }

    async fn try_delete(&self, path: &str) -> Result<Option<OperationResult>> {
        if !self.store.exists(path).await? {
            let msg = format!("File {} does not exist", path);
            tracing::warn!(operation = "delete", key = path, "{}", msg);
            return Ok(Some(OperationResult::failure(path, msg)));
        }
        self.store.delete_object(path).await?;
        Ok(None)
    }

    /// Delete every object under `base_path/prefix`
    ///
    /// Any listing or deletion fault aborts the call; objects deleted before
    /// the fault stay deleted.
    pub async fn delete_by_prefix(&self, prefix: &str) -> OperationResult {
        match self.try_delete_by_prefix(prefix).await {
            Ok(count) => {
                let msg = format!("Successfully deleted {} files with prefix {}", count, prefix);
                tracing::info!(operation = "delete_by_prefix", key = prefix, count, "{}", msg);
                OperationResult::success(prefix, msg)
            }
            Err(e) => {
                let msg = format!("Error deleting files with prefix {}: {}", prefix, e);
                tracing::error!(operation = "delete_by_prefix", key = prefix, "{}", msg);
                OperationResult::failure(prefix, msg)
            }
        }
    }

    async fn try_delete_by_prefix(&self, prefix: &str) -> Result<usize> {
        let full_prefix = self.object_path(prefix);
        let objects = self.store.list_objects(&full_prefix).await?;

        let mut count = 0;
        for object in &objects {
            self.store.delete_object(&object.name).await?;
            count += 1;
        }
        Ok(count)
    }

    /// List documents under `base_path/prefix`, skipping directory markers
    pub async fn list(&self, prefix: &str) -> Result<Vec<ObjectRef>> {
        let full_prefix = self.object_path(prefix);
        tracing::info!("Listing files from path: {}", full_prefix);

        let objects = self.store.list_objects(&full_prefix).await.map_err(|e| {
            tracing::error!(operation = "list", key = %full_prefix, "Error listing files: {}", e);
            e
        })?;

        let files: Vec<ObjectRef> = objects
            .into_iter()
            .filter(|o| !o.name.ends_with('/'))
            .map(|o| ObjectRef::new(o.name, o.size))
            .collect();

        tracing::info!(
            operation = "list",
            key = %full_prefix,
            count = files.len(),
            "Found {} files",
            files.len()
        );
        Ok(files)
    }

    /// Check the underlying store
    pub async fn health_check(&self) -> Result<bool> {
        self.store.health_check().await
    }
}

/// POSIX-style join of two key fragments
pub fn join_path(base: &str, name: &str) -> String {
    if name.starts_with('/') || base.is_empty() {
        name.to_string()
    } else if base.ends_with('/') {
        format!("{}{}", base, name)
    } else {
        format!("{}/{}", base, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::providers::{MemoryObjectStore, ObjectInfo};
    use async_trait::async_trait;

    fn gateway_with(store: &MemoryObjectStore) -> StorageGateway {
        StorageGateway::new(Arc::new(store.clone()), "base")
    }

    /// Store whose listing always fails
    struct BrokenListingStore {
        inner: MemoryObjectStore,
    }

    #[async_trait]
    impl ObjectStoreProvider for BrokenListingStore {
        async fn list_objects(&self, _prefix: &str) -> Result<Vec<ObjectInfo>> {
            Err(Error::backend("permission denied"))
        }
        async fn get_object(&self, path: &str) -> Result<Vec<u8>> {
            self.inner.get_object(path).await
        }
        async fn put_object(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<()> {
            self.inner.put_object(path, data, content_type).await
        }
        async fn exists(&self, path: &str) -> Result<bool> {
            self.inner.exists(path).await
        }
        async fn delete_object(&self, path: &str) -> Result<()> {
            self.inner.delete_object(path).await
        }
        async fn health_check(&self) -> Result<bool> {
            Ok(false)
        }
        fn name(&self) -> &str {
            "broken-listing"
        }
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("base", "a.pdf"), "base/a.pdf");
        assert_eq!(join_path("base/", "a.pdf"), "base/a.pdf");
        assert_eq!(join_path("base", ""), "base/");
        assert_eq!(join_path("", "a.pdf"), "a.pdf");
        assert_eq!(join_path("base", "/abs/a.pdf"), "/abs/a.pdf");
        assert_eq!(join_path("Codes/Testing - Phase 1", "2024"), "Codes/Testing - Phase 1/2024");
    }

    #[tokio::test]
    async fn test_write_then_read_is_byte_identical() {
        let store = MemoryObjectStore::new();
        let gateway = gateway_with(&store);
        let bytes: Vec<u8> = (0..=255).collect();

        let result = gateway.write("base/bin.dat", bytes.clone(), "application/octet-stream").await;
        assert!(result.succeeded);
        assert_eq!(result.target, "base/bin.dat");
        assert!(result.message.contains("base/bin.dat"));

        assert_eq!(gateway.read("base/bin.dat").await.unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let gateway = gateway_with(&MemoryObjectStore::new());
        assert!(gateway.read("base/missing.pdf").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_reports_failure_without_mutation() {
        let store = MemoryObjectStore::new();
        store.insert("base/keep.pdf", "k");
        let gateway = gateway_with(&store);

        let result = gateway.delete("base/ghost.pdf").await;
        assert!(!result.succeeded);
        assert!(result.message.contains("base/ghost.pdf"));
        assert_eq!(store.keys(), vec!["base/keep.pdf".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let store = MemoryObjectStore::new();
        store.insert("base/a.pdf", "a");
        let gateway = gateway_with(&store);

        let result = gateway.delete("base/a.pdf").await;
        assert!(result.succeeded);
        assert_eq!(result.message, "File base/a.pdf deleted successfully");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_list_skips_directory_markers() {
        let store = MemoryObjectStore::new();
        store.insert("base/a.pdf", vec![0u8; 2048]);
        store.insert("base/sub/", Vec::<u8>::new());
        let gateway = gateway_with(&store);

        let files = gateway.list("").await.unwrap();
        assert_eq!(files, vec![ObjectRef::new("base/a.pdf", 2048)]);
        assert_eq!(files[0].display_name, "a.pdf");
        assert_eq!(files[0].size, "2.0 KB");
    }

    #[tokio::test]
    async fn test_delete_by_prefix_counts_only_matching() {
        let store = MemoryObjectStore::new();
        store.insert("base/2024/a.pdf", "a");
        store.insert("base/2024/b.pdf", "b");
        store.insert("base/2024/c.pdf", "c");
        store.insert("base/2025/d.pdf", "d");
        let gateway = gateway_with(&store);

        let result = gateway.delete_by_prefix("2024").await;
        assert!(result.succeeded);
        assert_eq!(result.message, "Successfully deleted 3 files with prefix 2024");
        assert_eq!(store.keys(), vec!["base/2025/d.pdf".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_by_prefix_zero_matches_still_succeeds() {
        let gateway = gateway_with(&MemoryObjectStore::new());
        let result = gateway.delete_by_prefix("2030").await;
        assert!(result.succeeded);
        assert!(result.message.contains("deleted 0 files"));
    }

    #[tokio::test]
    async fn test_delete_by_prefix_listing_fault_aborts() {
        let inner = MemoryObjectStore::new();
        inner.insert("base/2024/a.pdf", "a");
        let gateway = StorageGateway::new(
            Arc::new(BrokenListingStore { inner: inner.clone() }),
            "base",
        );

        let result = gateway.delete_by_prefix("2024").await;
        assert!(!result.succeeded);
        assert!(result.message.contains("permission denied"));
        assert_eq!(inner.len(), 1);
    }
}
