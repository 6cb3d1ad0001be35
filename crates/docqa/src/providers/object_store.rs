//! Object store provider trait for raw document storage

use async_trait::async_trait;

use crate::error::Result;

/// Metadata about a stored object as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    /// Full object key
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

/// Trait for path-addressed blob storage
///
/// Implementations:
/// - `MemoryObjectStore`: process-local map
/// - `LocalObjectStore`: local filesystem
/// - `GcsObjectStore`: Google Cloud Storage (`gcp` feature)
///
/// `get_object` must report a missing key as `Error::NotFound`; every other
/// failure is `Error::Backend`.
#[async_trait]
pub trait ObjectStoreProvider: Send + Sync {
    /// List every object whose key starts with `prefix`, in key order
    async fn list_objects(&self, prefix: &str) -> Result<Vec<ObjectInfo>>;

    /// Fetch object content
    async fn get_object(&self, path: &str) -> Result<Vec<u8>>;

    /// Create or overwrite an object
    async fn put_object(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<()>;

    /// Check if an object exists
    async fn exists(&self, path: &str) -> Result<bool>;

    /// Delete an object
    async fn delete_object(&self, path: &str) -> Result<()>;

    /// Check if the provider is reachable
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
