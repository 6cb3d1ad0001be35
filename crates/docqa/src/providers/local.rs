//! Local filesystem object store
//!
//! Object keys map onto relative paths under a root directory.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

use super::object_store::{ObjectInfo, ObjectStoreProvider};

/// Local object store using the filesystem
pub struct LocalObjectStore {
    /// Directory holding all objects
    root: PathBuf,
}

impl LocalObjectStore {
    /// Create a new local store, creating the root directory if needed
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Map an object key to a path under the root
    fn object_path(&self, key: &str) -> Result<PathBuf> {
        let relative = Path::new(key);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if key.is_empty() || escapes {
            return Err(Error::backend(format!("Invalid object key: {}", key)));
        }
        Ok(self.root.join(relative))
    }

    /// Map a file under the root back to its object key
    fn key_for(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<&str> = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }
}

fn io_backend(action: &str, key: &str, err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        Error::NotFound(key.to_string())
    } else {
        Error::backend(format!("Failed to {} {}: {}", action, key, err))
    }
}

#[async_trait]
impl ObjectStoreProvider for LocalObjectStore {
    async fn list_objects(&self, prefix: &str) -> Result<Vec<ObjectInfo>> {
        let root = self.root.clone();
        let entries = tokio::task::spawn_blocking(move || {
            WalkDir::new(&root)
                .sort_by_file_name()
                .into_iter()
                .collect::<std::result::Result<Vec<_>, _>>()
        })
        .await
        .map_err(|e| Error::internal(format!("Task join error: {}", e)))?
        .map_err(|e| Error::backend(format!("Failed to list objects: {}", e)))?;

        let mut objects = Vec::new();
        for entry in entries {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = self.key_for(entry.path()) else {
                continue;
            };
            if !name.starts_with(prefix) {
                continue;
            }
            let size = entry
                .metadata()
                .map_err(|e| Error::backend(format!("Failed to stat {}: {}", name, e)))?
                .len();
            objects.push(ObjectInfo { name, size });
        }
        objects.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(objects)
    }

    async fn get_object(&self, path: &str) -> Result<Vec<u8>> {
        let file = self.object_path(path)?;
        tokio::fs::read(&file)
            .await
            .map_err(|e| io_backend("read", path, e))
    }

    async fn put_object(&self, path: &str, data: Vec<u8>, _content_type: &str) -> Result<()> {
        let file = self.object_path(path)?;
        if let Some(parent) = file.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_backend("create directory for", path, e))?;
        }
        tokio::fs::write(&file, data)
            .await
            .map_err(|e| io_backend("write", path, e))
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        let file = self.object_path(path)?;
        match tokio::fs::metadata(&file).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_backend("stat", path, e)),
        }
    }

    async fn delete_object(&self, path: &str) -> Result<()> {
        let file = self.object_path(path)?;
        tokio::fs::remove_file(&file)
            .await
            .map_err(|e| io_backend("delete", path, e))
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.root.is_dir())
    }

    fn name(&self) -> &str {
        "local-filesystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roundtrip_and_listing() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path()).unwrap();

        store
            .put_object("base/2024/a.pdf", vec![0u8; 2048], "application/pdf")
            .await
            .unwrap();
        store
            .put_object("base/b.txt", b"text".to_vec(), "text/plain")
            .await
            .unwrap();

        assert_eq!(store.get_object("base/2024/a.pdf").await.unwrap().len(), 2048);

        let listed = store.list_objects("base/").await.unwrap();
        let names: Vec<&str> = listed.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["base/2024/a.pdf", "base/b.txt"]);
        assert_eq!(listed[0].size, 2048);

        let listed = store.list_objects("base/2024").await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path()).unwrap();

        assert!(store.get_object("nope.txt").await.unwrap_err().is_not_found());
        assert!(!store.exists("nope.txt").await.unwrap());

        store.put_object("x.txt", b"x".to_vec(), "text/plain").await.unwrap();
        assert!(store.exists("x.txt").await.unwrap());
        store.delete_object("x.txt").await.unwrap();
        assert!(!store.exists("x.txt").await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_reports_io_faults() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path()).unwrap();
        store.put_object("a.txt", b"a".to_vec(), "text/plain").await.unwrap();

        // a regular file used as a directory fails with ENOTDIR, not ENOENT
        let err = store.exists("a.txt/inner.txt").await.unwrap_err();
        assert!(matches!(err, Error::Backend(ref m) if m.contains("a.txt/inner.txt")));

        let gateway = crate::storage::StorageGateway::new(std::sync::Arc::new(store), "");
        let result = gateway.delete("a.txt/inner.txt").await;
        assert!(!result.succeeded);
        assert!(result.message.starts_with("Error deleting file a.txt/inner.txt"));
    }

    #[tokio::test]
    async fn test_rejects_escaping_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path()).unwrap();

        let err = store.get_object("../etc/passwd").await.unwrap_err();
        assert!(matches!(err, Error::Backend(_)));
        assert!(store.get_object("/abs").await.is_err());
    }
}
