//! Google Cloud Storage object store
//!
//! Stores raw documents in a GCS bucket. Credentials are resolved by the
//! client library from the ambient environment.

use async_trait::async_trait;

use google_cloud_storage::client::{Client as GcsClient, ClientConfig};
use google_cloud_storage::http::objects::delete::DeleteObjectRequest;
use google_cloud_storage::http::objects::download::Range;
use google_cloud_storage::http::objects::get::GetObjectRequest;
use google_cloud_storage::http::objects::list::ListObjectsRequest;
use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};
use google_cloud_storage::http::Error as GcsError;

use crate::error::{Error, Result};
use crate::providers::object_store::{ObjectInfo, ObjectStoreProvider};

/// Google Cloud Storage object store
pub struct GcsObjectStore {
    client: GcsClient,
    bucket: String,
}

impl GcsObjectStore {
    /// Create a new GCS object store
    ///
    /// # Arguments
    /// * `bucket` - GCS bucket name
    pub async fn new(bucket: String) -> Result<Self> {
        let config = ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| Error::Config(format!("Failed to create GCS client: {}", e)))?;

        Ok(Self {
            client: GcsClient::new(config),
            bucket,
        })
    }

    fn get_request(&self, path: &str) -> GetObjectRequest {
        GetObjectRequest {
            bucket: self.bucket.clone(),
            object: path.to_string(),
            ..Default::default()
        }
    }
}

fn is_not_found(err: &GcsError) -> bool {
    matches!(err, GcsError::Response(resp) if resp.code == 404)
}

fn map_error(action: &str, path: &str, err: GcsError) -> Error {
    if is_not_found(&err) {
        Error::NotFound(path.to_string())
    } else {
        Error::backend(format!("Failed to {} {}: {}", action, path, err))
    }
}

#[async_trait]
impl ObjectStoreProvider for GcsObjectStore {
    async fn list_objects(&self, prefix: &str) -> Result<Vec<ObjectInfo>> {
        let mut objects = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let request = ListObjectsRequest {
                bucket: self.bucket.clone(),
                prefix: Some(prefix.to_string()),
                page_token: page_token.take(),
                ..Default::default()
            };

            let response = self
                .client
                .list_objects(&request)
                .await
                .map_err(|e| Error::backend(format!("Failed to list GCS objects: {}", e)))?;

            for item in response.items.unwrap_or_default() {
                objects.push(ObjectInfo {
                    name: item.name,
                    size: item.size.max(0) as u64,
                });
            }

            match response.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(objects)
    }

    async fn get_object(&self, path: &str) -> Result<Vec<u8>> {
        self.client
            .download_object(&self.get_request(path), &Range::default())
            .await
            .map_err(|e| map_error("download", path, e))
    }

    async fn put_object(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<()> {
        let mut media = Media::new(path.to_string());
        media.content_type = content_type.to_string().into();
        let upload_type = UploadType::Simple(media);

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: self.bucket.clone(),
                    ..Default::default()
                },
                data,
                &upload_type,
            )
            .await
            .map(|_| ())
            .map_err(|e| map_error("upload", path, e))
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        match self.client.get_object(&self.get_request(path)).await {
            Ok(_) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(map_error("stat", path, e)),
        }
    }

    async fn delete_object(&self, path: &str) -> Result<()> {
        self.client
            .delete_object(&DeleteObjectRequest {
                bucket: self.bucket.clone(),
                object: path.to_string(),
                ..Default::default()
            })
            .await
            .map_err(|e| map_error("delete", path, e))
    }

    async fn health_check(&self) -> Result<bool> {
        // Try to list objects (with limit 1) to check bucket access
        let list_request = ListObjectsRequest {
            bucket: self.bucket.clone(),
            max_results: Some(1),
            ..Default::default()
        };

        self.client
            .list_objects(&list_request)
            .await
            .map(|_| true)
            .map_err(|e| Error::backend(format!("GCS health check failed: {}", e)))
    }

    fn name(&self) -> &str {
        "gcs"
    }
}
