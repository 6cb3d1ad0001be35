//! Stored file endpoints: listing, upload and deletion

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use chrono::Local;

use crate::error::{Error, Result};
use crate::ingestion::{self, UploadItem};
use crate::server::state::AppState;
use crate::storage;
use crate::types::{
    BatchSummary, DeleteFilesRequest, DeletePrefixRequest, FileListResponse, FilesQuery,
    OperationResult,
};

/// GET /api/files - List documents under the base path
pub async fn list_files(
    State(state): State<AppState>,
    Query(query): Query<FilesQuery>,
) -> Result<Json<FileListResponse>> {
    let files = state.gateway().list(&query.prefix).await?;
    Ok(Json(FileListResponse::from(files)))
}

/// POST /api/files - Upload one or more files
///
/// Every part carrying a filename is uploaded. A text part named `name`
/// overrides the object name of the file part that follows it; other text
/// parts are ignored.
pub async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<BatchSummary>> {
    let mut items = Vec::new();
    let mut pending_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        Error::InvalidRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            if field_name == "name" {
                let name = field.text().await.map_err(|e| {
                    Error::InvalidRequest(format!("Failed to read name field: {}", e))
                })?;
                pending_name = Some(name);
            } else {
                tracing::debug!("Ignoring multipart field {}", field_name);
            }
            continue;
        };

        let data = field.bytes().await.map_err(|e| {
            Error::InvalidRequest(format!("Failed to read file {}: {}", filename, e))
        })?;

        if !ingestion::is_supported(&filename) {
            tracing::warn!("Uploading {} with unrecognized extension", filename);
        }
        tracing::info!("Received file: {} ({} bytes)", filename, data.len());

        let mut item = UploadItem::new(filename, data.to_vec());
        if let Some(name) = pending_name.take() {
            item = item.with_custom_name(name);
        }
        items.push(item);
    }

    if items.is_empty() {
        return Err(Error::InvalidRequest("No files in upload".to_string()));
    }

    // Object names carry the server's local wall-clock time
    let summary = storage::upload_many(state.gateway(), items, &Local::now()).await;
    Ok(Json(summary))
}

/// DELETE /api/files - Delete the listed paths
pub async fn delete_files(
    State(state): State<AppState>,
    Json(request): Json<DeleteFilesRequest>,
) -> Json<BatchSummary> {
    Json(storage::delete_many(state.gateway(), &request.paths).await)
}

/// POST /api/files/delete-prefix - Delete everything under a prefix
pub async fn delete_prefix(
    State(state): State<AppState>,
    Json(request): Json<DeletePrefixRequest>,
) -> Json<OperationResult> {
    Json(state.gateway().delete_by_prefix(&request.prefix).await)
}
