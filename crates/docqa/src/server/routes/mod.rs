//! API routes for the docqa server

pub mod files;
pub mod query;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Stored files - uploads get the larger body limit
        .route(
            "/files",
            get(files::list_files)
                .post(files::upload_files)
                .delete(files::delete_files)
                .layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/files/delete-prefix", post(files::delete_prefix))
        // Query
        .route("/query", post(query::query_files))
        .route(
            "/query/pdf",
            post(query::query_pdf).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/generate", post(query::generate))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "docqa",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Question answering over documents held in an object store",
        "endpoints": {
            "GET /ready": "Object store readiness",
            "GET /api/files?prefix=": "List stored documents",
            "POST /api/files": "Upload documents (multipart)",
            "DELETE /api/files": "Delete documents by path",
            "POST /api/files/delete-prefix": "Delete every document under a prefix",
            "POST /api/query": "Ask a question about stored documents",
            "POST /api/query/pdf": "Ask a question about an uploaded PDF",
            "POST /api/generate": "Free-form generation"
        }
    }))
}
