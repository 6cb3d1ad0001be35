//! Response payloads for the HTTP surface

use serde::Serialize;

use super::ObjectRef;

/// Generated answer
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    /// Text returned by the inference engine
    pub answer: String,
    /// Files that were attached to the request
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    /// Wall-clock time spent, in milliseconds
    pub processing_time_ms: u64,
}

/// Listing of stored files
#[derive(Debug, Clone, Serialize)]
pub struct FileListResponse {
    pub files: Vec<ObjectRef>,
    pub total: usize,
}

impl From<Vec<ObjectRef>> for FileListResponse {
    fn from(files: Vec<ObjectRef>) -> Self {
        Self {
            total: files.len(),
            files,
        }
    }
}
