//! Request payloads for the HTTP surface

use serde::{Deserialize, Serialize};

/// Question about a selection of stored files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The question to answer
    pub question: String,
    /// Full object paths of the selected files
    #[serde(default)]
    pub paths: Vec<String>,
}

/// Free-form prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    /// Overrides the configured temperature
    #[serde(default)]
    pub temperature: Option<f32>,
}

/// Query parameters for listing files
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilesQuery {
    /// Prefix relative to the base path
    #[serde(default)]
    pub prefix: String,
}

/// Batch delete by explicit paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteFilesRequest {
    pub paths: Vec<String>,
}

/// Delete everything under a prefix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePrefixRequest {
    pub prefix: String,
}
