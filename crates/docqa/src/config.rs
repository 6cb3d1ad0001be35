//! Configuration for the document query system

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main docqa configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocQaConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Object storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Inference engine configuration
    #[serde(default)]
    pub inference: InferenceConfig,
}

impl DocQaConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config: {}", e)))
    }

    /// Check values that serde cannot enforce
    pub fn validate(&self) -> Result<()> {
        let temperature = self.inference.temperature;
        if !(0.0..=1.0).contains(&temperature) {
            return Err(Error::Config(format!(
                "inference.temperature must be within [0, 1], got {}",
                temperature
            )));
        }
        if self.inference.max_output_tokens == 0 {
            return Err(Error::Config(
                "inference.max_output_tokens must be greater than zero".to_string(),
            ));
        }
        if self.inference.api_key.trim().is_empty() {
            return Err(Error::Config("Gemini API key not found".to_string()));
        }
        if self.storage.backend == StorageBackend::Gcs && self.storage.bucket.trim().is_empty() {
            return Err(Error::Config(
                "GCS backend selected but storage.bucket is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 100MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
            max_upload_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// Object store backend selection
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local map, contents are lost on exit
    #[default]
    Memory,
    /// Directory on the local filesystem
    Local,
    /// Google Cloud Storage bucket (requires the `gcp` feature)
    Gcs,
}

/// Object storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Which store implementation to use
    #[serde(default)]
    pub backend: StorageBackend,
    /// Bucket name (GCS backend)
    #[serde(default)]
    pub bucket: String,
    /// Key prefix under which all documents live
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Root directory for the local backend
    #[serde(default = "default_local_root")]
    pub local_root: PathBuf,
}

fn default_base_path() -> String {
    "documents".to_string()
}

fn default_local_root() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            bucket: String::new(),
            base_path: default_base_path(),
            local_root: default_local_root(),
        }
    }
}

/// Inference engine (Gemini) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// API key for the Generative Language API
    #[serde(default)]
    pub api_key: String,
    /// Generation model name
    #[serde(default = "default_model")]
    pub model: String,
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sampling temperature for document queries
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Cap on generated tokens
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_max_output_tokens() -> u32 {
    4000
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}
