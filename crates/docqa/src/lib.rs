//! docqa: question answering over documents held in an object store
//!
//! Documents are uploaded to, listed from and deleted in a bucket under a
//! configurable base path. Questions are answered by attaching the selected
//! documents to a multi-part Gemini request, without any chunking or
//! retrieval index in between.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod storage;
pub mod types;

pub use config::DocQaConfig;
pub use error::{Error, Result};
pub use retrieval::{ChatSession, QueryOrchestrator};
pub use storage::StorageGateway;
pub use types::{BatchSummary, InferenceRequest, ObjectRef, OperationResult};
