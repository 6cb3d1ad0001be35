//! Provider abstractions for object storage and inference
//!
//! Trait-based seams that let the gateway and orchestrator run against
//! in-memory, local or cloud backends.

pub mod gemini;
pub mod llm;
pub mod local;
pub mod memory;
pub mod object_store;

#[cfg(feature = "gcp")]
pub mod gcp;

pub use gemini::GeminiClient;
pub use llm::InferenceProvider;
pub use local::LocalObjectStore;
pub use memory::MemoryObjectStore;
pub use object_store::{ObjectInfo, ObjectStoreProvider};
