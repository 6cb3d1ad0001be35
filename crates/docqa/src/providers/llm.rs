//! Inference provider trait for answer generation

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{GenerationConfig, InferenceRequest};

/// Trait for multi-part text generation
///
/// Implementations:
/// - `GeminiClient`: Generative Language API (`generateContent`)
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Dispatch a request and return the generated text
    async fn generate(
        &self,
        request: &InferenceRequest,
        config: &GenerationConfig,
    ) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
