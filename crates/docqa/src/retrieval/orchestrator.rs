//! Query orchestration: gateway reads, request building, inference dispatch
//!
//! Every entry point returns a `Result`; backend faults surface as typed
//! errors and nothing escapes as a panic.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::generation::RequestBuilder;
use crate::ingestion;
use crate::providers::InferenceProvider;
use crate::storage::StorageGateway;
use crate::types::{Content, FilePart, GenerationConfig, InferenceRequest};

use super::chat::ChatSession;

/// Coordinates document reads and inference calls
pub struct QueryOrchestrator {
    gateway: Arc<StorageGateway>,
    inference: Arc<dyn InferenceProvider>,
    generation: GenerationConfig,
}

impl QueryOrchestrator {
    /// Create an orchestrator with the default generation parameters
    pub fn new(gateway: Arc<StorageGateway>, inference: Arc<dyn InferenceProvider>) -> Self {
        Self::with_generation(gateway, inference, GenerationConfig::default())
    }

    /// Create an orchestrator with explicit generation parameters
    pub fn with_generation(
        gateway: Arc<StorageGateway>,
        inference: Arc<dyn InferenceProvider>,
        generation: GenerationConfig,
    ) -> Self {
        tracing::info!(
            "Initializing query orchestrator with {} model: {}",
            inference.name(),
            inference.model()
        );
        Self {
            gateway,
            inference,
            generation,
        }
    }

    pub fn gateway(&self) -> &Arc<StorageGateway> {
        &self.gateway
    }

    pub fn generation_config(&self) -> GenerationConfig {
        self.generation
    }

    /// Answer a question about the combined content of stored files
    ///
    /// Files are read in order. The first failed read aborts the query with
    /// [`Error::IncompleteContext`] before anything is sent for inference.
    pub async fn answer_about_files(&self, question: &str, paths: &[String]) -> Result<String> {
        tracing::info!("Processing query for {} files", paths.len());

        let file_parts = self.collect_file_parts(paths).await?;
        let request = RequestBuilder::build(question, file_parts);

        self.dispatch(&request, &self.generation).await.map_err(|e| {
            tracing::error!("Error processing files: {}", e);
            e
        })
    }

    /// Answer a question about a single in-memory PDF
    pub async fn answer_about_pdf(&self, pdf: Vec<u8>, question: &str) -> Result<String> {
        tracing::info!("Processing PDF query ({} bytes)", pdf.len());
        let request = RequestBuilder::build_pdf(pdf, question);

        self.dispatch(&request, &self.generation).await.map_err(|e| {
            tracing::error!("Error processing PDF: {}", e);
            e
        })
    }

    /// Answer a question about already-extracted text
    pub async fn answer_about_text(&self, content: &str, question: &str) -> Result<String> {
        let request = RequestBuilder::build_text(content, question);
        self.dispatch(&request, &self.generation).await
    }

    /// Free-form generation at a caller-chosen temperature
    pub async fn generate(&self, prompt: &str, temperature: Option<f32>) -> Result<String> {
        let config = match temperature {
            Some(t) if (0.0..=1.0).contains(&t) => self.generation.with_temperature(t),
            Some(t) => {
                return Err(Error::InvalidRequest(format!(
                    "temperature must be within [0, 1], got {}",
                    t
                )))
            }
            None => self.generation,
        };

        let request = RequestBuilder::build_prompt(prompt);
        self.dispatch(&request, &config).await.map_err(|e| {
            tracing::error!("Error generating response: {}", e);
            e
        })
    }

    /// Start a multi-turn session seeded with optional history
    pub fn start_chat(&self, history: Vec<Content>) -> ChatSession {
        ChatSession::new(Arc::clone(&self.inference), self.generation, history)
    }

    async fn collect_file_parts(&self, paths: &[String]) -> Result<Vec<FilePart>> {
        let mut parts = Vec::with_capacity(paths.len());
        for path in paths {
            tracing::debug!("Processing file: {}", path);
            let data = self.gateway.read(path).await.map_err(|e| {
                tracing::error!("Aborting query, could not read {}: {}", path, e);
                Error::IncompleteContext {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?;
            parts.push(FilePart::new(data, ingestion::resolve(path)));
        }
        Ok(parts)
    }

    async fn dispatch(
        &self,
        request: &InferenceRequest,
        config: &GenerationConfig,
    ) -> Result<String> {
        tracing::info!("Generating response from {}", self.inference.name());
        let text = self.inference.generate(request, config).await?;
        tracing::info!("Successfully generated response");
        Ok(text)
    }
}
