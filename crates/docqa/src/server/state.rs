//! Application state for the docqa server

use std::sync::Arc;

use crate::config::{DocQaConfig, StorageBackend};
use crate::error::Result;
use crate::providers::{
    GeminiClient, InferenceProvider, LocalObjectStore, MemoryObjectStore, ObjectStoreProvider,
};
use crate::retrieval::QueryOrchestrator;
use crate::storage::StorageGateway;
use crate::types::GenerationConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DocQaConfig,
    gateway: Arc<StorageGateway>,
    orchestrator: Arc<QueryOrchestrator>,
}

impl AppState {
    /// Build state from configuration, creating the configured backends
    pub async fn from_config(config: DocQaConfig) -> Result<Self> {
        tracing::info!(
            "Initializing docqa application state (storage: {:?})...",
            config.storage.backend
        );

        let store = build_store(&config).await?;
        let inference: Arc<dyn InferenceProvider> =
            Arc::new(GeminiClient::from_config(&config.inference));

        Ok(Self::new(config, store, inference))
    }

    /// Build state around already constructed backends
    pub fn new(
        config: DocQaConfig,
        store: Arc<dyn ObjectStoreProvider>,
        inference: Arc<dyn InferenceProvider>,
    ) -> Self {
        let gateway = Arc::new(StorageGateway::new(store, config.storage.base_path.clone()));
        let orchestrator = Arc::new(QueryOrchestrator::with_generation(
            Arc::clone(&gateway),
            inference,
            GenerationConfig::from(&config.inference),
        ));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                gateway,
                orchestrator,
            }),
        }
    }

    pub fn config(&self) -> &DocQaConfig {
        &self.inner.config
    }

    pub fn gateway(&self) -> &Arc<StorageGateway> {
        &self.inner.gateway
    }

    pub fn orchestrator(&self) -> &Arc<QueryOrchestrator> {
        &self.inner.orchestrator
    }
}

async fn build_store(config: &DocQaConfig) -> Result<Arc<dyn ObjectStoreProvider>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory object store, uploads are lost on exit");
            Ok(Arc::new(MemoryObjectStore::new()))
        }
        StorageBackend::Local => {
            tracing::info!("Using local object store at {}", config.storage.local_root.display());
            Ok(Arc::new(LocalObjectStore::new(config.storage.local_root.clone())?))
        }
        StorageBackend::Gcs => {
            #[cfg(feature = "gcp")]
            {
                use crate::providers::gcp::GcsObjectStore;

                tracing::info!("Using GCS bucket {}", config.storage.bucket);
                Ok(Arc::new(GcsObjectStore::new(config.storage.bucket.clone()).await?))
            }
            #[cfg(not(feature = "gcp"))]
            {
                Err(crate::error::Error::Config(
                    "GCS backend selected but gcp feature is not enabled. \
                     Rebuild with --features gcp"
                        .to_string(),
                ))
            }
        }
    }
}
