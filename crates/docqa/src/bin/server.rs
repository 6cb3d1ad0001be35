//! docqa server binary
//!
//! Run with: cargo run -p docqa --bin docqa-server -- --config docqa.toml

use clap::Parser;
use docqa::{config::DocQaConfig, server::DocQaServer};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "docqa-server", version, about = "Document question answering server")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "DOCQA_CONFIG")]
    config: Option<PathBuf>,

    /// Gemini API key, overrides the configuration file
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Storage bucket, overrides the configuration file
    #[arg(long, env = "GOOGLE_CLOUD_STORAGE_BUCKET")]
    bucket: Option<String>,

    /// Port to listen on, overrides the configuration file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docqa=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DocQaConfig::from_file(path)?,
        None => DocQaConfig::default(),
    };
    if let Some(api_key) = args.api_key {
        config.inference.api_key = api_key;
    }
    if let Some(bucket) = args.bucket {
        config.storage.bucket = bucket;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Storage backend: {:?}", config.storage.backend);
    tracing::info!("  - Base path: {}", config.storage.base_path);
    tracing::info!("  - Model: {}", config.inference.model);
    tracing::info!("  - Temperature: {}", config.inference.temperature);

    let server = DocQaServer::new(config).await?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("  API Info: http://{}/api/info", server.address());
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
