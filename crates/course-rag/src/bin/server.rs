//! Course RAG server binary
//!
//! Run with: cargo run -p course-rag --bin course-rag-server
//!
//! Set `COURSE_RAG_CONFIG` to a TOML file to override the defaults and
//! `COURSE_RAG_PORT` to override the listen port.

use course_rag::{config::AppConfig, server::RagServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let mut config = match std::env::var("COURSE_RAG_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading configuration from {}", path);
            AppConfig::load(&path)?
        }
        Err(_) => AppConfig::default(),
    };

    if let Ok(port) = std::env::var("COURSE_RAG_PORT") {
        config.server.port = port
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid COURSE_RAG_PORT '{}': {}", port, e))?;
    }

    tracing::info!("Configuration loaded");
    tracing::info!("  - LLM model: {}", config.llm.generate_model);
    tracing::info!("  - Max history: {}", config.session.max_history);
    tracing::info!("  - Docs folder: {}", config.docs.path.display());
    tracing::info!("  - Allowed hosts: {:?}", config.server.allowed_hosts);

    // Create and start server
    let server = RagServer::new(config)?;

    if let Some(backend) = server.ollama_backend() {
        match backend.client().health_check().await {
            Ok(true) => tracing::info!("Ollama is running (model: {})", backend.client().model()),
            _ => tracing::warn!("Ollama not available; queries will fail until it is started"),
        }
    }

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /api/query   - Ask questions");
    println!("  GET  /api/courses - Course statistics");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
