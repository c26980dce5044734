//! HTTP server for the course RAG system

pub mod extract;
pub mod host;
pub mod routes;
pub mod state;

use axum::{extract::State, http::StatusCode, middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, ServerConfig};
use crate::error::{Error, Result};
use crate::ingestion::CourseCatalog;
use crate::providers::OllamaRagBackend;
use crate::session::SessionManager;
use host::AllowedHosts;
use state::AppState;

/// Build the router with all routes
///
/// Shared by the server and by tests, which pass state built from their own
/// collaborators.
pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
    let allowed_hosts = Arc::new(AllowedHosts::new(&config.allowed_hosts));

    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        .route("/ready", get(readiness))
        .nest("/api", routes::api_routes())
        .with_state(state)
        // Middleware layers (order matters - applied bottom to top)
        .layer(middleware::from_fn_with_state(allowed_hosts, host::check_host))
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        // CORS layer must be outermost
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}

/// Course RAG HTTP Server
pub struct RagServer {
    config: AppConfig,
    state: AppState,
    catalog: Arc<CourseCatalog>,
    ollama: Option<Arc<OllamaRagBackend>>,
}

impl RagServer {
    /// Create a new server with the default collaborators
    ///
    /// Sessions are kept in memory, course statistics come from the catalog,
    /// and answers are generated by Ollama.
    pub fn new(config: AppConfig) -> Result<Self> {
        let sessions = Arc::new(SessionManager::new(config.session.max_history));
        let catalog = Arc::new(CourseCatalog::new());
        let backend = Arc::new(OllamaRagBackend::new(
            &config.llm,
            Arc::clone(&sessions),
            Arc::clone(&catalog),
        )?);

        tracing::info!(
            "Collaborators initialized (model: {}, max history: {})",
            config.llm.generate_model,
            config.session.max_history
        );

        let state = AppState::new(sessions, backend.clone(), catalog.clone());
        let mut server = Self::with_state(config, state, catalog);
        server.ollama = Some(backend);
        Ok(server)
    }

    /// Create a server from prebuilt state
    ///
    /// `catalog` receives the startup document load.
    pub fn with_state(config: AppConfig, state: AppState, catalog: Arc<CourseCatalog>) -> Self {
        Self {
            config,
            state,
            catalog,
            ollama: None,
        }
    }

    /// Ollama backend, when the server was built with the default collaborators
    pub fn ollama_backend(&self) -> Option<&Arc<OllamaRagBackend>> {
        self.ollama.as_ref()
    }

    /// Get the application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Load course documents into the catalog
    ///
    /// Failures are logged and never abort startup. The state is marked ready
    /// once loading finishes either way.
    pub async fn load_documents(&self) {
        let docs = &self.config.docs;
        if !docs.load_on_startup {
            tracing::info!("Startup document loading disabled");
            self.state.set_ready(true);
            return;
        }

        if !docs.path.exists() {
            tracing::info!(
                "Docs folder {} not found, starting with an empty catalog",
                docs.path.display()
            );
            self.state.set_ready(true);
            return;
        }

        tracing::info!("Loading initial documents from {}...", docs.path.display());

        let catalog = Arc::clone(&self.catalog);
        let path = docs.path.clone();
        let loaded = tokio::task::spawn_blocking(move || catalog.add_course_folder(&path, false))
            .await
            .map_err(|e| Error::internal(format!("Task join error: {}", e)))
            .and_then(|result| result);

        match loaded {
            Ok((courses, lessons)) => {
                tracing::info!("Loaded {} courses with {} lessons", courses, lessons);
            }
            Err(e) => {
                tracing::warn!("Error loading documents: {}", e);
            }
        }

        self.state.set_ready(true);
    }

    /// Start the server
    ///
    /// Documents load in the background; `/ready` reports 503 until done.
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .server
            .address()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address: {}", e)))?;

        let router = build_router(&self.config.server, self.state.clone());

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Config(format!("Failed to bind: {}", e)))?;

        tracing::info!("Starting {} on http://{}", self.config.server.title, addr);

        self.state.set_ready(false);
        let loader = Arc::new(self);
        tokio::spawn(async move {
            loader.load_documents().await;
        });

        axum::serve(listener, router)
            .await
            .map_err(|e| Error::internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        self.config.server.address()
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Readiness check endpoint
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

