//! # HTTP Server
//!
//! Main HTTP server combining the health and student routers under `/api`.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::records::StudentStore;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::student_routes::student_routes;

/// HTTP server for the student records API
pub struct HttpServer {
    config: HttpServerConfig,
    store: Arc<StudentStore>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and a fresh store
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = if config.seed {
            StudentStore::seeded()
        } else {
            StudentStore::new()
        };
        let store = Arc::new(store.with_validation(config.validation));
        Self::with_store(config, store)
    }

    /// Create a server over an existing store
    pub fn with_store(config: HttpServerConfig, store: Arc<StudentStore>) -> Self {
        let router = Self::build_router(&config, store.clone());
        Self {
            config,
            store,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<StudentStore>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let api = health_routes().merge(student_routes(store));

        Router::new()
            .nest("/api", api)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared handle to the record store
    pub fn store(&self) -> Arc<StudentStore> {
        self.store.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until the process stops.
    /// The host may be a name such as `localhost`.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(%addr, "backend server running");
        tracing::info!("health: http://{}/api/health", addr);
        tracing::info!("students: http://{}/api/students", addr);

        axum::serve(listener, self.router).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
