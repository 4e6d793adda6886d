//! Application startup and lifecycle management.

use crate::config::CafeConfig;
use crate::directory::CafeDirectory;
use crate::handlers::{health_check, list_cafes, readiness_check};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::tracing::request_id_middleware;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state. The directory is read-only after startup, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: CafeConfig,
    pub directory: Arc<CafeDirectory>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Resolves the café directory (configured file, else the built-in data)
    /// and binds the listener. Port 0 picks a random port for testing.
    pub async fn build(config: CafeConfig) -> Result<Self, AppError> {
        let directory = match &config.directory.file {
            Some(path) => {
                let directory = CafeDirectory::from_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    cities = directory.city_count(),
                    "cafe directory loaded"
                );
                directory
            }
            None => {
                tracing::info!("no directory file configured, serving the built-in directory");
                CafeDirectory::builtin()
            }
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Cafe service listening on port {}", port);

        let state = AppState {
            config,
            directory: Arc::new(directory),
        };

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = Router::new()
            .route("/cafe", get(list_cafes))
            .route("/health", get(health_check))
            .route("/ready", get(readiness_check))
            .with_state(self.state)
            .layer(TraceLayer::new_for_http())
            .layer(from_fn(request_id_middleware));

        axum::serve(self.listener, router).await
    }
}
