// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Funroad Server: the storefront's HTTP service.
//!
//! Routes:
//! - `GET /api/health`: `{status, timestamp, uptime, environment}`, always `200`.
//! - `GET /api/categories`: root categories in display order, each with its subcategories.
//!
//! Request bodies are capped at [`config::DEFAULT_BODY_LIMIT_BYTES`] unless configured
//! otherwise. The [`bootstrap`] module renders the one-time database initialization script.
//!
//! ```no_run
//! use funroad_server::{ServerConfig, serve};
//!
//! # async fn run() -> Result<(), funroad_server::ServerError> {
//! serve(ServerConfig::from_env()?).await
//! # }
//! ```

pub mod bootstrap;
pub mod categories;
pub mod config;
mod error;
pub mod health;
pub mod limits;
pub mod system;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use funroad_catalog::{CategorySource, CategoryTree, JsonSource, StaticSource};
use tokio::net::TcpListener;

pub use config::{ConfigError, DatabaseConfig, ServerConfig};
pub use error::ServerError;
pub use system::{FixedInfo, ProcessInfo, SystemInfo};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Clock, uptime and environment.
    pub system: Arc<dyn SystemInfo + Send + Sync>,
    /// Category "get many" source.
    pub categories: Arc<dyn CategorySource + Send + Sync>,
    /// Maximum accepted request body.
    pub body_limit: usize,
}

impl AppState {
    /// State with the default body limit.
    pub fn new(
        system: impl SystemInfo + Send + Sync + 'static,
        categories: impl CategorySource + Send + Sync + 'static,
    ) -> Self {
        Self {
            system: Arc::new(system),
            categories: Arc::new(categories),
            body_limit: config::DEFAULT_BODY_LIMIT_BYTES,
        }
    }

    /// Override the request body limit.
    #[must_use]
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit = bytes;
        self
    }
}

impl core::fmt::Debug for AppState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.system.environment())
            .field("body_limit", &self.body_limit)
            .finish_non_exhaustive()
    }
}

/// Build the service router.
///
/// Every route rejects request bodies over `state.body_limit` with `413`.
pub fn build_router(state: AppState) -> Router {
    let limit = state.body_limit;
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/categories", get(categories::categories_handler))
        .layer(DefaultBodyLimit::max(limit))
        .layer(from_fn_with_state(state.clone(), limits::body_limit_middleware))
        .with_state(state)
}

/// Load the category source named by `config`.
///
/// A configured file is read and validated once so a broken document fails startup.
/// Without one the service lists no categories.
pub fn load_categories(
    config: &ServerConfig,
) -> Result<Arc<dyn CategorySource + Send + Sync>, ServerError> {
    let Some(path) = &config.categories_path else {
        tracing::warn!("FUNROAD_CATEGORIES_PATH unset; serving an empty category list");
        return Ok(Arc::new(StaticSource::new(Vec::new())));
    };
    let bytes = std::fs::read(path)?;
    let source = JsonSource::new(bytes);
    let tree = CategoryTree::from_roots(source.get_many()?)?;
    tracing::info!(path = %path.display(), roots = tree.len(), "categories loaded");
    Ok(Arc::new(StaticSource::new(tree.into_roots())))
}

/// Bind `config.bind` and serve until SIGINT or SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState {
        system: Arc::new(ProcessInfo::new(config.environment.clone())),
        categories: load_categories(&config)?,
        body_limit: config.body_limit_bytes,
    };
    let app = build_router(state);
    let listener = TcpListener::bind(config.bind).await?;
    let addr = listener.local_addr()?;
    tracing::info!(
        %addr,
        environment = %config.environment,
        "funroad-server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;
    tracing::info!("funroad-server stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(err) => {
                tracing::warn!(%err, "SIGTERM handler unavailable; waiting for ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("shutdown signal received");
}
