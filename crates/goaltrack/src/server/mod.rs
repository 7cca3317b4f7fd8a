//! HTTP surface for goaltrack.
//!
//! Binds the page loaders to routes:
//!
//! | Route            | Loader                              |
//! |------------------|-------------------------------------|
//! | `GET /`          | [`load_home`](crate::loaders::load_home)          |
//! | `GET /goal`      | [`load_goal_list`](crate::loaders::load_goal_list) |
//! | `GET /goal/:slug`| [`load_goal`](crate::loaders::load_goal)          |
//!
//! Every response body is JSON. Failed lookups answer 404 with
//! `{"statusCode":404,"message":"Goal not found"}`.

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::loaders::SlugMode;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    slug_mode: SlugMode,
}

impl AppState {
    /// Create state over a catalog.
    #[must_use]
    pub fn new(catalog: Catalog, slug_mode: SlugMode) -> Self {
        Self {
            catalog: Arc::new(catalog),
            slug_mode,
        }
    }

    /// The goal dataset.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// How goal detail slugs are interpreted.
    #[must_use]
    pub fn slug_mode(&self) -> SlugMode {
        self.slug_mode
    }
}

/// Build the application router.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home_handler))
        .route("/goal", get(handlers::goal_list_handler))
        .route("/goal/:slug", get(handlers::goal_handler))
        .fallback(handlers::fallback_handler)
        .with_state(state)
}

/// Bind `addr` and serve `state` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener can't be bound or the server fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;
    let local = listener.local_addr()?;
    info!(
        "Serving {} goals on http://{local} (slug mode: {})",
        state.catalog().len(),
        state.slug_mode()
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Build state from configuration and serve it.
///
/// # Errors
///
/// Returns an error if the seed data can't be loaded or the server fails.
pub async fn run(config: &Config) -> Result<()> {
    let catalog = Catalog::load(config.data.goals_path.as_deref())?;
    let state = AppState::new(catalog, config.routes.slug_mode);
    serve(config.bind_addr()?, state).await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}
