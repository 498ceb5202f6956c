//! Axum HTTP surface: the /api routes plus the static single-page client
//! served from public/. All shared state is read-only after startup, so
//! handlers share it without coordination.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod api;

use crate::config::{ConfigError, DbConfig, ServerConfig, SourceMode};
use crate::data::db;
use crate::data::snapshot::{load_snapshot, SnapshotError};
use crate::data::source::NpcSource;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    Db(#[from] sqlx::Error),
    #[error("server io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone)]
pub struct AppState {
    pub source: NpcSource,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/zones", get(api::list_zones))
        .route("/api/charm-spells", get(api::list_charm_spells))
        .route("/api/npcs/:zone", get(api::zone_npcs))
        .route("/api/health", get(api::health))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Build the NpcSource for the configured mode. Both failure paths are
/// startup-fatal: the listener must not accept traffic without data.
pub async fn build_source(config: &ServerConfig) -> Result<NpcSource, ServeError> {
    match config.mode {
        SourceMode::Snapshot => {
            let snapshot = load_snapshot(&config.snapshot_path)?;
            tracing::info!(
                path = %config.snapshot_path,
                zones = snapshot.zones.len(),
                npcs = snapshot.npc_count(),
                "loaded NPC snapshot"
            );
            Ok(NpcSource::Snapshot(Arc::new(snapshot)))
        }
        SourceMode::Live => {
            let db_config = DbConfig::from_env()?;
            let pool = db::connect(&db_config).await?;
            tracing::info!(host = %db_config.host, database = %db_config.database, "connected to MySQL");
            Ok(NpcSource::Live(pool))
        }
    }
}

pub async fn run_server(config: &ServerConfig) -> Result<(), ServeError> {
    let source = build_source(config).await?;
    tracing::info!(source = source.kind(), addr = %config.bind_addr, "charmfinder listening");

    let app = build_router(AppState { source });
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
