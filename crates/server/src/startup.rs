use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use sea_orm::DatabaseConnection;
use service::record::SeaOrmRecordRepository;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, ping and provision the record table. No request is served
/// unless this succeeds.
pub async fn init_storage(cfg: &DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    cfg.validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let db = models::db::connect(cfg)
        .await
        .map_err(|e| StartupError::Storage(e.to_string()))?;
    models::db::ensure_schema(&db)
        .await
        .map_err(|e| StartupError::Storage(e.to_string()))?;
    Ok(db)
}

/// Router over an already opened connection.
pub fn build_app(db: DatabaseConnection) -> Router {
    let state = ServerState::new(Arc::new(SeaOrmRecordRepository::new(db)));
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: open storage, build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = init_storage(&cfg.database).await?;
    let app = build_app(db);

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "starting record server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
