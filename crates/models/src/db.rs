//! Connection bootstrap for the record store.

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

use crate::record;

/// Open the shared connection and make sure the server answers.
///
/// The returned handle is pooled internally by the driver and meant to be
/// cloned into every request; callers should not open a second one.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    cfg.validate()?;
    let mut opts = ConnectOptions::new(cfg.connection_url());
    opts.sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    db.ping().await?;
    info!(event = "db_connected", database = %cfg.name, "connected to database");
    Ok(db)
}

/// Create the `record` table when it does not exist yet. Existing tables are
/// left untouched.
pub async fn ensure_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(record::Entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}
