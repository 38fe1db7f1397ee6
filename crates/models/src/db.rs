use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Translate the pool section of the config into SeaORM options.
pub fn connect_options(cfg: &DatabaseConfig) -> anyhow::Result<ConnectOptions> {
    let url = cfg.connection_url()?;
    let mut opts = ConnectOptions::new(url);
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    Ok(opts)
}

/// Open the shared pool. Every handler checks a connection out of it per query.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let opts = connect_options(cfg)?;
    let db = Database::connect(opts).await?;
    info!(
        host = %cfg.host,
        database = %cfg.name,
        max_connections = cfg.max_connections,
        "database pool ready"
    );
    Ok(db)
}
