use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;
use service::content::repo::seaorm::SeaOrmContentRepository;
use service::mail::SmtpMailer;

/// Any origin may call the API.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: open the pool, configure mail, build the app and serve until the task is dropped.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let db = models::db::connect(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    let repo = Arc::new(SeaOrmContentRepository::new(db));
    let mailer = Arc::new(SmtpMailer::from_config(&cfg.mail)?);
    info!(relay = %cfg.mail.smtp_host, recipient = %cfg.mail.recipient, "mail transport configured");

    let state = AppState::new(repo, mailer, &cfg.mail);
    let app: Router = routes::build_router(state, build_cors());

    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port))
        .await
        .map_err(|source| StartupError::Bind {
            addr: format!("{}:{}", cfg.server.host, cfg.server.port),
            source,
        })?;
    let addr = listener.local_addr()?;
    info!(%addr, "site backend listening");
    axum::serve(listener, app).await?;
    Ok(())
}
