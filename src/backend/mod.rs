mod handlers;
mod routes;

use std::sync::Arc;

use sqlx::{Pool, Sqlite};
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::config::AppConfig;
use crate::service::email::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<Sqlite>,
    pub config: Arc<AppConfig>,
    pub mailer: Mailer,
}

pub async fn run_server(pool: Pool<Sqlite>, config: Arc<AppConfig>) -> anyhow::Result<()> {
    let mailer = Mailer::from_config(&config);
    let addr = config.bind_addr;

    let state = AppState {
        db: pool,
        config,
        mailer,
    };

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    let app = routes::page_routes()
        .layer(session_layer)
        .with_state(state);

    tracing::info!(%addr, "server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
