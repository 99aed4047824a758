use std::sync::Arc;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use household_ledger::config::AppConfig;
use household_ledger::service::email::Mailer;
use household_ledger::{backend, database, service};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(AppConfig::from_env());

    let pool = database::db::connection::get_db_pool(&config.database_url).await?;
    database::db::schema::create_all(&pool).await?;

    let mailer = Mailer::from_config(&config);
    let _scheduler = service::reminder::start(pool.clone(), mailer, &config.reminder_cron).await?;

    backend::run_server(pool, config).await
}
