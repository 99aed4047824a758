use std::env;
use std::net::SocketAddr;

/// Runtime configuration, read once at startup from the environment.
/// Every knob has a default so the app runs with an empty environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub login_password: String,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub sender_email: Option<String>,
    pub sender_password: Option<String>,
    pub reminder_cron: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

        let smtp_port = env::var("SMTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(587);

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://household.db".to_string()),
            bind_addr,
            login_password: env::var("LOGIN_PASSWORD").unwrap_or_else(|_| "3152".to_string()),
            smtp_server: env::var("SMTP_SERVER").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port,
            sender_email: env::var("SENDER_EMAIL").ok(),
            sender_password: env::var("SENDER_PASSWORD").ok(),
            reminder_cron: env::var("REMINDER_CRON").unwrap_or_else(|_| "0 0 8 * * *".to_string()),
        }
    }
}
