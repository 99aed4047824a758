//! Outbound email. Delivery is best-effort: missing credentials or SMTP
//! failures are logged and never bubble up to a request.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct Mailer {
    server: String,
    port: u16,
    credentials: Option<(String, String)>,
}

impl Mailer {
    pub fn from_config(config: &AppConfig) -> Self {
        let credentials = match (&config.sender_email, &config.sender_password) {
            (Some(email), Some(password)) => Some((email.clone(), password.clone())),
            _ => None,
        };

        Self {
            server: config.smtp_server.clone(),
            port: config.smtp_port,
            credentials,
        }
    }

    /// Send an HTML email. Logs and returns on any failure.
    pub async fn send(&self, to: &str, subject: &str, html_body: &str) {
        let Some((sender, password)) = &self.credentials else {
            tracing::warn!("sender credentials not configured, skipping email");
            return;
        };

        let message = Message::builder()
            .from(match sender.parse() {
                Ok(mailbox) => mailbox,
                Err(e) => {
                    tracing::error!(error = %e, "invalid sender address");
                    return;
                }
            })
            .to(match to.parse() {
                Ok(mailbox) => mailbox,
                Err(e) => {
                    tracing::error!(error = %e, to, "invalid recipient address");
                    return;
                }
            })
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string());

        let message = match message {
            Ok(m) => m,
            Err(e) => {
                tracing::error!(error = %e, "failed to build email");
                return;
            }
        };

        let transport = match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.server) {
            Ok(builder) => builder
                .port(self.port)
                .credentials(Credentials::new(sender.clone(), password.clone()))
                .build(),
            Err(e) => {
                tracing::error!(error = %e, "failed to build SMTP transport");
                return;
            }
        };

        match transport.send(message).await {
            Ok(_) => tracing::info!(to, subject, "email sent"),
            Err(e) => tracing::error!(error = %e, to, "failed to send email"),
        }
    }
}
