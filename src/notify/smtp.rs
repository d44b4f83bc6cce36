//! SMTP notifier
//!
//! Sends through a STARTTLS relay (Gmail with an app password in the
//! original deployment). Sender address and password come from the
//! environment, not the config file.

use super::{Notifier, NotifyError};
use crate::config::MailConfig;
use anyhow::Context;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

/// Env var holding the sender address
pub const SENDER_ENV: &str = "GMAIL_EMAIL";
/// Env var holding the app password
pub const PASSWORD_ENV: &str = "GMAIL_APP_PASSWORD";

pub struct SmtpNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpNotifier {
    /// Build the transport from config plus env credentials
    pub fn from_env(config: &MailConfig) -> anyhow::Result<Self> {
        let sender_addr =
            std::env::var(SENDER_ENV).with_context(|| format!("{SENDER_ENV} not set"))?;
        let password =
            std::env::var(PASSWORD_ENV).with_context(|| format!("{PASSWORD_ENV} not set"))?;

        let sender: Mailbox = sender_addr
            .parse()
            .with_context(|| format!("invalid sender address in {SENDER_ENV}"))?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .context("building SMTP transport")?
            .port(config.smtp_port)
            .credentials(Credentials::new(sender_addr, password))
            .build();

        Ok(Self { mailer, sender })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
        html: bool,
    ) -> Result<(), NotifyError> {
        let to: Mailbox = recipient
            .parse()
            .map_err(|e| NotifyError::Message(format!("invalid recipient: {e}")))?;

        let content_type = if html {
            ContentType::TEXT_HTML
        } else {
            ContentType::TEXT_PLAIN
        };

        let message = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(subject)
            .header(content_type)
            .body(body.to_string())
            .map_err(|e| NotifyError::Message(e.to_string()))?;

        self.mailer
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        info!(recipient, subject, "email sent");
        Ok(())
    }
}
