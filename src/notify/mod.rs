//! Outbound notification module
//!
//! A send failure is reported to the caller but is never fatal; the alert
//! gate keeps retrying on later cycles.

mod console;
mod smtp;

pub use console::ConsoleNotifier;
pub use smtp::SmtpNotifier;

use async_trait::async_trait;
use thiserror::Error;

/// Faults from the notification transport
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid message: {0}")]
    Message(String),
}

/// Trait for notification backends
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message to `recipient`; `html` marks the body as HTML
    async fn notify(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
        html: bool,
    ) -> Result<(), NotifyError>;
}
