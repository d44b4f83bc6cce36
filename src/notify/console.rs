//! Console notifier
//!
//! Stands in for the mail transport when no SMTP credentials are configured,
//! and backs the standalone console front end.

use super::{Notifier, NotifyError};
use async_trait::async_trait;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(
        &self,
        recipient: &str,
        subject: &str,
        _body: &str,
        _html: bool,
    ) -> Result<(), NotifyError> {
        println!("⚠️  {subject} (for {recipient})");
        info!(recipient, subject, "alert printed to console");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_console_notify_always_succeeds() {
        let notifier = ConsoleNotifier::new();
        let result = notifier
            .notify("ops@example.com", "Gold Price Dropped!!", "<p>4800</p>", true)
            .await;
        assert!(result.is_ok());
    }
}
