use async_trait::async_trait;

use crate::modules::mail::{MailError, Mailer, OutgoingEmail};

/// Transport that records every dispatch through the log instead of sending.
///
/// Stands in for a real SMTP or API provider and warns at startup that no
/// email leaves the process.
pub struct LogMailer {
    sender: String,
}

impl LogMailer {
    pub fn new(sender: String) -> Self {
        tracing::warn!(
            "LogMailer active: emails are written to the log, not delivered (sender: {})",
            sender
        );
        Self { sender }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        tracing::info!(
            "Email dispatched: from={} to={} subject={:?}",
            self.sender,
            email.to,
            email.subject
        );
        tracing::debug!("Email body for {}: {}", email.to, email.text);

        Ok(())
    }
}
