//! Mail module for outgoing email delivery
//!
//! Defines the transport seam the email worker hands rendered messages to.
//! The default transport only records the dispatch; wiring a real SMTP or
//! API-based provider happens behind the same trait.

use async_trait::async_trait;
use thiserror::Error;

mod log_mailer;

pub use log_mailer::LogMailer;

/// A rendered email ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail transport is unavailable: {message}")]
    Unavailable { message: String },

    #[error("recipient address was refused: {address}")]
    RecipientRefused { address: String },
}

/// Outgoing email transport.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}
