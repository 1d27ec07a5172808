//! Read-only lookup contract over the registered user base.

use async_trait::async_trait;

/// Errors surfaced by a user directory backend.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The backing store could not be reached or answered with an error.
    #[error("user directory is unavailable: {message}")]
    Unavailable { message: String },
}

/// Lookup interface used to enforce email uniqueness during registration.
///
/// Implementations never mutate the user base.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Whether a user with exactly this email address is already registered.
    async fn email_exists(&self, email: &str) -> Result<bool, DirectoryError>;
}
