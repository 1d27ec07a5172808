//! PostgreSQL-backed user directory.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::users::directory::{DirectoryError, UserDirectory};

/// User directory reading from the `users` table.
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn email_exists(&self, email: &str) -> Result<bool, DirectoryError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up email in user directory: {:?}", e);
                DirectoryError::Unavailable {
                    message: e.to_string(),
                }
            })
    }
}
