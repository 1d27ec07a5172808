//! User directory feature backed by the `users` table.
//!
//! Registration only consults this directory to enforce email uniqueness.
//! Nothing here writes to the table: accepted registrations are handed to
//! the email worker as an in-memory payload and the user row is expected
//! to be created by a separate provisioning flow.

pub mod directory;
pub mod postgres;

pub use directory::{DirectoryError, UserDirectory};
pub use postgres::PostgresUserDirectory;
