//! User registration feature for public sign-ups.
//!
//! This feature validates registration requests, enforces email uniqueness
//! against the user directory and queues a welcome email job. Email delivery
//! happens in the background worker, never on the request path.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/users/register` | No | Register a user and queue their welcome email |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::RegistrationService;
