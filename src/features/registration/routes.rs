use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::registration::handlers;
use crate::features::registration::services::RegistrationService;

/// Create routes for the registration feature
///
/// Note: This feature is public (no authentication required).
pub fn routes(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route("/api/users/register", post(handlers::register_user))
        .with_state(service)
}
