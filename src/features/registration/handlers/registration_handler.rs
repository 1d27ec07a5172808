use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{ErrorBody, Result};
use crate::core::extractor::AppJson;
use crate::features::registration::dtos::{RegisterUserDto, RegistrationAckDto};
use crate::features::registration::services::RegistrationService;

/// Register a new user
///
/// This is a public endpoint (no authentication required). The request is
/// validated, the email is checked against the registered user base, and a
/// welcome email job is queued. The email itself is sent asynchronously by
/// the background worker, so a success response only acknowledges the queue
/// submission.
#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "Registration accepted, welcome email queued", body = RegistrationAckDto),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Validation failed", body = ErrorBody),
        (status = 503, description = "Job queue unavailable", body = ErrorBody)
    ),
    tag = "registration"
)]
pub async fn register_user(
    State(service): State<Arc<RegistrationService>>,
    AppJson(dto): AppJson<RegisterUserDto>,
) -> Result<Json<RegistrationAckDto>> {
    service.register(dto).await?;

    Ok(Json(RegistrationAckDto {
        message: "Utilisateur enregistré, email en cours d’envoi.".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use fake::faker::internet::raw::SafeEmail;
    use fake::faker::name::raw::Name;
    use fake::locales::EN;
    use fake::Fake;
    use serde_json::{json, Value};

    use super::*;
    use crate::features::registration::routes;
    use crate::features::users::UserDirectory;
    use crate::modules::queue::{Job, JobQueue, RegistrationPayload};
    use crate::shared::test_helpers::{FullQueue, InMemoryUserDirectory, RecordingQueue};

    fn server_with(directory: Arc<dyn UserDirectory>, queue: Arc<dyn JobQueue>) -> TestServer {
        let service = Arc::new(RegistrationService::new(directory, queue));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_register_acknowledges_and_queues_welcome_email() {
        let queue = Arc::new(RecordingQueue::new());
        let server = server_with(
            Arc::new(InMemoryUserDirectory::new()),
            Arc::clone(&queue) as Arc<dyn JobQueue>,
        );

        let response = server
            .post("/api/users/register")
            .json(&json!({ "name": "Alice", "email": "alice@example.com" }))
            .await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&json!({
            "message": "Utilisateur enregistré, email en cours d’envoi."
        }));

        let jobs = queue.submitted();
        assert_eq!(jobs.len(), 1);
        assert_eq!(
            jobs[0],
            Job::SendWelcomeEmail(RegistrationPayload::new(
                "Alice".to_string(),
                "alice@example.com".to_string(),
            ))
        );
    }

    #[tokio::test]
    async fn test_register_accepts_generated_identities() {
        let name: String = Name(EN).fake();
        let email: String = SafeEmail(EN).fake();

        let queue = Arc::new(RecordingQueue::new());
        let server = server_with(
            Arc::new(InMemoryUserDirectory::new()),
            Arc::clone(&queue) as Arc<dyn JobQueue>,
        );

        let response = server
            .post("/api/users/register")
            .json(&json!({ "name": &name, "email": &email }))
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            queue.submitted(),
            [Job::SendWelcomeEmail(RegistrationPayload::new(name, email))]
        );
    }

    #[tokio::test]
    async fn test_missing_name_returns_unprocessable_entity() {
        let queue = Arc::new(RecordingQueue::new());
        let server = server_with(
            Arc::new(InMemoryUserDirectory::new()),
            Arc::clone(&queue) as Arc<dyn JobQueue>,
        );

        let response = server
            .post("/api/users/register")
            .json(&json!({ "email": "alice@example.com" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["message"], "Les données fournies sont invalides.");
        assert_eq!(body["errors"]["name"][0], "Le champ nom est obligatoire.");
        assert!(queue.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_non_string_name_returns_bad_request() {
        let queue = Arc::new(RecordingQueue::new());
        let server = server_with(
            Arc::new(InMemoryUserDirectory::new()),
            Arc::clone(&queue) as Arc<dyn JobQueue>,
        );

        let response = server
            .post("/api/users/register")
            .json(&json!({ "name": 42, "email": "alice@example.com" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(queue.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_email_returns_unprocessable_entity() {
        let queue = Arc::new(RecordingQueue::new());
        let server = server_with(
            Arc::new(InMemoryUserDirectory::new()),
            Arc::clone(&queue) as Arc<dyn JobQueue>,
        );

        let response = server
            .post("/api/users/register")
            .json(&json!({ "name": "Alice", "email": "not-an-email" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(
            body["errors"]["email"][0],
            "Le champ email doit être une adresse e-mail valide."
        );
        assert!(queue.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_taken_email_returns_unprocessable_entity() {
        let queue = Arc::new(RecordingQueue::new());
        let server = server_with(
            Arc::new(InMemoryUserDirectory::with_registered(&[
                "alice@example.com",
            ])),
            Arc::clone(&queue) as Arc<dyn JobQueue>,
        );

        let response = server
            .post("/api/users/register")
            .json(&json!({ "name": "Alice", "email": "alice@example.com" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(
            body["errors"]["email"][0],
            "La valeur du champ email est déjà utilisée."
        );
        assert!(queue.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_full_queue_returns_service_unavailable() {
        let server = server_with(Arc::new(InMemoryUserDirectory::new()), Arc::new(FullQueue));

        let response = server
            .post("/api/users/register")
            .json(&json!({ "name": "Alice", "email": "alice@example.com" }))
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = response.json();
        assert_eq!(body["message"], "Service temporarily unavailable, please retry");
    }
}
