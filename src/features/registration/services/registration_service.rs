//! Registration service - field rules, uniqueness check, job dispatch

use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::registration::dtos::RegisterUserDto;
use crate::features::users::UserDirectory;
use crate::modules::queue::{Job, JobId, JobQueue, RegistrationPayload};
use crate::shared::validation::FieldErrors;

/// Message attached to the email field when the address is already registered
const EMAIL_TAKEN_MESSAGE: &str = "La valeur du champ email est déjà utilisée.";

/// Service validating registration requests and queueing their welcome email.
///
/// The user directory is only read here. Accepted registrations leave as an
/// in-memory payload on the job queue and no user row is written.
pub struct RegistrationService {
    directory: Arc<dyn UserDirectory>,
    queue: Arc<dyn JobQueue>,
}

impl RegistrationService {
    pub fn new(directory: Arc<dyn UserDirectory>, queue: Arc<dyn JobQueue>) -> Self {
        Self { directory, queue }
    }

    /// Validate a registration request and queue the welcome email for it.
    pub async fn register(&self, dto: RegisterUserDto) -> Result<JobId> {
        let errors = self.validate_request(&dto).await?;
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let payload = match (dto.name, dto.email) {
            (Some(name), Some(email)) => RegistrationPayload::new(name, email),
            // both fields carry a required rule, so validation already rejected this
            _ => {
                return Err(AppError::Internal(
                    "registration fields missing after validation".to_string(),
                ))
            }
        };

        let recipient = payload.email.clone();
        let job_id = self.queue.submit(Job::SendWelcomeEmail(payload)).await?;

        tracing::info!("Welcome email job {} queued for {}", job_id, recipient);

        Ok(job_id)
    }

    /// Apply every registration rule and collect the failures per field.
    ///
    /// The uniqueness rule only runs once the email itself is well formed,
    /// so malformed input is never sent to the directory.
    async fn validate_request(&self, dto: &RegisterUserDto) -> Result<FieldErrors> {
        let mut errors = match dto.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        if let Some(email) = dto.email.as_deref() {
            if !errors.contains("email") && self.directory.email_exists(email).await? {
                errors.push("email", EMAIL_TAKEN_MESSAGE);
            }
        }

        Ok(errors)
    }
}
