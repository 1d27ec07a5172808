use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Data carried from the registration endpoint into the queued job.
///
/// Built from validated input only and moved into the job message by value;
/// nothing holds onto it once the request completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub name: String,
    pub email: String,
}

impl RegistrationPayload {
    pub fn new(name: String, email: String) -> Self {
        Self { name, email }
    }
}

/// Named unit of work accepted by the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Job {
    SendWelcomeEmail(RegistrationPayload),
}

impl Job {
    /// Stable name of the job type, used in logs and the wire encoding.
    pub fn kind(&self) -> &'static str {
        match self {
            Job::SendWelcomeEmail(_) => "send_welcome_email",
        }
    }
}

/// Identifier assigned to a job at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Queue-internal envelope around a submitted job.
#[derive(Debug, Clone)]
pub struct QueuedJob {
    pub id: JobId,
    pub job: Job,
    pub submitted_at: DateTime<Utc>,
}

impl QueuedJob {
    pub fn new(job: Job) -> Self {
        Self {
            id: JobId::new(),
            job,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_kind_names_the_unit_of_work() {
        let job = Job::SendWelcomeEmail(RegistrationPayload::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
        ));

        assert_eq!(job.kind(), "send_welcome_email");
    }

    #[test]
    fn test_job_wire_encoding_carries_kind_and_payload() {
        let job = Job::SendWelcomeEmail(RegistrationPayload::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
        ));

        let encoded = serde_json::to_value(&job).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({
                "kind": "send_welcome_email",
                "payload": { "name": "Alice", "email": "alice@example.com" },
            })
        );
    }

    #[test]
    fn test_job_ids_are_unique() {
        assert_ne!(JobId::new(), JobId::new());
    }
}
