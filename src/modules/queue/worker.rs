use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::modules::mail::{MailError, Mailer, OutgoingEmail};
use crate::modules::queue::{Job, QueuedJob, RegistrationPayload};

/// Maximum delivery attempts per job
const MAX_ATTEMPTS: u32 = 3;

/// Delay between delivery attempts
const RETRY_DELAY_SECS: u64 = 5;

/// Welcome email worker that runs in the background
/// Drains the job queue and hands rendered emails to the transport
pub struct EmailWorker {
    rx: mpsc::Receiver<QueuedJob>,
    mailer: Arc<dyn Mailer>,
    retry_delay: Duration,
}

impl EmailWorker {
    pub fn new(rx: mpsc::Receiver<QueuedJob>, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            rx,
            mailer,
            retry_delay: Duration::from_secs(RETRY_DELAY_SECS),
        }
    }

    /// Override the delay between delivery attempts.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Drain the queue until it closes.
    pub async fn run(mut self) {
        tracing::info!("Starting welcome email worker");

        while let Some(queued) = self.rx.recv().await {
            self.process(queued).await;
        }

        tracing::info!("Welcome email worker stopped: queue closed");
    }

    /// Process a single job, retrying transient delivery failures.
    ///
    /// A job that still fails on the last attempt is dropped; delivery
    /// problems never reach back to the request that queued the job.
    async fn process(&self, queued: QueuedJob) {
        let waited_ms = (Utc::now() - queued.submitted_at).num_milliseconds();
        tracing::info!(
            "Processing job {} ({}), queued {}ms ago",
            queued.id,
            queued.job.kind(),
            waited_ms
        );

        for attempt in 1..=MAX_ATTEMPTS {
            match self.deliver(&queued.job).await {
                Ok(()) => {
                    tracing::info!(
                        "Job {} ({}) completed on attempt {}",
                        queued.id,
                        queued.job.kind(),
                        attempt
                    );
                    return;
                }
                Err(e) if attempt < MAX_ATTEMPTS => {
                    tracing::warn!(
                        "Job {} attempt {}/{} failed: {}",
                        queued.id,
                        attempt,
                        MAX_ATTEMPTS,
                        e
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => {
                    tracing::error!(
                        "Job {} permanently failed after {} attempts: {}",
                        queued.id,
                        MAX_ATTEMPTS,
                        e
                    );
                }
            }
        }
    }

    async fn deliver(&self, job: &Job) -> Result<(), MailError> {
        match job {
            Job::SendWelcomeEmail(payload) => self.mailer.send(&welcome_email(payload)).await,
        }
    }
}

/// Render the welcome email for a freshly registered user.
fn welcome_email(payload: &RegistrationPayload) -> OutgoingEmail {
    OutgoingEmail {
        to: payload.email.clone(),
        subject: format!("Bienvenue, {} !", payload.name),
        text: format!(
            "Bonjour {},\n\n\
             Votre compte a bien été créé. Nous sommes ravis de vous compter parmi nous.\n\n\
             L'équipe Accueil",
            payload.name
        ),
    }
}
