use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::modules::queue::{Job, JobId, JobQueue, QueuedJob, SubmitError};

/// In-process job queue backed by a bounded tokio channel.
///
/// `submit` never blocks the request path: a saturated channel refuses the
/// job with [`SubmitError::QueueFull`] instead of applying backpressure to
/// the caller.
#[derive(Clone)]
pub struct ChannelQueue {
    tx: mpsc::Sender<QueuedJob>,
}

impl ChannelQueue {
    /// Create the queue and the receiving end its worker drains.
    pub fn with_capacity(capacity: usize) -> (Self, mpsc::Receiver<QueuedJob>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl JobQueue for ChannelQueue {
    async fn submit(&self, job: Job) -> Result<JobId, SubmitError> {
        let kind = job.kind();
        let queued = QueuedJob::new(job);
        let id = queued.id;

        self.tx.try_send(queued).map_err(|e| match e {
            TrySendError::Full(_) => SubmitError::QueueFull,
            TrySendError::Closed(_) => SubmitError::Closed,
        })?;

        tracing::info!("Job {} ({}) submitted", id, kind);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::queue::RegistrationPayload;

    fn welcome_job(email: &str) -> Job {
        Job::SendWelcomeEmail(RegistrationPayload::new(
            "Alice".to_string(),
            email.to_string(),
        ))
    }

    #[tokio::test]
    async fn test_submit_assigns_distinct_ids() {
        let (queue, _rx) = ChannelQueue::with_capacity(8);

        let first = queue.submit(welcome_job("a@example.com")).await.unwrap();
        let second = queue.submit(welcome_job("b@example.com")).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_jobs_are_delivered_in_submission_order() {
        let (queue, mut rx) = ChannelQueue::with_capacity(8);

        queue.submit(welcome_job("a@example.com")).await.unwrap();
        queue.submit(welcome_job("b@example.com")).await.unwrap();

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();

        let Job::SendWelcomeEmail(payload) = first.job;
        assert_eq!(payload.email, "a@example.com");
        let Job::SendWelcomeEmail(payload) = second.job;
        assert_eq!(payload.email, "b@example.com");
    }

    #[tokio::test]
    async fn test_full_queue_refuses_submission() {
        let (queue, _rx) = ChannelQueue::with_capacity(1);

        queue.submit(welcome_job("a@example.com")).await.unwrap();
        let refused = queue.submit(welcome_job("b@example.com")).await;

        assert!(matches!(refused, Err(SubmitError::QueueFull)));
    }

    #[tokio::test]
    async fn test_closed_queue_refuses_submission() {
        let (queue, rx) = ChannelQueue::with_capacity(1);
        drop(rx);

        let refused = queue.submit(welcome_job("a@example.com")).await;

        assert!(matches!(refused, Err(SubmitError::Closed)));
    }
}
