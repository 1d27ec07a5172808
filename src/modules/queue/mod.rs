//! Queue module for background job submission and execution
//!
//! The request path only ever talks to the [`JobQueue`] trait: hand over a
//! named job, get a [`JobId`] back, never wait for the work itself. The
//! bundled implementation is an in-process bounded channel drained by
//! [`EmailWorker`]; a broker-backed queue would slot in behind the same
//! trait.

use async_trait::async_trait;
use thiserror::Error;

pub mod job;

mod channel_queue;
mod worker;

pub use channel_queue::ChannelQueue;
pub use job::{Job, JobId, QueuedJob, RegistrationPayload};
pub use worker::EmailWorker;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("job queue is full")]
    QueueFull,

    #[error("job queue is closed")]
    Closed,
}

/// Asynchronous job queue accepting named units of work.
///
/// Submission is fire-and-forget: a returned [`JobId`] only acknowledges that
/// the queue accepted the job, not that the work ran. Execution, ordering and
/// retry policy belong to the queue's worker side.
#[async_trait]
pub trait JobQueue: Send + Sync {
    async fn submit(&self, job: Job) -> Result<JobId, SubmitError>;
}
