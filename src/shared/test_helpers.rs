#[cfg(test)]
use std::collections::HashSet;
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use crate::features::users::{DirectoryError, UserDirectory};
#[cfg(test)]
use crate::modules::queue::{Job, JobId, JobQueue, SubmitError};

/// User directory seeded with a fixed set of registered emails.
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryUserDirectory {
    emails: HashSet<String>,
}

#[cfg(test)]
#[allow(dead_code)]
impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registered(emails: &[&str]) -> Self {
        Self {
            emails: emails.iter().map(|email| email.to_string()).collect(),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn email_exists(&self, email: &str) -> Result<bool, DirectoryError> {
        Ok(self.emails.contains(email))
    }
}

/// Directory whose backing store is unreachable.
#[cfg(test)]
pub struct UnavailableDirectory;

#[cfg(test)]
#[async_trait]
impl UserDirectory for UnavailableDirectory {
    async fn email_exists(&self, _email: &str) -> Result<bool, DirectoryError> {
        Err(DirectoryError::Unavailable {
            message: "directory offline".to_string(),
        })
    }
}

/// Queue that records accepted jobs instead of dispatching them.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingQueue {
    jobs: Mutex<Vec<Job>>,
}

#[cfg(test)]
#[allow(dead_code)]
impl RecordingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> Vec<Job> {
        self.jobs.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl JobQueue for RecordingQueue {
    async fn submit(&self, job: Job) -> Result<JobId, SubmitError> {
        self.jobs.lock().unwrap().push(job);
        Ok(JobId::new())
    }
}

/// Queue that rejects every submission as full.
#[cfg(test)]
pub struct FullQueue;

#[cfg(test)]
#[async_trait]
impl JobQueue for FullQueue {
    async fn submit(&self, _job: Job) -> Result<JobId, SubmitError> {
        Err(SubmitError::QueueFull)
    }
}
