use std::future::Future;

use gapallet_models::lead::Lead;
use thiserror::Error;

/// Sends validated leads to the backend receiver.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmissionClient: Send + Sync + 'static {
    /// Post the lead as JSON to `{base_url}/api{resource}`, where the resource
    /// is determined by the kind of lead.
    ///
    /// Resolves once the backend answered with a 2xx status. There are no
    /// retries.
    fn post(&self, lead: Lead) -> impl Future<Output = Result<(), SubmitError>> + Send;

    /// Check that the backend is reachable and healthy.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced a response (DNS, connection, timeout, ...).
    #[error("Failed to send request: {0:#}")]
    Transport(anyhow::Error),
    /// The backend answered with a status outside of the 2xx range.
    #[error("Backend responded with status {status}: {message}")]
    Status { status: u16, message: String },
}

impl SubmitError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(_) => None,
            Self::Status { status, .. } => Some(*status),
        }
    }
}

#[cfg(feature = "mock")]
impl MockSubmissionClient {
    pub fn with_post(mut self, lead: Lead, result: Result<(), SubmitError>) -> Self {
        self.expect_post()
            .once()
            .with(mockall::predicate::eq(lead))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_ping(mut self, healthy: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(if healthy {
                Ok(())
            } else {
                Err(anyhow::anyhow!("Backend is unhealthy"))
            }))
        });
        self
    }
}
