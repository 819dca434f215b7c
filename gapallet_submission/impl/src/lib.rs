use anyhow::{anyhow, Context};
use gapallet_models::lead::Lead;
use gapallet_submission_contracts::{SubmissionClient, SubmitError};
use gapallet_utils::trace_instrument;
use tracing::{info, warn};

use crate::http::HttpClient;

pub mod config;
pub mod http;

pub use config::{InvalidBaseUrl, SubmissionClientConfig};

#[derive(Debug, Clone)]
pub struct SubmissionClientImpl {
    config: SubmissionClientConfig,
    http: HttpClient,
}

impl SubmissionClientImpl {
    pub fn new(config: SubmissionClientConfig) -> anyhow::Result<Self> {
        Ok(Self::with_http(config, HttpClient::new()?))
    }

    pub fn with_http(config: SubmissionClientConfig, http: HttpClient) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &SubmissionClientConfig {
        &self.config
    }
}

impl SubmissionClient for SubmissionClientImpl {
    #[trace_instrument(skip(self, lead), fields(resource = %lead.resource()))]
    async fn post(&self, lead: Lead) -> Result<(), SubmitError> {
        let endpoint = self.config.endpoint(lead.resource());

        let response = self
            .http
            .post(endpoint.clone())
            .json(&lead)
            .send()
            .await
            .with_context(|| format!("Failed to send lead to {endpoint}"))
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        if status.is_success() {
            info!(%status, "Lead accepted by backend");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = match body.trim() {
            "" => status.canonical_reason().unwrap_or("Unknown status").to_owned(),
            body => body.to_owned(),
        };
        if status.is_client_error() {
            warn!(%status, %message, "Backend rejected lead");
        } else {
            warn!(%status, %message, "Backend failed to process lead");
        }

        Err(SubmitError::Status {
            status: status.as_u16(),
            message,
        })
    }

    #[trace_instrument(skip(self))]
    async fn ping(&self) -> anyhow::Result<()> {
        let status = self
            .http
            .get(self.config.health_endpoint().clone())
            .send()
            .await
            .context("Failed to send health check request")?
            .status();

        if !status.is_success() {
            return Err(anyhow!("Health check returned status {status}"));
        }

        Ok(())
    }
}
