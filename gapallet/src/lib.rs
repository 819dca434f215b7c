use anyhow::Context;
use gapallet_config::Config;
use gapallet_submission_impl::{SubmissionClientConfig, SubmissionClientImpl};

pub mod commands;
pub mod notifier;

/// Build the submission client for the configured backend.
pub fn submission_client(config: &Config) -> anyhow::Result<SubmissionClientImpl> {
    let client_config = SubmissionClientConfig::new(config.backend.url.clone())
        .with_context(|| format!("Invalid backend URL {}", config.backend.url))?;
    SubmissionClientImpl::new(client_config)
}
