use std::sync::Arc;

use gapallet_models::lead::LeadResource;
use thiserror::Error;
use tracing::warn;
use url::Url;

/// Where leads are sent to.
///
/// Built once from the configured base URL and handed to the client, so no
/// code path reads the backend origin from global state.
#[derive(Debug, Clone)]
pub struct SubmissionClientConfig {
    base_url: Arc<Url>,
    contact_endpoint: Arc<Url>,
    quote_endpoint: Arc<Url>,
    health_endpoint: Arc<Url>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBaseUrl {
    #[error("Unsupported scheme {0:?}, expected http or https")]
    Scheme(String),
    #[error("Base URL has no host")]
    MissingHost,
    #[error("Base URL must not contain a query or fragment")]
    QueryOrFragment,
}

impl SubmissionClientConfig {
    pub fn new(base_url: Url) -> Result<Self, InvalidBaseUrl> {
        match base_url.scheme() {
            "https" => {}
            "http" => warn!(%base_url, "Backend base URL is not using https"),
            scheme => return Err(InvalidBaseUrl::Scheme(scheme.into())),
        }
        if !base_url.has_host() {
            return Err(InvalidBaseUrl::MissingHost);
        }
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(InvalidBaseUrl::QueryOrFragment);
        }

        Ok(Self {
            contact_endpoint: api_url(&base_url, LeadResource::Contact.segment())?.into(),
            quote_endpoint: api_url(&base_url, LeadResource::Quote.segment())?.into(),
            health_endpoint: api_url(&base_url, "health")?.into(),
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base_url}/api{resource}`
    pub fn endpoint(&self, resource: LeadResource) -> &Url {
        match resource {
            LeadResource::Contact => &self.contact_endpoint,
            LeadResource::Quote => &self.quote_endpoint,
        }
    }

    pub fn health_endpoint(&self) -> &Url {
        &self.health_endpoint
    }
}

fn api_url(base_url: &Url, segment: &str) -> Result<Url, InvalidBaseUrl> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| InvalidBaseUrl::MissingHost)?
        .pop_if_empty()
        .extend(["api", segment]);
    Ok(url)
}
