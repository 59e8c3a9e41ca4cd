use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::constants::REQUEST_TIMEOUT_SECS;
use crate::network::errors::NetworkError;
use crate::network::fetcher::{FetchMode, PageFetcher, RawContent};
use crate::network::identity::IdentityProfile;

// * The HTTP engine behind both pipeline phases.
#[derive(Debug, Clone)]
pub struct FastClient {
    inner: Client,
}

impl FastClient {
    // * Initializes the client with the default identity and request timeout.
    pub fn new() -> Result<Self, NetworkError> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    // * The timeout bounds connect, headers and body together.
    pub fn with_timeout(timeout: Duration) -> Result<Self, NetworkError> {
        Self::with_identity(timeout, &IdentityProfile::default())
    }

    pub fn with_identity(timeout: Duration, identity: &IdentityProfile) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .default_headers(identity.headers()?)
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        Ok(Self { inner: client })
    }
}

#[async_trait]
impl PageFetcher for FastClient {
    async fn try_fetch(&self, url: &str, mode: FetchMode) -> Result<RawContent, NetworkError> {
        let parsed = reqwest::Url::parse(url).map_err(|_| NetworkError::InvalidUrl(url.to_string()))?;
        let resp = self.inner.get(parsed).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16(), url.to_string()));
        }

        let content = match mode {
            FetchMode::Text => RawContent::Text(resp.text().await?),
            FetchMode::Bytes => RawContent::Bytes(resp.bytes().await?.to_vec()),
        };

        debug!(url = %url, status = status.as_u16(), "Fetched page");
        Ok(content)
    }
}
