use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config_manager::interfaces::DocumentFetcher;
use crate::config_manager::ConfigError;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the CORS relay that fronts the remote profile document.
///
/// The browser frontend cannot fetch a gist cross-origin, so the
/// document is requested through a relay that performs the fetch
/// server-side and wraps the body in a `{"contents": ...}` envelope.
/// One GET per resolution, no retries.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RelayEnvelope {
    contents: String,
}

impl RelayClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn fetch(&self, target_url: &str) -> Result<String, ConfigError> {
        debug!("fetching profile document via relay: {}", target_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("url", target_url)])
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConfigError::HttpStatus(status.as_u16()));
        }

        let envelope: RelayEnvelope = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ConfigError::Timeout(REQUEST_TIMEOUT_SECS)
            } else {
                ConfigError::Envelope(e.to_string())
            }
        })?;

        Ok(envelope.contents)
    }
}

fn classify_transport_error(e: reqwest::Error) -> ConfigError {
    if e.is_timeout() {
        ConfigError::Timeout(REQUEST_TIMEOUT_SECS)
    } else {
        ConfigError::Network(e.to_string())
    }
}

#[async_trait]
impl DocumentFetcher for RelayClient {
    async fn fetch_document(&self, url: &str) -> Result<String, ConfigError> {
        self.fetch(url).await
    }
}
