use async_trait::async_trait;

use crate::config_manager::error::ConfigError;

/// Retrieval of the raw remote profile document text.
///
/// Implemented by the relay client; the resolver only depends on this
/// trait so the pipeline can be exercised without a network.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch the raw text of the document at `url`. Single attempt,
    /// no retries; any failure maps onto the [`ConfigError`] taxonomy.
    async fn fetch_document(&self, url: &str) -> Result<String, ConfigError>;
}
