use serde_json::Value;
use tracing::{info, warn};

use crate::config::Config;
use crate::config_manager::error::ConfigError;
use crate::config_manager::interfaces::DocumentFetcher;
use crate::config_manager::normalize::normalize_profile;

/// Produces the single authoritative [`Config`] for the session.
///
/// Resolution runs once at startup: if no remote profile source is
/// configured the built-in defaults are returned immediately, otherwise
/// the document is fetched through the relay, parsed and normalized.
/// Any failure along the way (transport, status, envelope, parse,
/// shape) discards the partial result and falls back to the defaults,
/// so callers always receive a fully-formed profile. The visitor never
/// sees the failure; the cause is logged.
pub struct ConfigResolver {
    fetcher: Box<dyn DocumentFetcher>,
}

impl ConfigResolver {
    pub fn new(fetcher: Box<dyn DocumentFetcher>) -> Self {
        Self { fetcher }
    }

    /// Resolve the session profile. `source_url` is the optional remote
    /// document location; `None` or an empty string means no network
    /// call is made at all.
    pub async fn resolve(&self, source_url: Option<&str>) -> Config {
        let url = match source_url.filter(|u| !u.is_empty()) {
            Some(url) => url,
            None => {
                info!("no remote profile source configured, using built-in profile");
                return Config::default();
            }
        };

        match self.resolve_remote(url).await {
            Ok(config) => {
                info!("loaded profile from remote source");
                config
            }
            Err(e) => {
                warn!("failed to load remote profile, using built-in profile: {}", e);
                Config::default()
            }
        }
    }

    async fn resolve_remote(&self, url: &str) -> Result<Config, ConfigError> {
        let text = self.fetcher.fetch_document(url).await?;
        let value: Value = serde_json::from_str(&text)?;
        let doc = value.as_object().ok_or(ConfigError::Shape)?;
        Ok(normalize_profile(doc))
    }
}
