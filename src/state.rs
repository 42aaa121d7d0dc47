use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::config::Config;
use crate::settings::Settings;

/// Shared application state.
///
/// `config` is the profile published by the resolver at startup; it is
/// never mutated afterwards, only read by the command handlers and the
/// REST accessor.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub settings: Settings,
    pub client_sessions: Arc<DashMap<String, ClientSession>>,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ClientSession {
    pub client_uid: String,
    pub connected_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(settings: Settings, config: Config) -> Self {
        Self {
            config,
            settings,
            client_sessions: Arc::new(DashMap::new()),
            started_at: Utc::now(),
        }
    }

    pub fn generate_client_uid(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
