use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Server settings: where to listen, where the static frontend lives,
/// and where the remote profile document (if any) comes from.
///
/// Loaded from an optional local file (JSON or YAML) with environment
/// overrides on top; every field has a default so the server runs with
/// no file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// URL of the remote profile document. Absent or empty means the
    /// built-in default profile is used and no network call is made.
    #[serde(default)]
    pub gist_url: Option<String>,

    #[serde(default = "default_relay_base_url")]
    pub relay_base_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    12393
}

fn default_static_dir() -> String {
    "frontend/dist".to_string()
}

fn default_relay_base_url() -> String {
    "https://api.allorigins.win/get".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            gist_url: None,
            relay_base_url: default_relay_base_url(),
        }
    }
}

impl Settings {
    /// Load settings, probing the usual locations, then apply
    /// environment overrides. A missing or unreadable file is not an
    /// error; the defaults stand in.
    pub fn load() -> Self {
        let candidate_paths: Vec<String> = vec![
            std::env::var("CONFIG_PATH").ok(),
            Some("conf.json".to_string()),
            Some("conf.yaml".to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut settings = None;
        for path in candidate_paths {
            match Self::from_file(&path) {
                Ok(loaded) => {
                    debug!("loaded settings from {}", path);
                    settings = Some(loaded);
                    break;
                }
                Err(e) => {
                    debug!("failed to load settings from {}: {}", path, e);
                }
            }
        }

        let mut settings = settings.unwrap_or_default();
        settings.apply_env_overrides();
        settings
    }

    /// Parse a settings file, by extension: `.json` as JSON, anything
    /// else as YAML.
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("settings file not found: {}", path);
        }

        let content = read_text_file(path)?;
        let content = substitute_env_vars(&content);

        if path.to_lowercase().ends_with(".json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("CONFIG_GIST_URL") {
            self.gist_url = if url.is_empty() { None } else { Some(url) };
        }
        if let Ok(url) = std::env::var("RELAY_BASE_URL") {
            if !url.is_empty() {
                self.relay_base_url = url;
            }
        }
    }
}

/// Read a text file tolerating a UTF-8 BOM and invalid byte sequences;
/// settings files get hand-edited on all kinds of machines.
fn read_text_file(path: &str) -> Result<String> {
    let bytes = fs::read(path)?;
    let (content, _, _) = encoding_rs::UTF_8.decode(&bytes);
    Ok(content.into_owned())
}

/// Replace `${VAR_NAME}` references with environment values; unknown
/// variables are left as-is.
fn substitute_env_vars(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").unwrap();
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = caps.get(1).unwrap().as_str();
            std::env::var(var_name).unwrap_or_else(|_| caps.get(0).unwrap().as_str().to_string())
        })
        .into_owned()
}
