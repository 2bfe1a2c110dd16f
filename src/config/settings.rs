//! Settings structures for Thermal Scout configuration

use crate::registry::DEFAULT_API_URL;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Longest accepted outgoing request timeout, in seconds
const MAX_REQUEST_TIMEOUT: f64 = 3600.0;

/// Main settings structure, loaded from `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub search: SearchSettings,
    pub server: ServerSettings,
    pub hub: HubSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text; call [`Settings::validate`] once
    /// environment overrides are applied
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Merge with environment variables (THERMAL_SCOUT_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("THERMAL_SCOUT_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("THERMAL_SCOUT_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("THERMAL_SCOUT_HUB_URL") {
            self.hub.api_url = val;
        }
        if let Ok(val) = std::env::var("THERMAL_SCOUT_HUB_TOKEN") {
            self.hub.token = Some(val);
        }
        if let Ok(val) = std::env::var("THERMAL_SCOUT_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.hub.api_url)
            .map_err(|e| anyhow::anyhow!("invalid hub.api_url {:?}: {}", self.hub.api_url, e))?;

        if self.search.default_limit == 0 || self.search.default_limit > self.search.max_limit {
            anyhow::bail!(
                "search.default_limit must be between 1 and {}",
                self.search.max_limit
            );
        }

        let timeout = self.outgoing.request_timeout;
        if !timeout.is_finite() || timeout <= 0.0 || timeout > MAX_REQUEST_TIMEOUT {
            anyhow::bail!(
                "outgoing.request_timeout must be between 0 and {} seconds",
                MAX_REQUEST_TIMEOUT
            );
        }

        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Instance name reported by the API
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            instance_name: "Thermal Scout".to_string(),
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Result count when none is requested
    pub default_limit: usize,
    /// Largest result count the API accepts
    pub max_limit: usize,
    /// Candidates fetched when looking up a model by id
    pub lookup_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 100,
            lookup_limit: 10,
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Model registry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HubSettings {
    /// Model listing endpoint
    pub api_url: String,
    /// Access token, sent as a bearer token
    pub token: Option<String>,
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Appended to the user agent
    pub useragent_suffix: Option<String>,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            useragent_suffix: None,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}
