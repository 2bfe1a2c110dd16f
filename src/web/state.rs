//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::registry::{HuggingFaceHub, ModelProvider};
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search executor
    pub search: Arc<Search>,
}

impl AppState {
    /// Create state backed by the Hugging Face Hub
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let hub = HuggingFaceHub::with_settings(client, &settings.hub);
        Self::with_provider(settings, Arc::new(hub))
    }

    /// Create state backed by any model registry
    pub fn with_provider(settings: Settings, provider: Arc<dyn ModelProvider>) -> Self {
        let search = Search::new(provider).with_lookup_limit(settings.search.lookup_limit);

        Self {
            settings: Arc::new(settings),
            search: Arc::new(search),
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
