//! Search execution against the model registry

use super::models::{order_by_cost, ModelRecord, SearchRequest};
use crate::registry::ModelProvider;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Candidates fetched by [`Search::find_model`] when the top hit is not an exact match
pub const DEFAULT_LOOKUP_LIMIT: usize = 10;

/// Thermal-aware search over a model registry
///
/// Holds no state besides the provider handle, so one instance can serve
/// any number of concurrent callers.
pub struct Search {
    /// Registry to query
    provider: Arc<dyn ModelProvider>,
    /// Candidates fetched for exact-id lookups
    lookup_limit: usize,
}

impl Search {
    /// Create a new search executor
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self {
            provider,
            lookup_limit: DEFAULT_LOOKUP_LIMIT,
        }
    }

    /// Set how many candidates exact-id lookups fetch
    pub fn with_lookup_limit(mut self, limit: usize) -> Self {
        self.lookup_limit = limit;
        self
    }

    /// Run a search, returning at most `request.limit` annotated models.
    ///
    /// A registry failure is logged and yields an empty list.
    pub async fn execute(&self, request: &SearchRequest) -> Vec<ModelRecord> {
        let query = request.to_model_query();

        info!(
            "Searching {} for '{}' (limit={}, fetch={}, cost_aware={})",
            self.provider.name(),
            request.query,
            request.limit,
            query.limit,
            request.cost_aware
        );

        let models = match self.provider.list_models(&query).await {
            Ok(models) => models,
            Err(e) => {
                error!("Error searching models: {}", e);
                return Vec::new();
            }
        };

        let mut records: Vec<ModelRecord> = models.into_iter().map(ModelRecord::from).collect();

        if request.cost_aware {
            order_by_cost(&mut records);
        }

        records.truncate(request.limit);

        debug!("Returning {} models for '{}'", records.len(), request.query);

        records
    }

    /// Look up a model by exact id.
    ///
    /// Tries the top hit first, then scans a wider candidate list.
    pub async fn find_model(&self, model_id: &str) -> Option<ModelRecord> {
        let top = self
            .execute(&SearchRequest::new(model_id).limit(1))
            .await
            .into_iter()
            .next()?;

        if top.model_id == model_id {
            return Some(top);
        }

        debug!(
            "Top hit {} is not {}, scanning {} candidates",
            top.model_id, model_id, self.lookup_limit
        );

        self.execute(&SearchRequest::new(model_id).limit(self.lookup_limit))
            .await
            .into_iter()
            .find(|record| record.model_id == model_id)
    }
}
