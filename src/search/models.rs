//! Search request and annotated model records

use crate::registry::{HubModel, ModelQuery};
use crate::thermal::{self, ThermalCost};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Default number of results
pub const DEFAULT_LIMIT: usize = 10;

/// Over-fetch factor used when results will be re-ordered by cost
pub const COST_AWARE_FETCH_FACTOR: usize = 2;

/// A thermal-aware search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The search query string
    pub query: String,
    /// Maximum number of results
    pub limit: usize,
    /// Task/pipeline filter
    pub task: Option<String>,
    /// Order results cheapest first
    pub cost_aware: bool,
}

impl SearchRequest {
    /// Create a cost-aware request with the default limit
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_LIMIT,
            task: None,
            cost_aware: true,
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    pub fn cost_aware(mut self, cost_aware: bool) -> Self {
        self.cost_aware = cost_aware;
        self
    }

    /// Number of models to ask the registry for
    pub fn fetch_limit(&self) -> usize {
        if self.cost_aware {
            self.limit.saturating_mul(COST_AWARE_FETCH_FACTOR)
        } else {
            self.limit
        }
    }

    /// Registry query for this search
    pub fn to_model_query(&self) -> ModelQuery {
        ModelQuery::new(self.query.clone(), self.fetch_limit()).task(self.task.clone())
    }
}

/// A registry model annotated with its thermal cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    #[serde(rename = "modelId")]
    pub model_id: String,
    pub downloads: u64,
    pub likes: u64,
    pub tags: Vec<String>,
    pub pipeline_tag: Option<String>,
    pub library_name: Option<String>,
    pub thermal_cost: Option<ThermalCost>,
}

impl ModelRecord {
    /// Build an unannotated record, defaulting missing fields
    pub fn from_hub(model: HubModel) -> Self {
        Self {
            model_id: model.id,
            downloads: model.downloads.unwrap_or(0),
            likes: model.likes.unwrap_or(0),
            tags: model.tags.unwrap_or_default(),
            pipeline_tag: model.pipeline_tag,
            library_name: model.library_name,
            thermal_cost: None,
        }
    }

    /// Estimate the thermal cost from the id and tags
    pub fn estimate_cost(&self) -> ThermalCost {
        thermal::estimate(&self.model_id, self.tags.as_slice())
    }

    /// Attach the estimated thermal cost
    pub fn annotated(mut self) -> Self {
        self.thermal_cost = Some(self.estimate_cost());
        self
    }

    /// Sort key for cost-aware ordering: cheapest tier, then most downloaded
    pub fn cost_order_key(&self) -> (u8, Reverse<u64>) {
        (ThermalCost::rank_of(self.thermal_cost), Reverse(self.downloads))
    }
}

impl From<HubModel> for ModelRecord {
    fn from(model: HubModel) -> Self {
        ModelRecord::from_hub(model).annotated()
    }
}

/// Stable sort by thermal tier, then downloads descending
pub fn order_by_cost(records: &mut [ModelRecord]) {
    records.sort_by_key(ModelRecord::cost_order_key);
}
