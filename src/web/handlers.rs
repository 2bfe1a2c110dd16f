//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::search::{ModelRecord, SearchRequest};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

/// Placeholder for a tier that was never estimated
const UNKNOWN_COST: &str = "Unknown";

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
    /// Number of results
    pub limit: Option<usize>,
    /// Task/pipeline filter
    pub model_type: Option<String>,
    /// Sort cheapest first
    pub thermal_aware: Option<bool>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub thermal_aware: bool,
}

/// A model in API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(rename = "modelId")]
    pub model_id: String,
    pub downloads: u64,
    pub likes: u64,
    pub tags: Vec<String>,
    pub pipeline_tag: Option<String>,
    pub library_name: Option<String>,
    pub thermal_cost: String,
}

impl From<ModelRecord> for ModelInfo {
    fn from(record: ModelRecord) -> Self {
        Self {
            thermal_cost: cost_label(&record),
            model_id: record.model_id,
            downloads: record.downloads,
            likes: record.likes,
            tags: record.tags,
            pipeline_tag: record.pipeline_tag,
            library_name: record.library_name,
        }
    }
}

/// Search results response
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub models: Vec<ModelInfo>,
    pub query: String,
    pub limit: usize,
    pub thermal_aware: bool,
}

/// Single model response
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelDetailsResponse {
    #[serde(rename = "modelId")]
    pub model_id: String,
    pub thermal_cost: String,
    pub downloads: u64,
    pub likes: u64,
    pub tags: Vec<String>,
    pub pipeline_tag: Option<String>,
    pub library_name: Option<String>,
    /// Model card summary; not fetched yet
    pub description: Option<String>,
}

impl From<ModelRecord> for ModelDetailsResponse {
    fn from(record: ModelRecord) -> Self {
        Self {
            thermal_cost: cost_label(&record),
            model_id: record.model_id,
            downloads: record.downloads,
            likes: record.likes,
            tags: record.tags,
            pipeline_tag: record.pipeline_tag,
            library_name: record.library_name,
            description: None,
        }
    }
}

fn cost_label(record: &ModelRecord) -> String {
    record
        .thermal_cost
        .map(|c| c.to_string())
        .unwrap_or_else(|| UNKNOWN_COST.to_string())
}

/// API root
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": format!("Welcome to {} API", state.instance_name()),
        "endpoints": ["/health", "/api/v1/search", "/api/v1/models/{model_id}"]
    }))
}

/// Health check handler
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        thermal_aware: true,
    })
}

/// Search handler
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::Validation(e.body_text()))?;

    let query = match params.q {
        Some(q) if !q.trim().is_empty() => q,
        _ => return Err(ApiError::Validation("query parameter 'q' is required".to_string())),
    };

    let max_limit = state.settings.search.max_limit;
    let limit = params.limit.unwrap_or(state.settings.search.default_limit);
    if limit == 0 || limit > max_limit {
        return Err(ApiError::Validation(format!(
            "limit must be between 1 and {}",
            max_limit
        )));
    }

    let thermal_aware = params.thermal_aware.unwrap_or(true);

    let mut request = SearchRequest::new(query.clone())
        .limit(limit)
        .cost_aware(thermal_aware);
    if let Some(task) = params.model_type.filter(|t| !t.is_empty()) {
        request = request.task(task);
    }

    let models = state
        .search
        .execute(&request)
        .await
        .into_iter()
        .map(ModelInfo::from)
        .collect();

    Ok(Json(SearchResponse {
        models,
        query,
        limit,
        thermal_aware,
    }))
}

/// Model details handler
pub async fn model_details(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> Result<Json<ModelDetailsResponse>, ApiError> {
    let model_id = model_id.trim_start_matches('/');

    state
        .search
        .find_model(model_id)
        .await
        .map(|record| Json(record.into()))
        .ok_or_else(|| ApiError::NotFound(format!("Model {} not found", model_id)))
}
