//! Model registry traits and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sort key for most-downloaded-first listings
pub const SORT_DOWNLOADS: &str = "downloads";

/// Descending sort direction
pub const DIRECTION_DESC: i8 = -1;

/// Parameters for a registry model listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelQuery {
    /// Free-text search string
    pub search: String,
    /// Number of models to return
    pub limit: usize,
    /// Sort key
    pub sort: String,
    /// Sort direction (-1 descending)
    pub direction: i8,
    /// Pipeline/task filter, passed through verbatim
    pub task: Option<String>,
}

impl ModelQuery {
    /// Create a most-downloaded-first query
    pub fn new(search: impl Into<String>, limit: usize) -> Self {
        Self {
            search: search.into(),
            limit,
            sort: SORT_DOWNLOADS.to_string(),
            direction: DIRECTION_DESC,
            task: None,
        }
    }

    /// Restrict to a task type
    pub fn task(mut self, task: Option<String>) -> Self {
        self.task = task;
        self
    }
}

/// A model as listed by the registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubModel {
    /// Repository id, e.g. `distilbert-base-uncased` or `org/name`
    #[serde(alias = "modelId")]
    pub id: String,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub pipeline_tag: Option<String>,
    #[serde(default)]
    pub library_name: Option<String>,
}

impl HubModel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn downloads(mut self, downloads: u64) -> Self {
        self.downloads = Some(downloads);
        self
    }

    pub fn likes(mut self, likes: u64) -> Self {
        self.likes = Some(likes);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn pipeline_tag(mut self, tag: impl Into<String>) -> Self {
        self.pipeline_tag = Some(tag.into());
        self
    }

    pub fn library_name(mut self, name: impl Into<String>) -> Self {
        self.library_name = Some(name.into());
        self
    }
}

/// Errors raised by a model registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(#[source] anyhow::Error),

    /// The registry answered with a non-success status
    #[error("registry returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a model listing
    #[error("failed to parse registry response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A registry that can list models for a keyword search
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &str;

    /// List models matching the query, in the registry's order
    async fn list_models(&self, query: &ModelQuery) -> Result<Vec<HubModel>, RegistryError>;
}
