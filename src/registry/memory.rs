//! In-memory model registry for tests

use super::traits::*;
use async_trait::async_trait;
use std::sync::Mutex;

/// Registry that serves a fixed listing and records every query
#[derive(Default)]
pub struct StaticProvider {
    models: Vec<HubModel>,
    fail: bool,
    panic: bool,
    queries: Mutex<Vec<ModelQuery>>,
}

impl StaticProvider {
    pub fn new(models: Vec<HubModel>) -> Self {
        Self {
            models,
            ..Default::default()
        }
    }

    /// A registry whose every listing fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// A registry that panics mid-request
    pub fn panicking() -> Self {
        Self {
            panic: true,
            ..Default::default()
        }
    }

    /// Queries received so far
    pub fn queries(&self) -> Vec<ModelQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn list_models(&self, query: &ModelQuery) -> Result<Vec<HubModel>, RegistryError> {
        self.queries.lock().unwrap().push(query.clone());

        if self.panic {
            panic!("listing exploded");
        }
        if self.fail {
            return Err(RegistryError::Network(anyhow::anyhow!("registry unavailable")));
        }

        // Ignores `limit` so callers can be checked for truncation
        Ok(self.models.clone())
    }
}

/// The three-model listing used across search and API tests, in the
/// registry's most-downloaded-first order
pub fn sample_models() -> Vec<HubModel> {
    vec![
        HubModel::new("bert-large-uncased")
            .downloads(2_000_000)
            .likes(1000)
            .tags(["transformers", "pytorch", "bert", "large"])
            .pipeline_tag("fill-mask")
            .library_name("transformers"),
        HubModel::new("distilbert-base-uncased")
            .downloads(1_000_000)
            .likes(500)
            .tags(["transformers", "pytorch", "bert", "distilled"])
            .pipeline_tag("text-classification")
            .library_name("transformers"),
        HubModel::new("bert-tiny")
            .downloads(500_000)
            .likes(200)
            .tags(["transformers", "pytorch", "tiny"])
            .pipeline_tag("text-classification")
            .library_name("transformers"),
    ]
}
