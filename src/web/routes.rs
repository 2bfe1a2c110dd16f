//! Route definitions

use super::error::panic_response;
use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // API routes
        .route("/api/v1/search", get(handlers::search))
        .route("/api/v1/models/*model_id", get(handlers::model_details))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::registry::memory::{sample_models, StaticProvider};
    use crate::registry::HubModel;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with(models: Vec<HubModel>) -> Router {
        let provider = Arc::new(StaticProvider::new(models));
        create_router(AppState::with_provider(Settings::default(), provider))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, json) = get_json(app_with(vec![]), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["thermal_aware"], true);
    }

    #[tokio::test]
    async fn test_root() {
        let (status, json) = get_json(app_with(vec![]), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["message"].as_str().unwrap().contains("Thermal Scout"));
    }

    #[tokio::test]
    async fn test_search_returns_models() {
        let (status, json) = get_json(app_with(sample_models()), "/api/v1/search?q=bert&limit=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["query"], "bert");
        assert_eq!(json["limit"], 2);
        assert_eq!(json["thermal_aware"], true);

        let models = json["models"].as_array().unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0]["modelId"], "distilbert-base-uncased");
        assert_eq!(models[0]["thermal_cost"], "Low");
    }

    #[tokio::test]
    async fn test_search_without_thermal_sorting() {
        let (status, json) = get_json(
            app_with(sample_models()),
            "/api/v1/search?q=bert+base&thermal_aware=false&model_type=fill-mask",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["query"], "bert base");
        assert_eq!(json["models"][0]["modelId"], "bert-large-uncased");
        assert_eq!(json["models"][0]["thermal_cost"], "High");
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let (status, json) = get_json(app_with(vec![]), "/api/v1/search").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["detail"].is_string());

        let (status, _) = get_json(app_with(vec![]), "/api/v1/search?q=%20").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_search_limit_bounds() {
        for uri in [
            "/api/v1/search?q=bert&limit=0",
            "/api/v1/search?q=bert&limit=101",
            "/api/v1/search?q=bert&limit=many",
        ] {
            let (status, _) = get_json(app_with(vec![]), uri).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_search_registry_down_is_empty() {
        let provider = Arc::new(StaticProvider::failing());
        let app = create_router(AppState::with_provider(Settings::default(), provider));

        let (status, json) = get_json(app, "/api/v1/search?q=bert").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["models"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_model_details() {
        let (status, json) =
            get_json(app_with(sample_models()), "/api/v1/models/bert-large-uncased").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["modelId"], "bert-large-uncased");
        assert_eq!(json["thermal_cost"], "High");
        assert_eq!(json["downloads"], 2_000_000);
        assert!(json["description"].is_null());
    }

    #[tokio::test]
    async fn test_model_details_with_namespace() {
        let models = vec![HubModel::new("google/flan-t5-small").tags(["t5"])];
        let (status, json) = get_json(app_with(models), "/api/v1/models/google/flan-t5-small").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["modelId"], "google/flan-t5-small");
        assert_eq!(json["thermal_cost"], "Low");
    }

    #[tokio::test]
    async fn test_model_details_not_found() {
        let (status, json) = get_json(app_with(sample_models()), "/api/v1/models/gpt2").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["detail"], "Model gpt2 not found");
    }

    #[tokio::test]
    async fn test_handler_panic_is_internal_error() {
        let provider = Arc::new(StaticProvider::panicking());
        let app = create_router(AppState::with_provider(Settings::default(), provider));

        let (status, json) = get_json(app, "/api/v1/search?q=bert").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["detail"], "listing exploded");
    }
}
