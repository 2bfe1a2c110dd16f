//! Web server module
//!
//! Provides the JSON HTTP API for Thermal Scout.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use handlers::{HealthResponse, ModelDetailsResponse, ModelInfo, SearchResponse};
pub use routes::create_router;
pub use state::AppState;
