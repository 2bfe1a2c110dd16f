//! Search orchestration module
//!
//! Queries the model registry, annotates each model with its thermal cost
//! and orders the results.

mod executor;
mod models;

pub use executor::{Search, DEFAULT_LOOKUP_LIMIT};
pub use models::*;
