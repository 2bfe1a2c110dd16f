//! Thermal Scout: a thermal-aware Hugging Face model search tool
//!
//! Estimates the relative compute cost ("thermal cost") of hub models from
//! their ids and tags, and layers it over the hub's keyword search as a CLI
//! and a JSON API.

pub mod cli;
pub mod config;
pub mod network;
pub mod registry;
pub mod search;
pub mod thermal;
pub mod web;

pub use config::Settings;
pub use registry::{HubModel, ModelProvider};
pub use search::{ModelRecord, Search, SearchRequest};
pub use thermal::{estimate, ThermalCost};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
