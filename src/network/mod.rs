//! HTTP networking module
//!
//! Provides the HTTP client used to query the model registry.

mod client;

pub use client::{HttpClient, HttpRequest, HttpResponse};
