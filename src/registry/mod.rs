//! Model registry module
//!
//! Defines the [`ModelProvider`] trait the search pipeline queries, and the
//! Hugging Face Hub implementation of it.

mod huggingface;
mod traits;

#[cfg(test)]
pub(crate) mod memory;

pub use huggingface::{HuggingFaceHub, DEFAULT_API_URL};
pub use traits::*;
