//! Thermal cost estimation
//!
//! Maps a model identifier and its tags to a coarse compute-cost tier.

mod estimator;
mod tier;

pub use estimator::{estimate, explain, ThermalScore};
pub use tier::ThermalCost;
