//! Thermal cost tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative compute cost of running a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThermalCost {
    Low,
    Medium,
    High,
}

impl ThermalCost {
    /// Rank used when ordering results, cheapest first
    pub fn rank(self) -> u8 {
        match self {
            ThermalCost::Low => 0,
            ThermalCost::Medium => 1,
            ThermalCost::High => 2,
        }
    }

    /// Rank of an optional tier; a missing tier sorts after `High`
    pub fn rank_of(cost: Option<ThermalCost>) -> u8 {
        cost.map(ThermalCost::rank).unwrap_or(3)
    }

    /// Map a numeric thermal score to a tier
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=1 => ThermalCost::Low,
            2..=3 => ThermalCost::Medium,
            _ => ThermalCost::High,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThermalCost::Low => "Low",
            ThermalCost::Medium => "Medium",
            ThermalCost::High => "High",
        }
    }
}

impl fmt::Display for ThermalCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
