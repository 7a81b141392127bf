use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::position::AssetType;

/// Point-in-time aggregate view over the current positions. Derived on
/// demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub total_value: f64,
    pub average_return_pct: f64,
    pub allocation_by_type: HashMap<AssetType, f64>,
    pub position_count: usize,
}

impl PortfolioSnapshot {
    pub fn empty() -> Self {
        Self {
            total_value: 0.0,
            average_return_pct: 0.0,
            allocation_by_type: HashMap::new(),
            position_count: 0,
        }
    }
}

/// One row of the performance table, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionPerformance {
    pub name: String,
    pub current_value: f64,
    pub projected_value: f64,
    pub return_pct: f64,
}
