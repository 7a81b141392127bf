use serde::{Deserialize, Serialize};

/// Single month in a cash-flow projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// 1-based month index within the horizon.
    pub period: u32,
    pub income: f64,
    pub expenses: f64,
    /// income - expenses, constant across the projection. May be negative.
    pub period_savings: f64,
    /// Running sum of `period_savings` from period 1 through this one.
    pub cumulative_savings: f64,
}

impl ForecastPoint {
    /// Display label for chart axes, e.g. "Month 3".
    pub fn label(&self) -> String {
        format!("Month {}", self.period)
    }
}
