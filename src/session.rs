use std::collections::HashMap;

use crate::errors::{EngineError, ValidationError};
use crate::models::{
    AssetType, CreatePosition, ForecastPoint, Insight, PortfolioSnapshot, Position,
    PositionPerformance,
};
use crate::services::forecast_service;
use crate::services::insight_service::InsightScorer;
use crate::services::portfolio_service::PortfolioAggregator;

/// One dashboard session. Owns the single position collection for its
/// lifetime and derives forecasts, snapshots, and insights on demand;
/// dropping the session is what clears the portfolio.
pub struct Session {
    pub id: uuid::Uuid,
    pub started_at: chrono::DateTime<chrono::Utc>,
    portfolio: PortfolioAggregator,
    scorer: InsightScorer,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            started_at: chrono::Utc::now(),
            portfolio: PortfolioAggregator::new(),
            scorer: InsightScorer::new(),
        }
    }

    pub fn add_position(&mut self, input: CreatePosition) -> Result<&Position, ValidationError> {
        self.portfolio.add_position(input)
    }

    pub fn positions(&self) -> &[Position] {
        self.portfolio.positions()
    }

    pub fn snapshot(&self) -> PortfolioSnapshot {
        self.portfolio.snapshot()
    }

    pub fn performance(&self) -> Vec<PositionPerformance> {
        self.portfolio.performance_by_position()
    }

    pub fn allocation_percentages(&self) -> HashMap<AssetType, f64> {
        PortfolioAggregator::allocation_percentages(&self.portfolio.snapshot())
    }

    pub fn project(
        &self,
        monthly_income: f64,
        monthly_expenses: f64,
        horizon_months: i32,
    ) -> Result<Vec<ForecastPoint>, EngineError> {
        forecast_service::project(monthly_income, monthly_expenses, horizon_months)
    }

    pub fn insights(&self, forecast: Option<&[ForecastPoint]>) -> Vec<Insight> {
        self.scorer.generate(&self.portfolio.snapshot(), forecast)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
