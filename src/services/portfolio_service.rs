use std::collections::HashMap;

use tracing::{info, warn};

use crate::errors::ValidationError;
use crate::models::{AssetType, CreatePosition, PortfolioSnapshot, Position, PositionPerformance};

/// Owns the ordered collection of positions for one session and derives
/// every aggregate view from it. Insertion order is the display order;
/// positions are immutable once accepted and live until the session ends.
#[derive(Debug, Default)]
pub struct PortfolioAggregator {
    positions: Vec<Position>,
}

impl PortfolioAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a submission and append it to the portfolio.
    ///
    /// On rejection the collection is left untouched and the error names
    /// the failing field.
    pub fn add_position(&mut self, input: CreatePosition) -> Result<&Position, ValidationError> {
        let asset_type: AssetType = input.asset_type.parse().inspect_err(|e| {
            warn!(error = %e, "Rejected position submission");
        })?;

        if input.name.trim().is_empty() {
            warn!("Rejected position submission with empty name");
            return Err(ValidationError::MissingName);
        }
        if !input.principal.is_finite() {
            return Err(ValidationError::NonFiniteNumber("principal"));
        }
        if input.principal <= 0.0 {
            warn!(principal = input.principal, "Rejected non-positive principal");
            return Err(ValidationError::NonPositivePrincipal);
        }
        if !input.expected_return_pct.is_finite() {
            return Err(ValidationError::NonFiniteNumber("expected_return_pct"));
        }

        let position = Position::new(
            asset_type,
            input.name.trim().to_string(),
            input.principal,
            input.expected_return_pct,
        );
        info!(id = %position.id, asset_type = %position.asset_type, "Added position");
        let idx = self.positions.len();
        self.positions.push(position);
        Ok(&self.positions[idx])
    }

    /// Positions in insertion order, for list rendering.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Derive the aggregate view of the current portfolio. The empty
    /// portfolio yields zeros and an empty allocation map.
    pub fn snapshot(&self) -> PortfolioSnapshot {
        if self.positions.is_empty() {
            return PortfolioSnapshot::empty();
        }

        let total_value: f64 = self.positions.iter().map(|p| p.principal).sum();
        let average_return_pct = self
            .positions
            .iter()
            .map(|p| p.expected_return_pct)
            .sum::<f64>()
            / self.positions.len() as f64;

        let mut allocation_by_type: HashMap<AssetType, f64> = HashMap::new();
        for p in &self.positions {
            *allocation_by_type.entry(p.asset_type).or_insert(0.0) += p.principal;
        }

        PortfolioSnapshot {
            total_value,
            average_return_pct,
            allocation_by_type,
            position_count: self.positions.len(),
        }
    }

    /// One performance row per position, in insertion order, with the
    /// one-period compounding projection applied.
    pub fn performance_by_position(&self) -> Vec<PositionPerformance> {
        self.positions
            .iter()
            .map(|p| PositionPerformance {
                name: p.name.clone(),
                current_value: p.principal,
                projected_value: p.projected_value(),
                return_pct: p.expected_return_pct,
            })
            .collect()
    }

    /// Each type's share of the portfolio as a percentage of total value.
    /// Empty when the snapshot has no value, so there is never a division
    /// by zero.
    pub fn allocation_percentages(snapshot: &PortfolioSnapshot) -> HashMap<AssetType, f64> {
        if snapshot.total_value <= 0.0 {
            return HashMap::new();
        }
        snapshot
            .allocation_by_type
            .iter()
            .map(|(&asset_type, &value)| (asset_type, value / snapshot.total_value * 100.0))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
