use tracing::{info, warn};

use crate::errors::EngineError;
use crate::models::ForecastPoint;

/// Project monthly cash flow over `horizon_months` future months.
///
/// Income and expenses are taken as constant for the whole horizon; each
/// point carries the flat monthly savings plus the running cumulative total.
/// Negative income or expenses are accepted and simply propagate.
///
/// A zero or negative horizon is rejected rather than producing an empty
/// projection, and non-finite inputs are rejected up front.
pub fn project(
    monthly_income: f64,
    monthly_expenses: f64,
    horizon_months: i32,
) -> Result<Vec<ForecastPoint>, EngineError> {
    if !monthly_income.is_finite() || !monthly_expenses.is_finite() {
        warn!(
            income = monthly_income,
            expenses = monthly_expenses,
            "Rejecting forecast with non-finite inputs"
        );
        return Err(EngineError::InvalidArgument(
            "Monthly income and expenses must be finite numbers".to_string(),
        ));
    }
    if horizon_months <= 0 {
        return Err(EngineError::InvalidArgument(format!(
            "Forecast horizon must be at least 1 month, got {}",
            horizon_months
        )));
    }

    info!(horizon_months, "Generating cash-flow forecast");

    let period_savings = monthly_income - monthly_expenses;

    let points = (1..=horizon_months as u32)
        .map(|period| ForecastPoint {
            period,
            income: monthly_income,
            expenses: monthly_expenses,
            period_savings,
            cumulative_savings: period_savings * period as f64,
        })
        .collect();

    Ok(points)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
