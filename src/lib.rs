//! Computation core of the finboard personal-finance dashboard.
//!
//! Everything here is a synchronous, in-memory transformation: the
//! presentation layer collects inputs, calls into one of the services,
//! and renders what comes back. Values are returned at full precision;
//! currency and percentage rounding is the caller's job.
//!
//! The three services are independent of each other:
//! - [`services::forecast_service`] projects monthly cash flow,
//! - [`services::portfolio_service`] aggregates investment positions,
//! - [`services::insight_service`] scores rule-based advisory notes.
//!
//! [`Session`] ties them together with the ownership model the dashboard
//! uses: one portfolio per session, derived views computed on demand.

pub mod errors;
pub mod logging;
pub mod models;
pub mod services;
mod session;

pub use errors::{EngineError, ValidationError};
pub use models::{
    AssetType, CreatePosition, ForecastPoint, Insight, PortfolioSnapshot, Position,
    PositionPerformance,
};
pub use services::forecast_service::project;
pub use services::insight_service::{baseline_rules, InsightRule, InsightScorer};
pub use services::portfolio_service::PortfolioAggregator;
pub use session::Session;
