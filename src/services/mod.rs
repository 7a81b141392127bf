pub mod forecast_service;
pub mod insight_service;
pub mod portfolio_service;
