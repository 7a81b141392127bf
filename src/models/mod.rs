mod forecast;
mod insight;
mod portfolio;
mod position;

pub use forecast::ForecastPoint;
pub use insight::Insight;
pub use portfolio::{PortfolioSnapshot, PositionPerformance};
pub use position::{AssetType, CreatePosition, Position};
