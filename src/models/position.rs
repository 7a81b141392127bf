use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// The fixed set of investment types the dashboard understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Stocks,
    MutualFunds,
    Crypto,
    Bonds,
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetType::Stocks => write!(f, "stocks"),
            AssetType::MutualFunds => write!(f, "mutual_funds"),
            AssetType::Crypto => write!(f, "crypto"),
            AssetType::Bonds => write!(f, "bonds"),
        }
    }
}

impl FromStr for AssetType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ValidationError::MissingAssetType),
            "stocks" => Ok(AssetType::Stocks),
            "mutual_funds" => Ok(AssetType::MutualFunds),
            "crypto" => Ok(AssetType::Crypto),
            "bonds" => Ok(AssetType::Bonds),
            other => Err(ValidationError::UnknownAssetType(other.to_string())),
        }
    }
}

// One investment holding. Immutable once accepted into a portfolio;
// the only way to build one is through validated insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub id: uuid::Uuid,
    pub asset_type: AssetType,
    pub name: String,
    pub principal: f64,
    pub expected_return_pct: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Position {
    pub(crate) fn new(
        asset_type: AssetType,
        name: String,
        principal: f64,
        expected_return_pct: f64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            asset_type,
            name,
            principal,
            expected_return_pct,
            created_at: chrono::Utc::now(),
        }
    }

    /// One-period compounding projection of this holding's value.
    pub fn projected_value(&self) -> f64 {
        self.principal * (1.0 + self.expected_return_pct / 100.0)
    }
}

/// Raw form submission for a new position, validated before it becomes
/// a [`Position`]. `asset_type` arrives as the string the select control
/// produced, so an empty or unrecognized value is caught here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePosition {
    pub asset_type: String,
    pub name: String,
    pub principal: f64,
    pub expected_return_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_type_parses_all_known_values() {
        assert_eq!("stocks".parse::<AssetType>().unwrap(), AssetType::Stocks);
        assert_eq!(
            "mutual_funds".parse::<AssetType>().unwrap(),
            AssetType::MutualFunds
        );
        assert_eq!("crypto".parse::<AssetType>().unwrap(), AssetType::Crypto);
        assert_eq!("bonds".parse::<AssetType>().unwrap(), AssetType::Bonds);
    }

    #[test]
    fn asset_type_rejects_empty_and_unknown() {
        assert_eq!(
            "".parse::<AssetType>().unwrap_err(),
            ValidationError::MissingAssetType
        );
        assert_eq!(
            "  ".parse::<AssetType>().unwrap_err(),
            ValidationError::MissingAssetType
        );
        assert_eq!(
            "real_estate".parse::<AssetType>().unwrap_err(),
            ValidationError::UnknownAssetType("real_estate".to_string())
        );
    }

    #[test]
    fn asset_type_display_matches_wire_form() {
        for raw in ["stocks", "mutual_funds", "crypto", "bonds"] {
            let parsed: AssetType = raw.parse().unwrap();
            assert_eq!(parsed.to_string(), raw);
        }
    }

    #[test]
    fn projected_value_compounds_one_period() {
        let p = Position::new(AssetType::Stocks, "AAPL".into(), 1000.0, 10.0);
        assert_eq!(p.projected_value(), 1100.0);
    }

    #[test]
    fn projected_value_with_zero_return_is_principal() {
        let p = Position::new(AssetType::Bonds, "T-Bill".into(), 500.0, 0.0);
        assert_eq!(p.projected_value(), 500.0);
    }
}
