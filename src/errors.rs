use thiserror::Error;

/// Rejection of a submitted position. Each variant names the field that
/// failed so the caller can point back at the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Investment type must be selected")]
    MissingAssetType,
    #[error("Unknown investment type: {0}")]
    UnknownAssetType(String),
    #[error("Investment name cannot be empty")]
    MissingName,
    #[error("Amount must be greater than zero")]
    NonPositivePrincipal,
    #[error("Field '{0}' must be a finite number")]
    NonFiniteNumber(&'static str),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
