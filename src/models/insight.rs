use serde::{Deserialize, Serialize};

/// A single advisory record. Fully regenerated on every scoring pass,
/// never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    /// Confidence, 0-100.
    pub score: u8,
    pub category: String,
}
