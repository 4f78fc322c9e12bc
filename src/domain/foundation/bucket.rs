//! RiskBucket value object (Low / Moderate / High).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete risk category derived from a 0-1 score.
///
/// Ordered by severity, so `High > Moderate > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskBucket {
    Low,
    Moderate,
    High,
}

impl RiskBucket {
    /// Returns true for Moderate and High.
    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskBucket::Moderate | RiskBucket::High)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskBucket::Low => "Low",
            RiskBucket::Moderate => "Moderate",
            RiskBucket::High => "High",
        }
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
