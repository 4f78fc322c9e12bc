//! Direction of a contributor's effect on risk.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a contributing factor pushes a subsystem's risk up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Elevated,
    Reduced,
}

impl Direction {
    /// Direction implied by the sign of a contribution.
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Direction::Reduced
        } else {
            Direction::Elevated
        }
    }

    /// Verb used in explanation text.
    pub fn verb(&self) -> &'static str {
        match self {
            Direction::Elevated => "elevates",
            Direction::Reduced => "reduces",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Elevated => write!(f, "elevated"),
            Direction::Reduced => write!(f, "reduced"),
        }
    }
}
