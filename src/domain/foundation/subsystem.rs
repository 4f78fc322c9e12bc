//! Subsystem enum naming the three physiological tracks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the physiological tracks scored and explained independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subsystem {
    Cortisol,
    Cycle,
    Bone,
}

impl Subsystem {
    /// All subsystems in default priority order.
    pub const ALL: [Subsystem; 3] = [Subsystem::Cortisol, Subsystem::Cycle, Subsystem::Bone];

    /// Returns the serialized key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subsystem::Cortisol => "cortisol",
            Subsystem::Cycle => "cycle",
            Subsystem::Bone => "bone",
        }
    }

    /// Returns the display name used in explanation text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Subsystem::Cortisol => "Cortisol load",
            Subsystem::Cycle => "Cycle variability",
            Subsystem::Bone => "Bone loss",
        }
    }

    /// Formats a projection value in this subsystem's unit.
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Subsystem::Cortisol => format!("{:.1}/100", value),
            Subsystem::Cycle => format!("±{:.2} days", value),
            Subsystem::Bone => format!("{:.2}% BMD per month", value),
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
