//! Per-subsystem and aggregate risk.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RiskBucket, Subsystem};

/// Normalized score and bucket for one subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubsystemRisk {
    /// 0-1
    pub score: f64,
    pub bucket: RiskBucket,
}

/// Risk for every subsystem plus the weighted aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub cortisol: SubsystemRisk,
    pub cycle: SubsystemRisk,
    pub bone: SubsystemRisk,
    /// Weighted combination of subsystem scores, 0-1
    pub risk_score: f64,
    pub risk_overall: RiskBucket,
}

impl RiskBreakdown {
    pub fn subsystem(&self, subsystem: Subsystem) -> SubsystemRisk {
        match subsystem {
            Subsystem::Cortisol => self.cortisol,
            Subsystem::Cycle => self.cycle,
            Subsystem::Bone => self.bone,
        }
    }

    /// Subsystems scoring Moderate or High, in `Subsystem::ALL` order.
    pub fn elevated(&self) -> Vec<Subsystem> {
        Subsystem::ALL
            .into_iter()
            .filter(|s| self.subsystem(*s).bucket.is_elevated())
            .collect()
    }
}
