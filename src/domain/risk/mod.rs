//! Risk module - normalized scores and buckets.

mod breakdown;
mod scorer;

pub use breakdown::{RiskBreakdown, SubsystemRisk};
pub use scorer::score_risks;
