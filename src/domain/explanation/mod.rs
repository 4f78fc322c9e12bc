//! Explanation module - human-readable reasons behind elevated risk.
//!
//! `explain` produces the ordered driver statements. `build_insight`
//! summarizes the run around its highest-risk subsystem.

mod generator;
mod insight;
mod statement;

pub use generator::explain;
pub use insight::{build_insight, mitigations, Insight, MetricChip, RiskCard, MAX_NEXT_STEPS};
pub use statement::{DriverStatement, ExplanationSet};
