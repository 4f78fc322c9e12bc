//! Mission module - raw inference request types.

mod input;
mod levels;

pub use input::{HealthHistory, MissionConditions, MissionInput};
pub use levels::{AgeBand, BoneDensityConcern, CycleIrregularity, RadiationLevel, SleepDisorder};
