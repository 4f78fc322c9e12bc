//! Domain layer containing the inference stages and their types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared vocabulary (subsystems, buckets, directions, errors)
//! - `mission` - Raw mission and health-history input
//! - `features` - Feature Builder and the engineered feature vector
//! - `physiology` - Closed-form physiological projections
//! - `risk` - Risk normalization, bucketing and aggregation
//! - `explanation` - Ranked driver statements and the focus insight
//!
//! Every stage is a pure function of its inputs and the constants table.

pub mod explanation;
pub mod features;
pub mod foundation;
pub mod mission;
pub mod physiology;
pub mod risk;

#[cfg(test)]
pub(crate) mod test_support;
