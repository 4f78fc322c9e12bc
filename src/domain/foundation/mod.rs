//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the inference pipeline.

mod bucket;
mod direction;
mod errors;
mod subsystem;

pub use bucket::RiskBucket;
pub use direction::Direction;
pub use errors::InputValidationError;
pub use subsystem::Subsystem;
