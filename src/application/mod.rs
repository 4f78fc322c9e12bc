//! Application layer - the inference pipeline handler.
//!
//! Orchestrates the domain stages in order and assembles the output record.

mod error;
mod pipeline;
mod report;

pub use error::PipelineError;
pub use pipeline::InferencePipeline;
pub use report::{InferenceReport, OutputValues, PipelineTrace, RiskBreakdownOutput};
