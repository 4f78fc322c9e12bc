//! Pipeline errors.

use thiserror::Error;

use crate::domain::foundation::{InputValidationError, Subsystem};

/// Reasons an inference run fails as a whole. No partial report is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    InvalidInput(#[from] InputValidationError),

    #[error("Predictor produced a non-finite {subsystem} projection")]
    InvalidProjection { subsystem: Subsystem },

    #[error("Predictor produced a {subsystem} projection outside its physical range")]
    ProjectionOutOfRange { subsystem: Subsystem },
}
