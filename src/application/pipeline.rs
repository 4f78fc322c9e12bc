//! InferencePipeline - runs the four inference stages for one request.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::PipelineError;
use super::report::{InferenceReport, OutputValues, PipelineTrace};
use crate::adapters::PhysiologySimulator;
use crate::config::ConstantsTable;
use crate::domain::explanation::{build_insight, explain};
use crate::domain::features::build_features;
use crate::domain::mission::MissionInput;
use crate::domain::risk::score_risks;
use crate::ports::Predictor;

/// Handler for inference requests.
///
/// Holds only read-only state, so one pipeline can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct InferencePipeline {
    constants: Arc<ConstantsTable>,
    predictor: Arc<dyn Predictor>,
}

impl InferencePipeline {
    /// Pipeline using the closed-form simulator.
    pub fn new(constants: Arc<ConstantsTable>) -> Self {
        let predictor = Arc::new(PhysiologySimulator::new(constants.clone()));
        Self {
            constants,
            predictor,
        }
    }

    /// Replaces the physiology stage. No other stage changes.
    pub fn with_predictor(mut self, predictor: Arc<dyn Predictor>) -> Self {
        self.predictor = predictor;
        self
    }

    pub fn predictor_name(&self) -> &str {
        self.predictor.name()
    }

    /// Runs every stage and returns the rounded output record.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the mission input is unusable
    /// - `InvalidProjection` if the predictor returns a non-finite value
    /// - `ProjectionOutOfRange` if a predicted value leaves its physical range
    pub fn run(&self, input: &MissionInput) -> Result<InferenceReport, PipelineError> {
        let trace = self.trace(input)?;
        let insight = build_insight(
            &trace.features,
            &trace.projection,
            &trace.breakdown,
            &self.constants,
        );

        info!(
            predictor = self.predictor.name(),
            risk_score = trace.breakdown.risk_score,
            risk_overall = %trace.breakdown.risk_overall,
            focus = %insight.focus,
            "Inference complete"
        );

        Ok(InferenceReport {
            outputs: OutputValues::from_stages(&trace.projection, &trace.breakdown),
            explanations: trace.explanations,
            insight,
        })
    }

    /// Runs every stage and returns the unrounded intermediate results.
    pub fn trace(&self, input: &MissionInput) -> Result<PipelineTrace, PipelineError> {
        // 1. Features
        let features = build_features(input, &self.constants)?;

        // 2. Physiology
        let projection = self.predictor.predict(&features);
        if let Some(subsystem) = projection.non_finite_subsystem() {
            return Err(PipelineError::InvalidProjection { subsystem });
        }
        if let Some(subsystem) = projection.out_of_range_subsystem() {
            warn!(
                predictor = self.predictor.name(),
                %subsystem,
                value = projection.value(subsystem),
                "Rejected out-of-range projection"
            );
            return Err(PipelineError::ProjectionOutOfRange { subsystem });
        }
        debug!(
            predictor = self.predictor.name(),
            cortisol_load = projection.cortisol_load,
            cycle_variability_days = projection.cycle_variability_days,
            bone_loss_pct_per_month = projection.bone_loss_pct_per_month,
            "Predicted physiology"
        );

        // 3. Risk
        let breakdown = score_risks(&projection, &self.constants);

        // 4. Explanations
        let explanations = explain(&features, &projection, &breakdown, &self.constants);
        debug!(statements = explanations.len(), "Generated explanations");

        Ok(PipelineTrace {
            features,
            projection,
            breakdown,
            explanations,
        })
    }

    /// Decodes a JSON request and runs it.
    pub fn run_json(&self, raw: &str) -> Result<InferenceReport, PipelineError> {
        let input = MissionInput::from_json(raw)?;
        self.run(&input)
    }
}
