//! Closed-form physiology simulator.

use std::sync::Arc;

use crate::config::ConstantsTable;
use crate::domain::features::FeatureVector;
use crate::domain::physiology::{simulate, PhysiologyProjection};
use crate::ports::Predictor;

/// `Predictor` backed by the closed-form equations in `domain::physiology`.
#[derive(Debug, Clone)]
pub struct PhysiologySimulator {
    constants: Arc<ConstantsTable>,
}

impl PhysiologySimulator {
    pub fn new(constants: Arc<ConstantsTable>) -> Self {
        Self { constants }
    }
}

impl Predictor for PhysiologySimulator {
    fn predict(&self, features: &FeatureVector) -> PhysiologyProjection {
        simulate(features, &self.constants)
    }

    fn name(&self) -> &str {
        "closed-form-simulator"
    }
}
