//! Predictor port - the physiology stage seam.

use crate::domain::features::FeatureVector;
use crate::domain::physiology::PhysiologyProjection;

/// Maps an engineered feature vector to physiological projections.
///
/// The closed-form simulator and any trained model are interchangeable behind
/// this contract. Implementations must be deterministic and return values in
/// each subsystem's physical range; the pipeline rejects non-finite output.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> PhysiologyProjection;

    /// Short identifier used in logs.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Predictor for F
where
    F: Fn(&FeatureVector) -> PhysiologyProjection + Send + Sync,
{
    fn predict(&self, features: &FeatureVector) -> PhysiologyProjection {
        self(features)
    }
}
