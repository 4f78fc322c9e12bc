//! Iunoia core - mission physiology inference pipeline
//!
//! This crate converts structured mission and health inputs into physiological
//! projections, normalized risk scores, and ranked human-readable explanations.
//!
//! # Pipeline
//!
//! ```text
//! MissionInput -> FeatureVector -> PhysiologyProjection -> RiskBreakdown -> ExplanationSet
//! ```
//!
//! Every stage is a pure function of the previous stage's output plus the
//! read-only [`config::ConstantsTable`]. The physiology stage sits behind the
//! [`ports::Predictor`] capability so the closed-form simulator can be swapped
//! for a trained model without touching any other stage.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
