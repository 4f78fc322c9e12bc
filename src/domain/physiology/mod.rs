//! Physiology module - closed-form projections of mission stress.

mod projection;
mod terms;

pub use projection::{simulate, PhysiologyProjection};
pub use terms::{
    bone_terms, cortisol_terms, cycle_terms, equation_terms, Contribution, SubsystemTerms,
};
