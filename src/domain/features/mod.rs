//! Features module - engineered inputs for the physiology stage.
//!
//! `build_features` is the only place raw input is validated. Every later
//! stage assumes a well-formed `FeatureVector`.

mod builder;
mod clamp;
mod vector;

pub use builder::build_features;
pub use clamp::{ClampEvent, FieldDomain};
pub use vector::{Feature, FeatureVector};
