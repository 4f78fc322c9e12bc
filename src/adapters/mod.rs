//! Adapters - Implementations of port interfaces.
//!
//! - `simulator` - Closed-form `Predictor`

pub mod simulator;

pub use simulator::PhysiologySimulator;
