//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Predictor` - Feature vector to physiological projection

mod predictor;

pub use predictor::Predictor;
