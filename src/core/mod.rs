//! Core engine types: errors, RNG, configuration.

pub mod error;
pub mod rng;
pub mod config;

pub use error::{LifeError, Result};
pub use rng::LifeRng;
pub use config::SimulationConfig;
