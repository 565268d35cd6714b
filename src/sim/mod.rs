//! Simulation driver and tick cadence.
//!
//! - `simulation`: [`Simulation`], the engine object a presentation layer
//!   holds and ticks
//! - `cadence`: [`Cadence`], the tick interval and its speed steps

pub mod simulation;
pub mod cadence;

pub use simulation::{Simulation, TickResult};
pub use cadence::Cadence;
