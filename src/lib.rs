//! # rust-life
//!
//! A Game of Life engine on a fixed, non-wrapping grid, with detection of
//! still lifes and short-period oscillators.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: The crate owns the grid and advances it on
//!    `tick()`. Drawing, input and timers belong to whoever embeds it.
//!
//! 2. **Simultaneous Updates**: Each generation is computed in full from
//!    the previous one into a scratch buffer, then swapped in.
//!
//! 3. **Reproducible**: Random seeding uses ChaCha8; the same seed and
//!    parameters always give the same starting grid.
//!
//! ## Stability
//!
//! Every tick compares the state entering the tick to the last 11 recorded
//! states. A match latches the simulation as stable and further ticks do
//! nothing. Still lifes are caught on generation 2, a period-`p`
//! oscillator on generation `p + 1` for `p <= 11`.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, configuration
//! - `grid`: Cell storage, neighbor counting, named patterns
//! - `rules`: The B3/S23 step
//! - `history`: Bounded history window and repeat detection
//! - `sim`: The `Simulation` object and tick cadence
//!
//! ## Example
//!
//! ```
//! use rust_life::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::new(16, 16).with_seed(7);
//! let mut sim = Simulation::from_config(&config).unwrap();
//!
//! let result = sim.run_until_stable(1_000);
//! assert_eq!(result.generation_count, sim.generation());
//! ```

pub mod core;
pub mod grid;
pub mod rules;
pub mod history;
pub mod sim;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{LifeError, LifeRng, Result, SimulationConfig};

pub use crate::grid::{count_live_neighbors, neighbor_coords, Grid, Pattern};

pub use crate::rules::{next_cell_state, step, step_into};

pub use crate::history::{HistoryWindow, HISTORY_CAPACITY};

pub use crate::sim::{Cadence, Simulation, TickResult};
