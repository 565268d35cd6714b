//! Generation update rule.
//!
//! Only the canonical B3/S23 rule is supported: a dead cell with exactly
//! three live neighbors is born, a live cell with two or three survives,
//! every other live cell dies.

pub mod engine;

pub use engine::{next_cell_state, step, step_into};
